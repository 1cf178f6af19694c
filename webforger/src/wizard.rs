//! Three-step contact form.
//!
//! Step 1 asks for a name, step 2 for company details, step 3 for an optional
//! message. Moving forward is gated by the current step's required fields;
//! moving back never is. Finishing step 3 completes the wizard for good, and
//! completion is what unlocks the payment button.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use std::rc::Rc;
use serde::Serialize;
use thiserror::Error;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Name = 1,
    Company = 2,
    Message = 3,
}

impl Step {
    pub const COUNT: usize = 3;

    pub fn number(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Name => "Personal Information",
            Step::Company => "Company Details",
            Step::Message => "Additional Message",
        }
    }

    fn next(self) -> Option<Step> {
        match self {
            Step::Name => Some(Step::Company),
            Step::Company => Some(Step::Message),
            Step::Message => None,
        }
    }

    fn previous(self) -> Option<Step> {
        match self {
            Step::Name => None,
            Step::Company => Some(Step::Name),
            Step::Message => Some(Step::Company),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    CompanyName,
    Email,
    Message,
}

impl Field {
    pub fn is_required(self) -> bool {
        matches!(self, Field::FirstName | Field::LastName | Field::CompanyName)
    }

    pub fn required_message(self) -> &'static str {
        match self {
            Field::FirstName => "First name is required",
            Field::LastName => "Last name is required",
            Field::CompanyName => "Company name is required",
            Field::Email | Field::Message => "",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::CompanyName => &self.company_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::CompanyName => &mut self.company_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Error flags the view renders next to required inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub first_name: bool,
    pub last_name: bool,
    pub company_name: bool,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> bool {
        match field {
            Field::FirstName => self.first_name,
            Field::LastName => self.last_name,
            Field::CompanyName => self.company_name,
            Field::Email | Field::Message => false,
        }
    }

    fn set(&mut self, field: Field, value: bool) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::CompanyName => self.company_name = value,
            Field::Email | Field::Message => {}
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("missing required fields: {0:?}")]
    MissingFields(Vec<Field>),
    #[error("the form was already completed")]
    AlreadyCompleted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    To(Step),
    Completed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactWizard {
    step: Step,
    form: ContactForm,
    errors: FieldErrors,
    completed: bool,
}

impl Default for ContactWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactWizard {
    pub fn new() -> Self {
        Self {
            step: Step::Name,
            form: ContactForm::default(),
            errors: FieldErrors::default(),
            completed: false,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> FieldErrors {
        self.errors
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Stores `value`. A required field that is now filled in loses its
    /// error flag right away; a blank one keeps it until the next attempt.
    pub fn set_field(&mut self, field: Field, value: String) {
        if field.is_required() && !value.trim().is_empty() {
            self.errors.set(field, false);
        }
        *self.form.slot(field) = value;
    }

    fn required_fields(step: Step) -> &'static [Field] {
        match step {
            Step::Name => &[Field::FirstName, Field::LastName],
            Step::Company => &[Field::CompanyName],
            Step::Message => &[],
        }
    }

    /// Tries to leave the current step forwards.
    pub fn next(&mut self) -> Result<Advance, WizardError> {
        if self.completed {
            return Err(WizardError::AlreadyCompleted);
        }

        let mut missing = Vec::new();
        for &field in Self::required_fields(self.step) {
            let blank = self.form.get(field).trim().is_empty();
            self.errors.set(field, blank);
            if blank {
                missing.push(field);
            }
        }
        if !missing.is_empty() {
            return Err(WizardError::MissingFields(missing));
        }

        match self.step.next() {
            Some(step) => {
                self.step = step;
                Ok(Advance::To(step))
            }
            None => {
                self.completed = true;
                Ok(Advance::Completed)
            }
        }
    }

    /// Goes one step back. Staying on the first step is not an error.
    pub fn back(&mut self) -> Result<Step, WizardError> {
        if self.completed {
            return Err(WizardError::AlreadyCompleted);
        }
        if let Some(step) = self.step.previous() {
            self.step = step;
        }
        Ok(self.step)
    }
}

pub enum WizardAction {
    Set(Field, String),
    Next,
    Back,
}

impl Reducible for ContactWizard {
    type Action = WizardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut wizard = (*self).clone();
        match action {
            WizardAction::Set(field, value) => wizard.set_field(field, value),
            WizardAction::Next => match wizard.next() {
                Ok(advance) => log::debug!("contact wizard advanced: {:?}", advance),
                Err(e) => log::debug!("contact wizard blocked: {}", e),
            },
            WizardAction::Back => {
                if let Err(e) = wizard.back() {
                    log::debug!("contact wizard blocked: {}", e);
                }
            }
        }
        if wizard == *self {
            self
        } else {
            Rc::new(wizard)
        }
    }
}
