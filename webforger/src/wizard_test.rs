use super::*;

fn filled_name(wizard: &mut ContactWizard) {
    wizard.set_field(Field::FirstName, "Ada".to_string());
    wizard.set_field(Field::LastName, "Lovelace".to_string());
}

#[test]
fn empty_first_name_blocks_step_one() {
    let mut wizard = ContactWizard::new();
    wizard.set_field(Field::LastName, "Lovelace".to_string());

    let err = wizard.next().unwrap_err();
    assert_eq!(err, WizardError::MissingFields(vec![Field::FirstName]));
    assert_eq!(wizard.step(), Step::Name);
    assert!(wizard.errors().first_name);
    assert!(!wizard.errors().last_name);
    assert_eq!(wizard.form().last_name, "Lovelace");

    wizard.set_field(Field::FirstName, "Ada".to_string());
    assert!(!wizard.errors().first_name);
    assert_eq!(wizard.next(), Ok(Advance::To(Step::Company)));
}

#[test]
fn whitespace_does_not_count_as_a_value() {
    let mut wizard = ContactWizard::new();
    wizard.set_field(Field::FirstName, "   ".to_string());
    wizard.set_field(Field::LastName, "\t".to_string());

    assert_eq!(
        wizard.next(),
        Err(WizardError::MissingFields(vec![Field::FirstName, Field::LastName]))
    );
    assert!(wizard.errors().first_name && wizard.errors().last_name);
}

#[test]
fn blank_input_keeps_existing_error() {
    let mut wizard = ContactWizard::new();
    let _ = wizard.next();
    wizard.set_field(Field::FirstName, " ".to_string());
    assert!(wizard.errors().first_name);
}

#[test]
fn company_required_but_email_optional() {
    let mut wizard = ContactWizard::new();
    filled_name(&mut wizard);
    wizard.next().unwrap();

    assert!(wizard.next().is_err());
    assert!(wizard.errors().company_name);
    assert_eq!(wizard.step(), Step::Company);

    wizard.set_field(Field::CompanyName, "Analytical Engines".to_string());
    assert_eq!(wizard.next(), Ok(Advance::To(Step::Message)));
    assert!(wizard.form().email.is_empty());
}

#[test]
fn back_is_always_allowed_before_completion() {
    let mut wizard = ContactWizard::new();
    assert_eq!(wizard.back(), Ok(Step::Name));

    filled_name(&mut wizard);
    wizard.next().unwrap();
    assert_eq!(wizard.back(), Ok(Step::Name));
    assert_eq!(wizard.form().first_name, "Ada");
}

#[test]
fn finishing_step_three_completes_once() {
    let mut wizard = ContactWizard::new();
    filled_name(&mut wizard);
    wizard.next().unwrap();
    wizard.set_field(Field::CompanyName, "Analytical Engines".to_string());
    wizard.next().unwrap();
    assert!(!wizard.completed());

    assert_eq!(wizard.next(), Ok(Advance::Completed));
    assert!(wizard.completed());

    assert_eq!(wizard.next(), Err(WizardError::AlreadyCompleted));
    assert_eq!(wizard.back(), Err(WizardError::AlreadyCompleted));
    assert!(wizard.completed());
    assert_eq!(wizard.step(), Step::Message);
}

#[test]
fn step_metadata() {
    assert_eq!(Step::Name.number(), 1);
    assert_eq!(Step::Message.number(), Step::COUNT);
    assert_eq!(Step::Company.title(), "Company Details");
    assert_eq!(Field::CompanyName.required_message(), "Company name is required");
    assert!(!Field::Email.is_required());
}

#[test]
fn reducer_applies_actions() {
    let wizard = Rc::new(ContactWizard::new());
    let wizard = wizard
        .reduce(WizardAction::Set(Field::FirstName, "Ada".to_string()))
        .reduce(WizardAction::Set(Field::LastName, "Lovelace".to_string()))
        .reduce(WizardAction::Next);
    assert_eq!(wizard.step(), Step::Company);

    let blocked = wizard.clone().reduce(WizardAction::Next);
    assert_eq!(blocked.step(), Step::Company);
    assert!(blocked.errors().company_name);

    let back = blocked.reduce(WizardAction::Back);
    assert_eq!(back.step(), Step::Name);
}
