//! Open/close sequencing for the bubble menu overlay.
//!
//! The controller is a reducer over [`MenuCommand`]s. It never touches the
//! DOM: it only decides which phase the overlay is in, where every pill should
//! end up, and which route to navigate to once an exit animation finishes.
//! The view turns that into CSS and reports completions back with
//! [`MenuCommand::AnimationFinished`].
//!
//! Every new entrance or exit bumps the generation. Completions that carry an
//! older generation belong to an animation that was superseded and are
//! dropped, so the last request always wins.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::rc::Rc;
use yew::prelude::*;

/// Each label starts its entrance this fraction of the pill duration after
/// its pill.
pub const LABEL_LAG: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Power3Out,
    Power3In,
}

impl Ease {
    pub fn to_css(self) -> &'static str {
        match self {
            Ease::Power3Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Ease::Power3In => "cubic-bezier(0.55, 0.055, 0.675, 0.19)",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationSettings {
    pub duration_s: f64,
    pub stagger_s: f64,
    /// Random per-item delay added on top of the stagger, in `[-jitter, jitter]`.
    pub jitter_s: f64,
    pub exit_duration_s: f64,
    pub label_offset_px: f64,
    /// Narrower viewports render every pill unrotated.
    pub desktop_min_width: f64,
    pub ease: Ease,
    pub exit_ease: Ease,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            duration_s: 0.5,
            stagger_s: 0.12,
            jitter_s: 0.05,
            exit_duration_s: 0.2,
            label_offset_px: 24.0,
            desktop_min_width: 900.0,
            ease: Ease::Power3Out,
            exit_ease: Ease::Power3In,
        }
    }
}

/// Where a pill and its label should be once the current animation is done.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemPose {
    pub scale: f64,
    pub label_y: f64,
    pub label_opacity: f64,
    pub rotation: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

pub enum MenuCommand<R> {
    Toggle { viewport_width: f64 },
    Open { viewport_width: f64 },
    Close,
    Escape,
    ItemClicked(R),
    AnimationFinished(u64),
    Resize { viewport_width: f64 },
}

/// A route to visit, emitted once the exit animation of `seq` completed.
#[derive(Clone, Debug, PartialEq)]
pub struct Navigation<R> {
    pub route: R,
    pub seq: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuController<R> {
    phase: MenuPhase,
    generation: u64,
    overlay_visible: bool,
    rotations: Vec<f64>,
    poses: Vec<ItemPose>,
    pending: Option<R>,
    navigation: Option<Navigation<R>>,
    settings: AnimationSettings,
    rng: u32,
}

impl<R: Clone + PartialEq> MenuController<R> {
    pub fn new(rotations: Vec<f64>, settings: AnimationSettings) -> Self {
        let poses = rotations
            .iter()
            .map(|_| hidden_pose(&settings, 0.0))
            .collect();
        Self {
            phase: MenuPhase::Closed,
            generation: 0,
            overlay_visible: false,
            rotations,
            poses,
            pending: None,
            navigation: None,
            settings,
            rng: 0x9E37_79B9,
        }
    }

    pub fn phase(&self) -> MenuPhase {
        self.phase
    }

    /// `true` from the moment an entrance starts until a close is requested.
    pub fn is_open(&self) -> bool {
        matches!(self.phase, MenuPhase::Opening | MenuPhase::Open)
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn poses(&self) -> &[ItemPose] {
        &self.poses
    }

    pub fn pending(&self) -> Option<&R> {
        self.pending.as_ref()
    }

    pub fn navigation(&self) -> Option<&Navigation<R>> {
        self.navigation.as_ref()
    }

    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }

    /// How long the animation of the current phase runs, in milliseconds.
    pub fn animation_ms(&self) -> u32 {
        let seconds = match self.phase {
            MenuPhase::Opening => self
                .poses
                .iter()
                .map(|pose| pose.delay_s + pose.duration_s * (1.0 + LABEL_LAG))
                .fold(0.0, f64::max),
            MenuPhase::Closing => self.settings.exit_duration_s,
            MenuPhase::Closed | MenuPhase::Open => 0.0,
        };
        (seconds * 1000.0).ceil() as u32
    }

    /// Applies `command`. Returns `false` and leaves the state untouched
    /// when the command does not apply to the current phase.
    pub fn apply(&mut self, command: MenuCommand<R>) -> bool {
        match command {
            MenuCommand::Toggle { viewport_width } => {
                if self.is_open() {
                    self.begin_close(None);
                } else {
                    self.begin_open(viewport_width);
                }
                true
            }
            MenuCommand::Open { viewport_width } => {
                if self.is_open() {
                    return false;
                }
                self.begin_open(viewport_width);
                true
            }
            MenuCommand::Close | MenuCommand::Escape => {
                if !self.is_open() {
                    return false;
                }
                self.begin_close(None);
                true
            }
            MenuCommand::ItemClicked(route) => {
                if !self.is_open() {
                    return false;
                }
                self.begin_close(Some(route));
                true
            }
            MenuCommand::AnimationFinished(generation) => {
                if generation != self.generation {
                    return false;
                }
                match self.phase {
                    MenuPhase::Opening => {
                        self.phase = MenuPhase::Open;
                        true
                    }
                    MenuPhase::Closing => {
                        self.phase = MenuPhase::Closed;
                        self.overlay_visible = false;
                        self.navigation = self
                            .pending
                            .take()
                            .map(|route| Navigation { route, seq: generation });
                        true
                    }
                    MenuPhase::Closed | MenuPhase::Open => false,
                }
            }
            MenuCommand::Resize { viewport_width } => {
                if !self.is_open() {
                    return false;
                }
                let mut changed = false;
                for (idx, pose) in self.poses.iter_mut().enumerate() {
                    let rotation =
                        rotation_for(&self.settings, self.rotations[idx], viewport_width);
                    if pose.rotation != rotation {
                        pose.rotation = rotation;
                        changed = true;
                    }
                }
                changed
            }
        }
    }

    fn begin_open(&mut self, viewport_width: f64) {
        self.generation += 1;
        self.phase = MenuPhase::Opening;
        self.overlay_visible = true;
        self.pending = None;
        let mut poses = Vec::with_capacity(self.rotations.len());
        for idx in 0..self.rotations.len() {
            let base = self.rotations[idx];
            let jitter = self.next_jitter();
            poses.push(ItemPose {
                scale: 1.0,
                label_y: 0.0,
                label_opacity: 1.0,
                rotation: rotation_for(&self.settings, base, viewport_width),
                delay_s: (idx as f64 * self.settings.stagger_s + jitter).max(0.0),
                duration_s: self.settings.duration_s,
            });
        }
        self.poses = poses;
    }

    fn begin_close(&mut self, pending: Option<R>) {
        self.generation += 1;
        self.phase = MenuPhase::Closing;
        self.pending = pending;
        for pose in &mut self.poses {
            *pose = hidden_pose(&self.settings, pose.rotation);
        }
    }

    /// xorshift32, mapped onto `[-jitter_s, jitter_s]`.
    fn next_jitter(&mut self) -> f64 {
        let mut x = self.rng;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.rng = x;
        let unit = f64::from(x) / f64::from(u32::MAX);
        (unit * 2.0 - 1.0) * self.settings.jitter_s
    }
}

fn hidden_pose(settings: &AnimationSettings, rotation: f64) -> ItemPose {
    ItemPose {
        scale: 0.0,
        label_y: settings.label_offset_px,
        label_opacity: 0.0,
        rotation,
        delay_s: 0.0,
        duration_s: settings.exit_duration_s,
    }
}

fn rotation_for(settings: &AnimationSettings, base: f64, viewport_width: f64) -> f64 {
    if viewport_width >= settings.desktop_min_width {
        base
    } else {
        0.0
    }
}

impl<R: Clone + PartialEq> Reducible for MenuController<R> {
    type Action = MenuCommand<R>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}
