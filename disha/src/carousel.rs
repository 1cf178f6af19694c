//! Circular carousel layout.
//!
//! Every image gets its pose from its signed circular distance to the
//! current center image. Only the center and two neighbours on each side are
//! rendered; everything further away is hidden.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use std::rc::Rc;
use yew::prelude::*;

/// How far from the center an image may be and still be rendered.
pub const VISIBLE_RADIUS: i64 = 2;

const CENTER_Z_INDEX: i32 = 10;

/// Signed shortest distance from `center` to `idx` on a ring of `total`
/// slots, wrapped into `(-total/2, total/2]`.
pub fn circular_offset(idx: usize, center: usize, total: usize) -> i64 {
    if total == 0 {
        return 0;
    }
    let total = total as i64;
    let mut offset = idx as i64 - center as i64;
    // Doubled comparisons keep odd totals exact.
    if 2 * offset > total {
        offset -= total;
    }
    if 2 * offset <= -total {
        offset += total;
    }
    offset
}

/// Index of the image that follows `center` on the ring.
pub fn advance(center: usize, total: usize) -> usize {
    if total == 0 {
        0
    } else {
        (center + 1) % total
    }
}

/// Spring parameters for pose changes. Rendered as a CSS transition whose
/// length is the time the spring needs to settle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            stiffness: 200.0,
            damping: 30.0,
            mass: 1.0,
        }
    }
}

impl Spring {
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Time until the slowest mode has decayed to ~2% of its amplitude.
    pub fn settle_ms(&self) -> u32 {
        let natural = (self.stiffness / self.mass).sqrt();
        let zeta = self.damping_ratio();
        let decay_rate = if zeta < 1.0 {
            zeta * natural
        } else {
            natural * (zeta - (zeta * zeta - 1.0).sqrt())
        };
        if decay_rate <= f64::EPSILON {
            return 0;
        }
        (4.0 / decay_rate * 1000.0).round() as u32
    }

    pub fn transition_css(&self) -> String {
        format!(
            "transform {ms}ms cubic-bezier(0.22, 1, 0.36, 1), opacity {ms}ms ease-out, filter {ms}ms ease-out",
            ms = self.settle_ms()
        )
    }
}

/// Pose an image grows out of when it becomes visible again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Presence {
    pub opacity: f64,
    pub scale: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImageLayout {
    pub offset: i64,
    pub width: &'static str,
    pub height: &'static str,
    pub min_width: &'static str,
    pub min_height: &'static str,
    pub z_index: i32,
    pub opacity: f64,
    pub scale: f64,
    pub translate_x_vw: f64,
    pub rotate_y_deg: f64,
    pub blur_px: f64,
    pub enter: Presence,
    pub spring: Spring,
}

impl ImageLayout {
    pub fn is_center(&self) -> bool {
        self.offset == 0
    }

    fn filter(&self) -> String {
        if self.is_center() {
            "drop-shadow(0 0 48px #FFD70088) blur(0.5px)".to_string()
        } else {
            format!(
                "blur({}px) brightness(0.8) drop-shadow(0 0 32px #FFD70044)",
                self.blur_px
            )
        }
    }

    fn transform(&self) -> String {
        if self.is_center() {
            format!(
                "translate(-50%, -50%) scale({}) rotateY({}deg)",
                self.scale, self.rotate_y_deg
            )
        } else {
            format!(
                "translate(-50%, -50%) translateX({}vw) scale({}) rotateY({}deg)",
                self.translate_x_vw, self.scale, self.rotate_y_deg
            )
        }
    }

    /// Inline CSS for the image in its settled pose. The entrance keyframes
    /// read `--enter-opacity` and `--enter-scale`.
    pub fn style(&self) -> String {
        let mut style = format!(
            "width: {}; height: {}; min-width: {}; min-height: {}; z-index: {}; opacity: {}; filter: {}; transform: {}; transition: {}; --enter-opacity: {}; --enter-scale: {}; animation: disha-enter {}ms ease-out;",
            self.width,
            self.height,
            self.min_width,
            self.min_height,
            self.z_index,
            self.opacity,
            self.filter(),
            self.transform(),
            self.spring.transition_css(),
            self.enter.opacity,
            self.enter.scale,
            self.spring.settle_ms(),
        );
        if self.is_center() {
            style.push_str(" box-shadow: 0 0 48px 8px #FFD70088, 0 0 0 4px #FFD700;");
        }
        style
    }
}

/// Pose of image `idx` when `center` is in the middle, or `None` when it is
/// too far away to be shown.
pub fn image_layout(idx: usize, center: usize, total: usize) -> Option<ImageLayout> {
    let offset = circular_offset(idx, center, total);
    let distance = offset.abs();
    if distance > VISIBLE_RADIUS {
        return None;
    }

    if offset == 0 {
        return Some(ImageLayout {
            offset,
            width: "18vw",
            height: "32vw",
            min_width: "100px",
            min_height: "180px",
            z_index: CENTER_Z_INDEX,
            opacity: 1.0,
            scale: 1.0,
            translate_x_vw: 0.0,
            rotate_y_deg: 0.0,
            blur_px: 0.0,
            enter: Presence { opacity: 0.0, scale: 0.95 },
            spring: Spring::default(),
        });
    }

    let steps_in = (VISIBLE_RADIUS - distance) as f64;
    let side = offset.signum() as f64;
    let offset_f = offset as f64;
    let distance_f = distance as f64;
    Some(ImageLayout {
        offset,
        width: "10vw",
        height: "18vw",
        min_width: "60px",
        min_height: "90px",
        z_index: CENTER_Z_INDEX - distance as i32,
        opacity: 0.45 + 0.25 * steps_in,
        scale: 0.7 + 0.15 * steps_in,
        translate_x_vw: offset_f * 32.0 + side * 8.0 * distance_f,
        rotate_y_deg: offset_f * -32.0,
        blur_px: 2.0 + distance_f * 2.0,
        enter: Presence { opacity: 0.0, scale: 0.8 },
        spring: Spring::default(),
    })
}

/// Ring position driven by the auto-advance timer.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    pub center: usize,
    pub total: usize,
}

impl CarouselState {
    pub fn new(total: usize) -> Self {
        Self { center: 0, total }
    }

    pub fn layout(&self, idx: usize) -> Option<ImageLayout> {
        image_layout(idx, self.center, self.total)
    }
}

pub enum CarouselAction {
    Advance,
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CarouselAction::Advance => Rc::new(Self {
                center: advance(self.center, self.total),
                total: self.total,
            }),
        }
    }
}
