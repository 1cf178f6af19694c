//! Shared math for the decorative backgrounds.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Length of one animation cycle for an effect whose cycle at speed 1 is
/// `base_s`. Non-positive speeds freeze the effect.
pub fn cycle_seconds(base_s: f64, speed: f64) -> Option<f64> {
    if speed > 0.0 && speed.is_finite() {
        Some(base_s / speed)
    } else {
        None
    }
}

/// CSS `animation` shorthand, or `none` for a frozen effect.
pub fn animation_css(name: &str, base_s: f64, speed: f64, direction: &str) -> String {
    match cycle_seconds(base_s, speed) {
        Some(seconds) => format!("{name} {seconds:.2}s linear infinite {direction}"),
        None => "none".to_string(),
    }
}

/// Evenly spaced gradient stops, e.g. `"#a 0%, #b 50%, #c 100%"`.
pub fn gradient_stops<S: AsRef<str>>(colors: &[S]) -> String {
    match colors.len() {
        0 => "transparent 0%, transparent 100%".to_string(),
        1 => format!("{c} 0%, {c} 100%", c = colors[0].as_ref()),
        n => colors
            .iter()
            .enumerate()
            .map(|(i, color)| {
                let pct = i as f64 * 100.0 / (n - 1) as f64;
                format!("{} {}%", color.as_ref(), pct.round())
            })
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// How many blinds fit: never more than requested, never narrower than
/// `min_width`, always at least one.
pub fn blind_count(width: f64, requested: u32, min_width: f64) -> u32 {
    let requested = requested.max(1);
    if min_width <= 0.0 || width <= 0.0 {
        return requested;
    }
    let fitting = (width / min_width).floor() as u32;
    requested.min(fitting).max(1)
}

/// `#rrggbb` (or `#rgb`) as `rgba(r, g, b, alpha)`.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> Option<String> {
    let digits = hex.strip_prefix('#')?;
    if !digits.is_ascii() {
        return None;
    }
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits[..6].to_string(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some(format!(
        "rgba({}, {}, {}, {})",
        channel(0)?,
        channel(2)?,
        channel(4)?,
        alpha.clamp(0.0, 1.0)
    ))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
    Diagonal,
}

/// Scroll position of a repeating square grid. Offsets stay in
/// `[0, size)` so the grid wraps seamlessly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridScroll {
    pub size: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl GridScroll {
    pub fn new(size: f64) -> Self {
        Self {
            size: size.max(1.0),
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Advance one frame. Speeds below 0.1 are treated as 0.1.
    pub fn step(&mut self, direction: Direction, speed: f64) {
        let s = speed.max(0.1);
        let size = self.size;
        let wrap = |value: f64| value.rem_euclid(size);
        match direction {
            Direction::Right => self.offset_x = wrap(self.offset_x - s),
            Direction::Left => self.offset_x = wrap(self.offset_x + s),
            Direction::Up => self.offset_y = wrap(self.offset_y + s),
            Direction::Down => self.offset_y = wrap(self.offset_y - s),
            Direction::Diagonal => {
                self.offset_x = wrap(self.offset_x - s);
                self.offset_y = wrap(self.offset_y - s);
            }
        }
    }

    /// Column/row of the cell under a point, counted from the first cell
    /// drawn at `-offset`.
    pub fn cell_at(&self, x: f64, y: f64) -> (i64, i64) {
        (
            ((x + self.offset_x) / self.size).floor() as i64,
            ((y + self.offset_y) / self.size).floor() as i64,
        )
    }

    /// Top-left corner of cell `(col, row)` on screen.
    pub fn cell_origin(&self, col: i64, row: i64) -> (f64, f64) {
        (
            col as f64 * self.size - self.offset_x,
            row as f64 * self.size - self.offset_y,
        )
    }
}
