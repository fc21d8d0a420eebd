//! Geometry for the purely decorative parts of the house.

pub const STAR_COUNT: usize = 50;
pub const PANES_PER_WINDOW: usize = 4;

/// A starfield dot, positioned in percent of its container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarDot {
    pub left: f64,
    pub top: f64,
}

impl StarDot {
    pub fn style(&self) -> String {
        format!("left: {:.3}%; top: {:.3}%;", self.left, self.top)
    }
}

/// Place `count` dots independently. `random` should yield samples in `[0, 1)`;
/// anything else is wrapped back into that range.
pub fn scatter_stars(count: usize, mut random: impl FnMut() -> f64) -> Vec<StarDot> {
    (0..count)
        .map(|_| {
            let left = percent(random());
            let top = percent(random());
            StarDot { left, top }
        })
        .collect()
}

fn percent(sample: f64) -> f64 {
    if !sample.is_finite() {
        return 0.0;
    }
    // rem_euclid rounds tiny negatives up to exactly 1.0
    let wrapped = sample.rem_euclid(1.0);
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped * 100.0
    }
}
