//! Layout constraints system

use sapling_ui_graphics::{EdgeInsets, Size};

/// Sentinel used for an unbounded maximum extent.
///
/// It is distinguished from every finite size: arithmetic on it never
/// produces a finite value, so an unbounded axis stays unbounded through
/// any amount of deflation.
pub const UNBOUNDED: f32 = f32::INFINITY;

/// Constraints used during layout: `[min_width, max_width] x [min_height, max_height]`.
///
/// Every constructor and transformation keeps `0 <= min <= max` on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    /// `[0, UNBOUNDED] x [0, UNBOUNDED]`, the constraints the root is laid out with.
    pub const UNBOUNDED: Constraints = Constraints {
        min_width: 0.0,
        max_width: UNBOUNDED,
        min_height: 0.0,
        max_height: UNBOUNDED,
    };

    /// Creates constraints with exact width and height.
    pub fn tight(size: Size) -> Self {
        Self {
            min_width: size.width,
            max_width: size.width,
            min_height: size.height,
            max_height: size.height,
        }
    }

    /// Creates constraints with loose bounds (min = 0, max = given values).
    pub fn loose(max: Size) -> Self {
        Self {
            min_width: 0.0,
            max_width: max.width,
            min_height: 0.0,
            max_height: max.height,
        }
    }

    /// Drops the minimums, keeping the maximums.
    pub fn loosen(&self) -> Self {
        Self {
            min_width: 0.0,
            min_height: 0.0,
            ..*self
        }
    }

    /// Returns true if these constraints have a single size that satisfies them.
    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    /// Returns true if both maximums are finite.
    pub fn is_bounded(&self) -> bool {
        self.max_width.is_finite() && self.max_height.is_finite()
    }

    /// Shrinks the constraints by the space `insets` reserve.
    ///
    /// Subtraction saturates: minimums never drop below zero, finite
    /// maximums never drop below the deflated minimum, and an unbounded
    /// maximum stays unbounded.
    pub fn deflate(&self, insets: EdgeInsets) -> Self {
        let (min_width, max_width) =
            deflate_axis(self.min_width, self.max_width, insets.horizontal());
        let (min_height, max_height) =
            deflate_axis(self.min_height, self.max_height, insets.vertical());
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Clamps `size` into these constraints.
    pub fn constrain(&self, size: Size) -> Size {
        Size {
            width: clamp_dimension(size.width, self.min_width, self.max_width),
            height: clamp_dimension(size.height, self.min_height, self.max_height),
        }
    }

    /// Largest size permitted, falling back to the minimum on unbounded axes.
    pub fn biggest_finite(&self) -> Size {
        Size {
            width: if self.max_width.is_finite() {
                self.max_width
            } else {
                self.min_width
            },
            height: if self.max_height.is_finite() {
                self.max_height
            } else {
                self.min_height
            },
        }
    }

    pub fn smallest(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    /// Clamps every bound of `self` into `outer`, so the result never
    /// allows a size `outer` rejects.
    pub fn enforce(&self, outer: Constraints) -> Self {
        Self {
            min_width: clamp_dimension(self.min_width, outer.min_width, outer.max_width),
            max_width: clamp_dimension(self.max_width, outer.min_width, outer.max_width),
            min_height: clamp_dimension(self.min_height, outer.min_height, outer.max_height),
            max_height: clamp_dimension(self.max_height, outer.min_height, outer.max_height),
        }
    }
}

fn deflate_axis(min: f32, max: f32, reserved: f32) -> (f32, f32) {
    let reserved = reserved.max(0.0);
    let min = (min - reserved).max(0.0);
    let max = if max.is_finite() {
        (max - reserved).max(min)
    } else {
        UNBOUNDED
    };
    (min, max)
}

/// Clamp that tolerates an unbounded maximum and never panics on inverted bounds.
pub fn clamp_dimension(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max.max(min))
}

#[cfg(test)]
#[path = "tests/constraints_tests.rs"]
mod tests;
