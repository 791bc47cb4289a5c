//! Per-axis size negotiation primitive.

use std::ops::Add;

/// Minimum, natural and maximum extent of an element along one axis.
///
/// Well-formed configs satisfy `0 <= min <= nat <= max`. Malformed ones are
/// accepted and handled leniently by the distribution code.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SizeConfig {
    pub min: f32,
    pub nat: f32,
    pub max: f32,
}

impl SizeConfig {
    pub const ZERO: SizeConfig = SizeConfig {
        min: 0.0,
        nat: 0.0,
        max: 0.0,
    };

    pub const fn elastic(min: f32, nat: f32, max: f32) -> Self {
        Self { min, nat, max }
    }

    /// A config that can take exactly one size.
    pub const fn fixed(size: f32) -> Self {
        Self {
            min: size,
            nat: size,
            max: size,
        }
    }

    /// Zero minimum and natural size, growing up to `max`.
    pub const fn stretchy(max: f32) -> Self {
        Self {
            min: 0.0,
            nat: 0.0,
            max,
        }
    }

    /// Componentwise sum; combines siblings placed side by side.
    pub fn add(a: SizeConfig, b: SizeConfig) -> SizeConfig {
        SizeConfig {
            min: a.min + b.min,
            nat: a.nat + b.nat,
            max: a.max + b.max,
        }
    }

    /// Componentwise maximum; combines siblings stacked across the axis.
    pub fn maximum(a: SizeConfig, b: SizeConfig) -> SizeConfig {
        SizeConfig {
            min: a.min.max(b.min),
            nat: a.nat.max(b.nat),
            max: a.max.max(b.max),
        }
    }

    /// How much the element can give up below its natural size.
    pub fn compressible(&self) -> f32 {
        (self.nat - self.min).max(0.0)
    }

    /// How much the element can grow past its natural size.
    pub fn expandable(&self) -> f32 {
        (self.max - self.nat).max(0.0)
    }

    pub fn with_nat(self, nat: f32) -> Self {
        Self { nat, ..self }
    }

    pub fn is_fixed(&self) -> bool {
        self.min == self.nat && self.nat == self.max
    }

    pub fn is_valid(&self) -> bool {
        0.0 <= self.min && self.min <= self.nat && self.nat <= self.max
    }
}

impl Add for SizeConfig {
    type Output = SizeConfig;

    fn add(self, rhs: SizeConfig) -> SizeConfig {
        SizeConfig::add(self, rhs)
    }
}

impl std::iter::Sum for SizeConfig {
    fn sum<I: Iterator<Item = SizeConfig>>(iter: I) -> SizeConfig {
        iter.fold(SizeConfig::ZERO, SizeConfig::add)
    }
}

#[cfg(test)]
#[path = "tests/size_config_tests.rs"]
mod tests;
