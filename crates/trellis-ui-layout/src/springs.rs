//! Spring/strut distribution of main-axis space among a group's children.
//!
//! Surplus space goes to springs in equal shares. A shortfall is recovered from
//! rigid children in proportion to how far each can shrink below its natural
//! size; whatever cannot be recovered overflows past the trailing edge and is
//! left for the drawing code to clip.

use crate::size_config::SizeConfig;
use smallvec::SmallVec;

/// How a child takes part in main-axis distribution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChildKind {
    /// Sized from its own config; shrinks under compression, never stretches.
    #[default]
    Rigid,
    /// Elastic filler with zero natural size that absorbs surplus space.
    Spring,
}

/// Main-axis demand of a single child.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearChild {
    pub kind: ChildKind,
    pub config: SizeConfig,
}

impl LinearChild {
    pub fn new(kind: ChildKind, config: SizeConfig) -> Self {
        Self { kind, config }
    }

    pub fn rigid(config: SizeConfig) -> Self {
        Self::new(ChildKind::Rigid, config)
    }

    pub fn spring(config: SizeConfig) -> Self {
        Self::new(ChildKind::Spring, config)
    }

    pub fn is_spring(&self) -> bool {
        self.kind == ChildKind::Spring
    }
}

/// Aggregates gathered in one walk over the children.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Measurements {
    /// Sum of natural sizes of rigid children.
    pub natural_sum: f32,
    /// Sum of `nat - min` over rigid children.
    pub available_compression: f32,
    pub spring_count: usize,
}

/// Final main-axis sizes for one layout pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Distribution {
    pub sizes: SmallVec<[f32; 8]>,
    pub measurements: Measurements,
    /// `available - natural_sum`; negative when the children do not fit.
    pub excess: f32,
    /// Part of a shortfall that compression could not recover.
    pub uncovered: f32,
}

impl Distribution {
    /// Sum of the assigned sizes.
    pub fn total(&self) -> f32 {
        self.sizes.iter().copied().sum()
    }

    /// Surplus left as trailing space because there was no spring to take it.
    pub fn unconsumed(&self) -> f32 {
        if self.excess > 0.0 && self.measurements.spring_count == 0 {
            self.excess
        } else {
            0.0
        }
    }

    pub fn overflows(&self) -> bool {
        self.uncovered > 0.0
    }
}

/// Walks the children once, summing rigid demands and counting springs.
pub fn measure_children(children: &[LinearChild]) -> Measurements {
    children
        .iter()
        .fold(Measurements::default(), |mut acc, child| {
            match child.kind {
                ChildKind::Spring => acc.spring_count += 1,
                ChildKind::Rigid => {
                    acc.natural_sum += child.config.nat;
                    acc.available_compression += child.config.compressible();
                }
            }
            acc
        })
}

/// Assigns every child its main-axis size for a group of extent `available`.
pub fn distribute(available: f32, children: &[LinearChild]) -> Distribution {
    let measurements = measure_children(children);
    let excess = available - measurements.natural_sum;
    let mut sizes: SmallVec<[f32; 8]> = children
        .iter()
        .map(|child| match child.kind {
            ChildKind::Spring => 0.0,
            ChildKind::Rigid => child.config.nat,
        })
        .collect();

    let uncovered = if excess >= 0.0 {
        expand_springs(excess, &measurements, children, &mut sizes);
        0.0
    } else {
        compress_children(excess, &measurements, children, &mut sizes)
    };

    Distribution {
        sizes,
        measurements,
        excess,
        uncovered,
    }
}

/// Splits a non-negative `excess` evenly across the springs.
fn expand_springs(
    excess: f32,
    measurements: &Measurements,
    children: &[LinearChild],
    sizes: &mut [f32],
) {
    debug_assert_eq!(children.len(), sizes.len());
    if measurements.spring_count == 0 {
        if excess > 0.0 {
            log::debug!("no springs to absorb {excess} of surplus space; leaving a trailing gap");
        }
        return;
    }

    let share = excess / measurements.spring_count as f32;
    for (child, size) in children.iter().zip(sizes.iter_mut()) {
        if child.is_spring() {
            *size = share;
        }
    }
}

/// Shrinks rigid children to recover a negative `excess`. Returns the part of
/// the shortfall that could not be recovered.
fn compress_children(
    excess: f32,
    measurements: &Measurements,
    children: &[LinearChild],
    sizes: &mut [f32],
) -> f32 {
    debug_assert_eq!(children.len(), sizes.len());
    let deficit = -excess;
    let available = measurements.available_compression;
    let shortfall = available.min(deficit);

    for (child, size) in children.iter().zip(sizes.iter_mut()) {
        match child.kind {
            ChildKind::Spring => *size = 0.0,
            // Each reduction is taken from the natural size, never from a
            // previously reduced one, so the reductions sum to `shortfall`.
            ChildKind::Rigid if available > 0.0 && shortfall > 0.0 => {
                let share = child.config.compressible() / available;
                *size = child.config.nat - share * shortfall;
            }
            ChildKind::Rigid => *size = child.config.nat,
        }
    }

    let uncovered = deficit - shortfall;
    if uncovered > 0.0 {
        log::debug!("children overflow by {uncovered} after compression; content will be clipped");
    }
    uncovered
}

/// Places children back to back starting at zero.
pub fn place_sequentially(sizes: &[f32], out_positions: &mut [f32]) {
    debug_assert_eq!(sizes.len(), out_positions.len());
    let mut cursor = 0.0;
    for (size, position) in sizes.iter().zip(out_positions.iter_mut()) {
        *position = cursor;
        cursor += size;
    }
}

#[cfg(test)]
#[path = "tests/springs_tests.rs"]
mod tests;
