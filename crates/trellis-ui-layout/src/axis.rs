/// Represents the stacking axis of a linear group (Row or Column).
///
/// Children are distributed with springs along the main axis and justified
/// along the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal main axis (Row).
    /// Main axis: left to right
    /// Cross axis: top to bottom
    Horizontal,

    /// Vertical main axis (Column).
    /// Main axis: top to bottom
    /// Cross axis: left to right
    Vertical,
}

impl Axis {
    /// Returns the opposite axis.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Picks the main axis component out of a width/height pair.
    #[inline]
    pub fn main<T>(self, width: T, height: T) -> T {
        match self {
            Axis::Horizontal => width,
            Axis::Vertical => height,
        }
    }

    /// Picks the cross axis component out of a width/height pair.
    #[inline]
    pub fn cross<T>(self, width: T, height: T) -> T {
        match self {
            Axis::Horizontal => height,
            Axis::Vertical => width,
        }
    }

    /// Turns main/cross components back into `(width, height)`.
    #[inline]
    pub fn pack<T>(self, main: T, cross: T) -> (T, T) {
        match self {
            Axis::Horizontal => (main, cross),
            Axis::Vertical => (cross, main),
        }
    }
}
