//! Size configurations and spring/strut distribution for Trellis

mod axis;
mod justification;
mod size_config;
mod springs;

pub use axis::*;
pub use justification::*;
pub use size_config::*;
pub use springs::*;

pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::justification::{
        CrossAxisJustification, HorizontalJustification, VerticalJustification,
    };
    pub use crate::size_config::SizeConfig;
    pub use crate::springs::{ChildKind, Distribution, LinearChild};
}
