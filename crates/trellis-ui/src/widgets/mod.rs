mod block;
mod linear;
mod spring;

pub use block::Block;
pub use linear::{DebugStyle, LinearGroup};
pub use spring::{Spring, Strut};
