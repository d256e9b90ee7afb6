#![forbid(unsafe_code)]

pub mod animation;
pub mod assessment;
pub mod model;
pub mod navigation;

pub use navigation::{Direction, NavRejection, NavSnapshot, Navigator, Transition};
