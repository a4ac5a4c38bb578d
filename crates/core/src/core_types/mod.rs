//! Core types and utilities

pub mod fire_danger;
pub mod fuel;
pub mod units;
pub mod weather;

pub use fire_danger::*;
pub use fuel::*;
pub use units::*;
pub use weather::*;
