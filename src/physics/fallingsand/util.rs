//! Useful functions and structs for fallingsand calculations.

pub mod enums;
pub mod functions;
pub mod grid;
pub mod image;
pub mod random;
pub mod scan;
pub mod vectors;
