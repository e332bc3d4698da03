//! Falling sand physics engine.
//! A fixed size grid of particles managed as a cellular automaton,
//! updated in place once per frame.

pub mod constants;
pub mod data;
pub mod elements;
pub mod error;
pub mod renderer;
pub mod util;
