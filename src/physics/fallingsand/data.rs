//! The data module contains the data structures for the falling sand physics engine.
//! This is where the actual grid of particles is stored.

pub mod element_grid;
