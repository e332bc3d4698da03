//! A falling sand sandbox.
//!
//! The simulation itself lives in [`physics`] and knows nothing about windows or input.
//! [`entities`] and [`gui`] glue it into a bevy app.

pub mod entities;
pub mod gui;
pub mod physics;
