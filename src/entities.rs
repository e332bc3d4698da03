//! This module contains all the top level resources and plugins.
//! These hold the simulation inside the bevy app.

pub mod sandbox;
