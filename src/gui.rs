//! This module contains all the GUI related code.
//! Things that are driven by screen coordinates rather than grid coordinates.

pub mod brush;
