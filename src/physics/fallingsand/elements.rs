//! This module contains all the elements that are used in the game.

pub mod element;
pub mod empty;
pub mod movement;
pub mod rock;
pub mod sand;
