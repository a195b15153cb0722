//! Grid state and movement rules for a small Sokoban puzzle.
//!
//! The engine owns the level grid and decides, for each move, whether the player
//! walks, pushes a box, is blocked, or solves the puzzle. Presentation layers read
//! [`json_export::Snapshot`]s or the per-move [`core::GridChange`] lists.

pub mod config;
pub mod console_interface;
pub mod core;
pub mod json_export;
pub mod models;
#[cfg(test)]
mod test;
