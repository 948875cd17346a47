//! Score algebra
//!
//! Scores are immutable trees built from three leaves (`Note`, `Rest`,
//! `Controller`) and three composites (`Seq`, `Par`, `Group`). Every
//! operation returns a new tree.

mod core;
mod display;
mod helpers;
mod leaf;
mod ops;


pub use core::Score;
pub use helpers::{
    controller, group, none, note, note_with, par_list, par_list_of_pitches, rest, rest_with,
    seq_list, seq_list_of_pitches,
};
pub use leaf::{Controller, Note, Rest};
