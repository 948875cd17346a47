//! # Staves
//!
//! Staves is a Rust library for building musical scores as an algebra of
//! immutable trees and interpreting them into flat, time-ordered events.
//!
//! The algebra, the performer protocol and the timeline live in
//! `staves-core`; this crate re-exports them and adds renderers built on the
//! performer protocol.
//!
//! ## Modules
//!
//! - `text`: `TextPerformer`, a human-readable, time-stamped dump of a score
//!   including rests and controller changes.

pub mod text;

// Re-export commonly used types and functions for convenience
pub use crate::text::{dump, TextLine, TextPerformer};
pub use staves_core::types::score::{
    controller, group, none, note, note_with, par_list, par_list_of_pitches, rest, rest_with,
    seq_list, seq_list_of_pitches,
};
pub use staves_core::{
    AttributeStore, Attributed, Context, Event, Note, Performer, Rest, Score, ScoreError, Silence,
    Timeline, TimelinePerformer, Value,
};
