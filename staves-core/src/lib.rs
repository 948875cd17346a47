//! # Staves Core
//!
//! Musical scores as an algebra of immutable trees, and the performers that
//! interpret them.
//!
//! ## Features
//!
//! - **serde**: Serialize scores, attribute values and timelines
//! - **colored**: Colored terminal output for `Display` (on by default)
//!
//! ## Example
//!
//! ```
//! use staves_core::types::score::{group, note, rest};
//!
//! let phrase = group(note(60, 1) & rest(1) & note(64, 2), [("slur", true)]);
//! assert_eq!(phrase.duration(), staves_core::types::time::beats(4));
//!
//! let timeline = phrase.to_timeline();
//! assert_eq!(timeline.len(), 2);
//! assert!(timeline[1].attributes().get("slur").is_truthy());
//! ```

pub mod error;
pub mod perform;
pub mod types;

// Re-export commonly used types
pub use error::ScoreError;
pub use perform::{Context, Event, Performer, Silence, Timeline, TimelinePerformer};
pub use types::{AttributeStore, Attributed, Controller, Note, Rest, Score, Time, Value};
