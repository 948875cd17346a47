//! Interpreting scores
//!
//! A [`Performer`] walks a score tree while threading a [`Context`] (the
//! start time of the current node plus inherited group attributes).
//! [`TimelinePerformer`] is the stock performer that flattens a score into a
//! [`Timeline`] of note events.

mod context;
mod performer;
mod timeline;

pub use context::Context;
pub use performer::{Performer, Silence};
pub use timeline::{Event, Timeline, TimelinePerformer};
