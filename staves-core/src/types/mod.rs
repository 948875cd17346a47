// staves-core/src/types/mod.rs

pub mod attributes;
pub mod score;
pub mod time;
pub mod value;

pub use attributes::{Access, AttributeStore, Attributed};
pub use score::{Controller, Note, Rest, Score};
pub use time::{IntoTime, Span, Time};
pub use value::Value;
