//! Free-function constructors and list builders.

use super::core::Score;
use super::leaf::{Controller, Note, Rest};
use crate::types::attributes::AttributeStore;
use crate::types::time::IntoTime;

pub fn note(pitch: i64, duration: impl IntoTime) -> Score {
    Score::Note(Note::new(pitch, duration))
}

pub fn note_with(
    pitch: i64,
    duration: impl IntoTime,
    attributes: impl Into<AttributeStore>,
) -> Score {
    Score::Note(Note::with_attributes(pitch, duration, attributes))
}

pub fn rest(duration: impl IntoTime) -> Score {
    Score::Rest(Rest::new(duration))
}

pub fn rest_with(duration: impl IntoTime, attributes: impl Into<AttributeStore>) -> Score {
    Score::Rest(Rest::with_attributes(duration, attributes))
}

pub fn controller(name: impl Into<String>, attributes: impl Into<AttributeStore>) -> Score {
    Score::Controller(Controller::new(name, attributes))
}

pub fn group(score: Score, attributes: impl Into<AttributeStore>) -> Score {
    Score::group(score, attributes)
}

/// The empty score, `rest(0)`
pub fn none() -> Score {
    Score::none()
}

/// Left-associated `Seq` chain, equal to `a & b & c ...`; `none()` when empty
pub fn seq_list<I>(scores: I) -> Score
where
    I: IntoIterator<Item = Score>,
{
    fold_list(scores, Score::seq)
}

/// Left-associated `Par` chain, equal to `a | b | c ...`; `none()` when empty
pub fn par_list<I>(scores: I) -> Score
where
    I: IntoIterator<Item = Score>,
{
    fold_list(scores, Score::par)
}

/// One-beat notes in sequence
pub fn seq_list_of_pitches<I>(pitches: I) -> Score
where
    I: IntoIterator<Item = i64>,
{
    seq_list(pitches.into_iter().map(|p| note(p, 1)))
}

/// One-beat notes in parallel
pub fn par_list_of_pitches<I>(pitches: I) -> Score
where
    I: IntoIterator<Item = i64>,
{
    par_list(pitches.into_iter().map(|p| note(p, 1)))
}

fn fold_list<I>(scores: I, combine: fn(Score, Score) -> Score) -> Score
where
    I: IntoIterator<Item = Score>,
{
    let mut scores = scores.into_iter();
    match scores.next() {
        Some(first) => scores.fold(first, combine),
        None => Score::none(),
    }
}
