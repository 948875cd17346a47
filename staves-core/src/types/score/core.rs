//! Core Score enum and structural queries.

use super::leaf::{Controller, Note, Rest};
use crate::types::attributes::AttributeStore;
use crate::types::time::Time;
use num_traits::Zero;

/// An immutable score tree
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Score {
    Note(Note),
    Rest(Rest),
    /// Zero-length, non-sounding data
    Controller(Controller),
    /// `left` followed by `right`
    Seq(Box<Score>, Box<Score>),
    /// `top` sounding together with `bottom`
    Par(Box<Score>, Box<Score>),
    /// A subtree whose leaves inherit these attributes when performed
    Group(Box<Score>, AttributeStore),
}

impl Score {
    /// Sequential composition node
    pub fn seq(left: Score, right: Score) -> Self {
        Score::Seq(Box::new(left), Box::new(right))
    }

    /// Parallel composition node
    pub fn par(top: Score, bottom: Score) -> Self {
        Score::Par(Box::new(top), Box::new(bottom))
    }

    pub fn group(score: Score, attributes: impl Into<AttributeStore>) -> Self {
        Score::Group(Box::new(score), attributes.into())
    }

    /// The identity element: a zero-length rest
    pub fn none() -> Self {
        Score::Rest(Rest::none())
    }

    /// Total length in beats
    pub fn duration(&self) -> Time {
        match self {
            Score::Note(n) => n.duration,
            Score::Rest(r) => r.duration,
            Score::Controller(_) => Time::zero(),
            Score::Seq(left, right) => left.duration() + right.duration(),
            Score::Par(top, bottom) => std::cmp::max(top.duration(), bottom.duration()),
            Score::Group(score, _) => score.duration(),
        }
    }

    /// True for the zero-length rest
    pub fn is_none(&self) -> bool {
        matches!(self, Score::Rest(r) if r.duration.is_zero())
    }

    /// Number of `Note` leaves in the tree
    pub fn note_count(&self) -> usize {
        match self {
            Score::Note(_) => 1,
            Score::Rest(_) | Score::Controller(_) => 0,
            Score::Seq(a, b) | Score::Par(a, b) => a.note_count() + b.note_count(),
            Score::Group(score, _) => score.note_count(),
        }
    }

    /// Attributes of a leaf or group; `None` for `Seq` and `Par`
    pub fn attributes(&self) -> Option<&AttributeStore> {
        match self {
            Score::Note(n) => Some(&n.attributes),
            Score::Rest(r) => Some(&r.attributes),
            Score::Controller(c) => Some(&c.attributes),
            Score::Group(_, attributes) => Some(attributes),
            Score::Seq(..) | Score::Par(..) => None,
        }
    }
}

/// Structural equality.
///
/// `Group` nodes compare only the wrapped subtree: group attributes are
/// metadata, so `group(e, {slur: true}) == group(e, {})`. Leaves compare all
/// of their fields, attributes included.
impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Score::Note(a), Score::Note(b)) => a == b,
            (Score::Rest(a), Score::Rest(b)) => a == b,
            (Score::Controller(a), Score::Controller(b)) => a == b,
            (Score::Seq(l1, r1), Score::Seq(l2, r2)) => l1 == l2 && r1 == r2,
            (Score::Par(t1, b1), Score::Par(t2, b2)) => t1 == t2 && b1 == b2,
            (Score::Group(s1, _), Score::Group(s2, _)) => s1 == s2,
            _ => false,
        }
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::none()
    }
}

impl From<Note> for Score {
    fn from(note: Note) -> Self {
        Score::Note(note)
    }
}

impl From<Rest> for Score {
    fn from(rest: Rest) -> Self {
        Score::Rest(rest)
    }
}

impl From<Controller> for Score {
    fn from(controller: Controller) -> Self {
        Score::Controller(controller)
    }
}
