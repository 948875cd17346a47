//! Score operators: composition, repetition, truncation and tree transforms.

use super::core::Score;
use super::leaf::Rest;
use crate::error::{Result, ScoreError};
use crate::types::time::{IntoTime, Time};
use crate::types::value::Value;
use log::debug;
use num_traits::Zero;
use std::ops::{BitAnd, BitOr, Div, Mul};

impl Score {
    /// Parallel composition cut to the shorter side.
    ///
    /// Both sides are truncated to `min(self.duration(), other.duration())`.
    pub fn trunc_par(&self, other: &Score) -> Score {
        let d = std::cmp::min(self.duration(), other.duration());
        Score::par(self.truncate(d), other.truncate(d))
    }

    /// Cut the score to at most `d` beats.
    ///
    /// Truncating to the score's own duration (or longer) returns an equal tree.
    pub fn truncate(&self, d: Time) -> Score {
        match self {
            Score::Note(n) => {
                if d >= n.duration {
                    self.clone()
                } else if d <= Time::zero() {
                    Score::none()
                } else {
                    Score::Note(n.with_duration(d))
                }
            }
            Score::Rest(r) => {
                if d >= r.duration {
                    self.clone()
                } else if d <= Time::zero() {
                    Score::none()
                } else {
                    Score::Rest(r.with_duration(d))
                }
            }
            Score::Controller(_) => {
                if d >= Time::zero() {
                    self.clone()
                } else {
                    Score::none()
                }
            }
            Score::Seq(left, right) => {
                let left_duration = left.duration();
                if d >= left_duration + right.duration() {
                    self.clone()
                } else if d <= left_duration {
                    left.truncate(d)
                } else {
                    Score::seq((**left).clone(), right.truncate(d - left_duration))
                }
            }
            Score::Par(top, bottom) => Score::par(top.truncate(d), bottom.truncate(d)),
            Score::Group(score, attributes) => {
                Score::Group(Box::new(score.truncate(d)), attributes.clone())
            }
        }
    }

    /// Checked repetition.
    ///
    /// The count must be an `Int`; other values are rejected with
    /// [`ScoreError::NonIntegerCount`] and negative integers with
    /// [`ScoreError::NegativeCount`].
    pub fn repeat(&self, count: impl Into<Value>) -> Result<Score> {
        match count.into() {
            Value::Int(n) if n < 0 => {
                debug!("rejecting negative repetition count {}", n);
                Err(ScoreError::NegativeCount(n))
            }
            Value::Int(n) => Ok(self.repeated(n as usize)),
            other => {
                debug!("rejecting non-integer repetition count {}", other);
                Err(ScoreError::NonIntegerCount {
                    found: format!("{} {}", other.type_name(), other),
                })
            }
        }
    }

    /// `n` copies in a left-associated `Seq` chain; `none()` when `n == 0`
    pub fn repeated(&self, n: usize) -> Score {
        if n == 0 {
            return Score::none();
        }
        (1..n).fold(self.clone(), |acc, _| Score::seq(acc, self.clone()))
    }

    /// Prefix the score with a rest of `n` beats
    pub fn delay(&self, n: impl IntoTime) -> Score {
        Score::seq(Score::Rest(Rest::new(n)), self.clone())
    }

    /// Mirror the score in time. Duration is preserved, and reversing twice
    /// gives back an equal tree.
    pub fn reverse(&self) -> Score {
        match self {
            Score::Note(_) | Score::Rest(_) | Score::Controller(_) => self.clone(),
            Score::Seq(left, right) => Score::seq(right.reverse(), left.reverse()),
            Score::Par(top, bottom) => Score::par(top.reverse(), bottom.reverse()),
            Score::Group(score, attributes) => {
                Score::Group(Box::new(score.reverse()), attributes.clone())
            }
        }
    }

    /// Shift every note by `interval` semitones
    pub fn transpose(&self, interval: i64) -> Score {
        self.map(|leaf| match leaf {
            Score::Note(n) => Score::Note(n.transpose(interval)),
            other => other.clone(),
        })
    }

    /// Replace every leaf with `f(leaf)`, rebuilding the composites around the
    /// results. Leaves are visited left to right (top before bottom).
    pub fn map<F>(&self, mut f: F) -> Score
    where
        F: FnMut(&Score) -> Score,
    {
        self.map_leaves(&mut f)
    }

    fn map_leaves<F>(&self, f: &mut F) -> Score
    where
        F: FnMut(&Score) -> Score,
    {
        match self {
            Score::Note(_) | Score::Rest(_) | Score::Controller(_) => f(self),
            Score::Seq(left, right) => {
                let left = left.map_leaves(f);
                Score::seq(left, right.map_leaves(f))
            }
            Score::Par(top, bottom) => {
                let top = top.map_leaves(f);
                Score::par(top, bottom.map_leaves(f))
            }
            Score::Group(score, attributes) => {
                Score::Group(Box::new(score.map_leaves(f)), attributes.clone())
            }
        }
    }
}

macro_rules! binary_operator {
    ($trait:ident, $method:ident, $body:expr) => {
        impl $trait for Score {
            type Output = Score;

            fn $method(self, rhs: Score) -> Score {
                let build: fn(Score, Score) -> Score = $body;
                build(self, rhs)
            }
        }

        impl $trait<&Score> for &Score {
            type Output = Score;

            fn $method(self, rhs: &Score) -> Score {
                let build: fn(Score, Score) -> Score = $body;
                build(self.clone(), rhs.clone())
            }
        }
    };
}

// a & b
binary_operator!(BitAnd, bitand, Score::seq);
// a | b
binary_operator!(BitOr, bitor, Score::par);
// a / b
binary_operator!(Div, div, |a, b| a.trunc_par(&b));

/// `score * n`: infallible repetition
impl Mul<usize> for Score {
    type Output = Score;

    fn mul(self, n: usize) -> Score {
        self.repeated(n)
    }
}

impl Mul<usize> for &Score {
    type Output = Score;

    fn mul(self, n: usize) -> Score {
        self.repeated(n)
    }
}
