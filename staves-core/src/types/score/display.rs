//! Operator-notation rendering: `(n60:2 & r:3)`, `(n60:1 | n64:1)`,
//! `group{slur=true}(n60:2)`.

use super::core::Score;
use crate::types::attributes::AttributeStore;
#[cfg(feature = "colored")]
use colored::*;
use std::fmt;

fn attribute_list(attributes: &AttributeStore) -> String {
    attributes
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(feature = "colored")]
fn leaf_token(score: &Score) -> String {
    match score {
        Score::Note(n) => format!("n{}:{}", n.pitch, n.duration).cyan().to_string(),
        Score::Rest(r) => format!("r:{}", r.duration).bright_black().to_string(),
        Score::Controller(c) => format!("ctl({})", c.name).yellow().to_string(),
        _ => String::new(),
    }
}

// Plain tokens for builds without terminal colors
#[cfg(not(feature = "colored"))]
fn leaf_token(score: &Score) -> String {
    match score {
        Score::Note(n) => format!("n{}:{}", n.pitch, n.duration),
        Score::Rest(r) => format!("r:{}", r.duration),
        Score::Controller(c) => format!("ctl({})", c.name),
        _ => String::new(),
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Note(_) | Score::Rest(_) | Score::Controller(_) => {
                write!(f, "{}", leaf_token(self))
            }
            Score::Seq(left, right) => write!(f, "({} & {})", left, right),
            Score::Par(top, bottom) => write!(f, "({} | {})", top, bottom),
            Score::Group(score, attributes) => {
                write!(f, "group{{{}}}({})", attribute_list(attributes), score)
            }
        }
    }
}
