//! Textual rendering of a performance.
//!
//! Unlike [`TimelinePerformer`](staves_core::TimelinePerformer), which keeps
//! only notes, the text dump lists every leaf: notes, rests and controller
//! changes, each stamped with its onset.

use colored::*;
use log::debug;
use staves_core::types::time::Time;
use staves_core::{AttributeStore, Context, Note, Performer, Score, Silence};
use std::fmt;

/// One rendered leaf
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub time: Time,
    pub text: String,
}

impl fmt::Display for TextLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>8}  {}", self.time.to_string().bright_black(), self.text)
    }
}

fn describe_attributes(own: &AttributeStore, inherited: &AttributeStore) -> String {
    let attributes = own.inherit_from(inherited);
    if attributes.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = attributes
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect();
    format!(" {{{}}}", pairs.join(", "))
}

/// Renders a score as time-stamped lines, sorted by onset
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPerformer;

impl Performer for TextPerformer {
    type Output = Vec<TextLine>;

    fn on_note(&self, note: &Note, context: &Context) -> Vec<TextLine> {
        vec![TextLine {
            time: context.time,
            text: format!(
                "{} {} for {}{}",
                "note".cyan().bold(),
                note.pitch,
                note.duration,
                describe_attributes(&note.attributes, &context.inherited)
            ),
        }]
    }

    fn on_silence(&self, silence: Silence<'_>, context: &Context) -> Vec<TextLine> {
        let text = match silence {
            // Zero-length rests are padding from the algebra, not music
            Silence::Rest(rest) if rest.duration == Time::from_integer(0) => return Vec::new(),
            Silence::Rest(rest) => format!(
                "{} for {}{}",
                "rest".bright_black(),
                rest.duration,
                describe_attributes(&rest.attributes, &context.inherited)
            ),
            Silence::Controller(controller) => format!(
                "{} {} = {}",
                "ctrl".yellow(),
                controller.name,
                controller
                    .value()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "nil".to_string())
            ),
        };
        vec![TextLine {
            time: context.time,
            text,
        }]
    }

    fn combine_seq(&self, mut left: Vec<TextLine>, right: Vec<TextLine>) -> Vec<TextLine> {
        left.extend(right);
        left
    }

    fn combine_par(&self, mut top: Vec<TextLine>, bottom: Vec<TextLine>) -> Vec<TextLine> {
        top.extend(bottom);
        top.sort_by(|a, b| a.time.cmp(&b.time));
        top
    }
}

/// Render a score from time zero, one line per leaf
pub fn dump(score: &Score) -> String {
    let lines = TextPerformer.perform(score, &Context::default());
    debug!("rendered {} lines of text for {}", lines.len(), score);
    lines
        .iter()
        .map(|line| line.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use staves_core::types::score::{controller, group, note, note_with, rest};
    use staves_core::types::time::beats;

    #[test]
    fn test_every_leaf_gets_a_line() {
        let score = note(60, 1) & rest(1) & controller("tempo", [("tempo", 120)]) & note(64, 2);
        let lines = TextPerformer.perform(&score, &Context::default());
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines.iter().map(|l| l.time).collect::<Vec<_>>(),
            vec![beats(0), beats(1), beats(2), beats(2)]
        );
        assert!(lines[2].text.contains("tempo"));
        assert!(lines[2].text.contains("120"));
    }

    #[test]
    fn test_parallel_lines_are_sorted() {
        let score = (note(60, 1) & note(62, 1)) | (rest(1) & note(67, 1));
        let lines = TextPerformer.perform(&score, &Context::default());
        let times: Vec<Time> = lines.iter().map(|l| l.time).collect();
        assert_eq!(times, vec![beats(0), beats(0), beats(1), beats(1)]);
    }

    #[test]
    fn test_zero_rests_are_skipped() {
        let lines = TextPerformer.perform(&(note(60, 1) & rest(0)), &Context::default());
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_inherited_attributes_are_shown() {
        let score = group(note_with(60, 1, [("dynamic", "ff")]), [("slur", true)]);
        let text = dump(&score);
        assert!(text.contains("dynamic=:ff"));
        assert!(text.contains("slur=true"));
    }
}
