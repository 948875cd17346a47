use staves_core::types::score::{
    controller, group, note, note_with, par_list_of_pitches, rest, seq_list_of_pitches,
};
use staves_core::types::time::{beats, time, Span};
use staves_core::{
    Context, Event, Note, Performer, Rest, Score, ScoreError, Silence, Timeline, TimelinePerformer,
    Value,
};

#[test]
fn test_constructors() {
    assert_eq!(note(60, 1), Score::Note(Note::new(60, 1)));
    assert_eq!(rest(1), Score::Rest(Rest::new(1)));
}

#[test]
fn test_durations() {
    assert_eq!((note(60, 2) & rest(3)).duration(), beats(5));
    assert_eq!((note(60, 2) | rest(3)).duration(), beats(3));
    assert_eq!((note(60, 2) / rest(3)).duration(), beats(2));
}

#[test]
fn test_melody_timeline() {
    let timeline = TimelinePerformer.perform(&(note(60, 1) & note(64, 1)), &Context::new(0));
    assert_eq!(
        timeline,
        Timeline::new(vec![
            Event::new(beats(0), Note::new(60, 1)),
            Event::new(beats(1), Note::new(64, 1)),
        ])
    );
}

#[test]
fn test_chord_timeline() {
    let timeline = (note(60, 1) | note(64, 1)).to_timeline();
    assert_eq!(timeline.len(), 2);
    assert!(timeline.iter().all(|e| e.time == beats(0)));
}

#[test]
fn test_group_accent_reaches_event() {
    let timeline = group(note(60, 2), [("accented", true)]).to_timeline();
    assert_eq!(timeline[0].attributes().get("accented"), Value::Bool(true));
}

#[test]
fn test_performing_from_an_offset() {
    let timeline = TimelinePerformer.perform(&seq_list_of_pitches([60, 62]), &Context::new(8));
    assert_eq!(timeline.times(), vec![beats(8), beats(9)]);
}

#[test]
fn test_event_count_matches_notes_in_a_larger_piece() {
    let motif = seq_list_of_pitches([60, 62, 64]) & rest(time(1, 2));
    let chord = par_list_of_pitches([48, 55]);
    let piece = group(
        (motif.clone() * 2 | chord.repeat(3).unwrap_or_default())
            & controller("tempo", [("tempo", 90)])
            & motif.reverse().transpose(12).delay(1),
        [("dynamic", "mp")],
    );

    let timeline = piece.to_timeline();
    assert_eq!(timeline.len(), piece.note_count());
    assert_eq!(timeline.len(), 6 + 6 + 3);

    let whole = Span::from_origin(piece.duration());
    assert!(timeline.iter().all(|e| whole.contains(e.time)));
    assert!(timeline.times().windows(2).all(|w| w[0] <= w[1]));
    assert!(timeline
        .iter()
        .all(|e| e.attributes().get("dynamic") == Value::symbol("mp")));
}

#[test]
fn test_own_attributes_survive_group() {
    let piece = group(
        note_with(60, 1, [("dynamic", "ff")]) & note(62, 1),
        [("dynamic", Value::from("pp")), ("slur", Value::from(true))],
    );
    let timeline = piece.to_timeline();
    assert_eq!(timeline[0].attributes().get("dynamic"), Value::symbol("ff"));
    assert_eq!(timeline[1].attributes().get("dynamic"), Value::symbol("pp"));
    assert!(timeline.iter().all(|e| e.attributes().get("slur").is_truthy()));
}

#[test]
fn test_repetition_errors() {
    let s = note(60, 1);
    assert!(matches!(s.repeat(1.0), Err(ScoreError::NonIntegerCount { .. })));
    assert!(matches!(s.repeat(-1), Err(ScoreError::NegativeCount(-1))));
    let message = s.repeat(-2).unwrap_err().to_string();
    assert!(message.contains("non-negative"));
}

#[test]
fn test_long_repetition() {
    let s = note(60, 1) * 2000;
    assert_eq!(s.duration(), beats(2000));
    let timeline = s.to_timeline();
    assert_eq!(timeline.len(), 2000);
    assert_eq!(timeline[1999].time, beats(1999));
    assert!(timeline.is_sorted());
}

#[test]
fn test_long_repetition_against_drone() {
    let s = (note(60, 1) * 2000) | note(36, 2000);
    let timeline = s.to_timeline();
    assert_eq!(timeline.len(), 2001);
    assert_eq!(timeline[0].note.pitch, 60);
    assert_eq!(timeline[1].note.pitch, 36);
    assert_eq!(timeline[2000].time, beats(1999));
}

/// A performer targeting a different output: the pitch heard at each onset,
/// with controllers reported by name.
struct Outline;

impl Performer for Outline {
    type Output = Vec<String>;

    fn on_note(&self, note: &Note, context: &Context) -> Vec<String> {
        vec![format!("{}:{}", context.time, note.pitch)]
    }

    fn on_silence(&self, silence: Silence<'_>, context: &Context) -> Vec<String> {
        match silence {
            Silence::Rest(_) => Vec::new(),
            Silence::Controller(c) => vec![format!("{}:{}", context.time, c.name)],
        }
    }

    fn combine_seq(&self, mut left: Vec<String>, right: Vec<String>) -> Vec<String> {
        left.extend(right);
        left
    }

    fn combine_par(&self, top: Vec<String>, bottom: Vec<String>) -> Vec<String> {
        self.combine_seq(top, bottom)
    }
}

#[test]
fn test_custom_performer() {
    let piece = note(60, 1) & rest(1) & controller("tempo", [("tempo", 100)]) & note(62, 1);
    let outline = Outline.perform(&piece, &Context::default());
    assert_eq!(outline, vec!["0:60", "2:tempo", "2:62"]);
}
