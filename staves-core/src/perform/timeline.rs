//! Flat, time-ordered output of a performance.

use super::context::Context;
use super::performer::{Performer, Silence};
use crate::types::attributes::{AttributeStore, Attributed};
use crate::types::score::{Note, Score};
use crate::types::time::{Span, Time};
use log::debug;
use std::ops::{Add, Index};

/// A note sounding at a point in time
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Onset in beats from the start of the performance
    pub time: Time,
    pub note: Note,
}

impl Event {
    pub fn new(time: Time, note: Note) -> Self {
        Event { time, note }
    }

    pub fn attributes(&self) -> &AttributeStore {
        &self.note.attributes
    }

    /// When the note stops sounding
    pub fn end(&self) -> Time {
        self.time + self.note.duration
    }
}

/// Events ordered by time. Equality is order-sensitive.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeline {
    events: Vec<Event>,
}

impl Timeline {
    /// Wrap events as given; no sorting is applied
    pub fn new(events: Vec<Event>) -> Self {
        Timeline { events }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Union of both timelines sorted by time. Events with equal times keep
    /// `self`'s events ahead of `other`'s.
    pub fn merge(&self, other: &Timeline) -> Timeline {
        self.clone().merged(other.clone())
    }

    /// Owning form of [`Timeline::merge`].
    ///
    /// Two sorted inputs are interleaved in a single pass; anything else falls
    /// back to a stable sort of the concatenation.
    pub fn merged(self, other: Timeline) -> Timeline {
        if !(self.is_sorted() && other.is_sorted()) {
            let mut events = self.events;
            events.extend(other.events);
            events.sort_by(|a, b| a.time.cmp(&b.time));
            return Timeline { events };
        }

        let mut events = Vec::with_capacity(self.len() + other.len());
        let mut left = self.events.into_iter().peekable();
        let mut right = other.events.into_iter().peekable();
        loop {
            let right_first = match (left.peek(), right.peek()) {
                (Some(l), Some(r)) => r.time < l.time,
                _ => break,
            };
            events.extend(if right_first { right.next() } else { left.next() });
        }
        events.extend(left);
        events.extend(right);
        Timeline { events }
    }

    /// True when onsets never decrease
    pub fn is_sorted(&self) -> bool {
        self.events.windows(2).all(|pair| pair[0].time <= pair[1].time)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Onset of every event, in order
    pub fn times(&self) -> Vec<Time> {
        self.events.iter().map(|e| e.time).collect()
    }

    /// From the first onset to the latest note end; `None` when empty
    pub fn span(&self) -> Option<Span> {
        let start = self.events.iter().map(|e| e.time).min()?;
        let end = self.events.iter().map(Event::end).max()?;
        Some(Span::new(start, end))
    }
}

/// Concatenation without re-sorting
impl Add for Timeline {
    type Output = Timeline;

    fn add(mut self, other: Timeline) -> Timeline {
        self.events.extend(other.events);
        self
    }
}

impl Index<usize> for Timeline {
    type Output = Event;

    fn index(&self, index: usize) -> &Event {
        &self.events[index]
    }
}

impl IntoIterator for Timeline {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl FromIterator<Event> for Timeline {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Timeline {
            events: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Event>> for Timeline {
    fn from(events: Vec<Event>) -> Self {
        Timeline::new(events)
    }
}

/// Turns a score into a [`Timeline`].
///
/// Each note becomes one event at the context's time, carrying the attributes
/// inherited from enclosing groups for any key it does not set itself. Rests
/// and controllers produce no events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimelinePerformer;

impl Performer for TimelinePerformer {
    type Output = Timeline;

    fn on_note(&self, note: &Note, context: &Context) -> Timeline {
        let note = if context.inherited.is_empty() {
            note.clone()
        } else {
            note.replace_attributes(note.attributes.inherit_from(&context.inherited))
        };
        Timeline::new(vec![Event::new(context.time, note)])
    }

    fn on_silence(&self, _silence: Silence<'_>, _context: &Context) -> Timeline {
        Timeline::empty()
    }

    fn combine_seq(&self, left: Timeline, right: Timeline) -> Timeline {
        left + right
    }

    fn combine_par(&self, top: Timeline, bottom: Timeline) -> Timeline {
        top.merged(bottom)
    }
}

impl Score {
    /// Perform with [`TimelinePerformer`] from time zero
    pub fn to_timeline(&self) -> Timeline {
        let timeline = TimelinePerformer.perform_from_start(self);
        debug!(
            "performed score of duration {} into {} events",
            self.duration(),
            timeline.len()
        );
        timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::score::{controller, group, note, note_with, rest, seq_list_of_pitches};
    use crate::types::time::{beats, time};
    use crate::types::Value;

    fn event(t: i64, pitch: i64, duration: i64) -> Event {
        Event::new(beats(t), Note::new(pitch, duration))
    }

    #[test]
    fn test_seq_is_concatenated_in_time() {
        let timeline = (note(60, 1) & note(64, 1)).to_timeline();
        assert_eq!(timeline, Timeline::new(vec![event(0, 60, 1), event(1, 64, 1)]));
    }

    #[test]
    fn test_par_keeps_both_simultaneous_events() {
        let timeline = (note(60, 1) | note(64, 1)).to_timeline();
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline.times(), vec![beats(0), beats(0)]);
        let pitches: Vec<i64> = timeline.iter().map(|e| e.note.pitch).collect();
        assert!(pitches.contains(&60));
        assert!(pitches.contains(&64));
    }

    #[test]
    fn test_merge_sorts_by_time_and_keeps_ties_in_order() {
        let a = Timeline::new(vec![event(0, 60, 1), event(2, 62, 1)]);
        let b = Timeline::new(vec![event(1, 70, 1), event(2, 72, 1)]);
        let merged = a.merge(&b);
        assert_eq!(merged.times(), vec![beats(0), beats(1), beats(2), beats(2)]);
        assert_eq!(merged[2].note.pitch, 62);
        assert_eq!(merged[3].note.pitch, 72);
    }

    #[test]
    fn test_merge_of_unsorted_input_is_sorted() {
        let late_first = Timeline::new(vec![event(3, 60, 1), event(1, 62, 1)]);
        let b = Timeline::new(vec![event(2, 70, 1), event(1, 72, 1)]);
        assert!(!late_first.is_sorted());
        let merged = late_first.merged(b);
        assert!(merged.is_sorted());
        assert_eq!(merged.times(), vec![beats(1), beats(1), beats(2), beats(3)]);
        assert_eq!(merged[0].note.pitch, 62);
        assert_eq!(merged[1].note.pitch, 72);
    }

    #[test]
    fn test_merge_with_empty_side() {
        let a = Timeline::new(vec![event(0, 60, 1), event(4, 62, 1)]);
        assert_eq!(a.merge(&Timeline::empty()), a);
        assert_eq!(Timeline::empty().merged(a.clone()), a);
    }

    #[test]
    fn test_add_does_not_sort() {
        let late = Timeline::new(vec![event(5, 60, 1)]);
        let early = Timeline::new(vec![event(0, 62, 1)]);
        let joined = late + early;
        assert_eq!(joined.times(), vec![beats(5), beats(0)]);
        assert!(!joined.is_sorted());
    }

    #[test]
    fn test_rests_and_controllers_are_silent() {
        let score = rest(1) & controller("tempo", [("tempo", 96)]) & note(67, 2);
        let timeline = score.to_timeline();
        assert_eq!(timeline, Timeline::new(vec![event(1, 67, 2)]));
        assert!(controller("cc1", [("value", 64)]).to_timeline().is_empty());
    }

    #[test]
    fn test_group_attributes_are_inherited() {
        let score = group(note(60, 2), [("slur", true), ("accented", true)]);
        let timeline = score.to_timeline();
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].attributes().get("accented"), Value::Bool(true));
        assert!(timeline.iter().all(|e| e.attributes().get("slur").is_truthy()));
    }

    #[test]
    fn test_leaf_attribute_wins_over_group() {
        let score = group(
            note_with(60, 1, [("slur", false)]) & note(62, 1),
            [("slur", true)],
        );
        let timeline = score.to_timeline();
        assert_eq!(timeline[0].attributes().get("slur"), Value::Bool(false));
        assert_eq!(timeline[1].attributes().get("slur"), Value::Bool(true));
    }

    #[test]
    fn test_nested_groups_innermost_wins() {
        let score = group(
            group(note(60, 1), [("dynamic", "ff")]) & note(62, 1),
            [("dynamic", "pp")],
        );
        let timeline = score.to_timeline();
        assert_eq!(timeline[0].attributes().get("dynamic"), Value::symbol("ff"));
        assert_eq!(timeline[1].attributes().get("dynamic"), Value::symbol("pp"));
    }

    #[test]
    fn test_event_count_and_bounds() {
        let score = (seq_list_of_pitches([60, 62, 64]) | note(48, 3)).delay(time(1, 2));
        let timeline = score.to_timeline();
        assert_eq!(timeline.len(), score.note_count());
        let whole = Span::from_origin(score.duration());
        assert!(timeline.iter().all(|e| whole.contains(e.time)));
        assert_eq!(timeline.span(), Some(Span::new(time(1, 2), time(7, 2))));
    }

    #[test]
    fn test_empty_timeline_has_no_span() {
        assert_eq!(rest(4).to_timeline().span(), None);
    }

    #[test]
    fn test_collect_and_iterate() {
        let timeline: Timeline = vec![event(0, 60, 1), event(1, 62, 1)].into_iter().collect();
        let onsets: Vec<Time> = (&timeline).into_iter().map(|e| e.time).collect();
        assert_eq!(onsets, vec![beats(0), beats(1)]);
        assert_eq!(timeline.clone().into_events().len(), 2);
        assert_eq!(Timeline::from(timeline.events().to_vec()), timeline);
    }
}
