//! The performer protocol: a generic fold over score trees.

use super::context::Context;
use crate::types::attributes::AttributeStore;
use crate::types::score::{Controller, Note, Rest, Score};
use crate::types::time::Time;
use num_traits::Zero;

/// A non-sounding leaf handed to [`Performer::on_silence`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Silence<'a> {
    Rest(&'a Rest),
    Controller(&'a Controller),
}

impl Silence<'_> {
    /// Attributes of the underlying leaf
    pub fn attributes(&self) -> &AttributeStore {
        match self {
            Silence::Rest(r) => &r.attributes,
            Silence::Controller(c) => &c.attributes,
        }
    }
}

/// Reduces a score tree to an `Output`.
///
/// Implementors supply the two leaf callbacks and the two combinators;
/// traversal of `Seq`, `Par` and `Group` is shared by every performer:
///
/// - `Seq(l, r)`: `combine_seq(perform(l, ctx), perform(r, ctx.advance(l.duration())))`,
///   with `l.duration()` taken from the walk of `l` itself
/// - `Par(t, b)`: `combine_par(perform(t, ctx), perform(b, ctx))`
/// - `Group(s, attrs)`: `perform(s, ctx.inherit(attrs))`
pub trait Performer {
    type Output;

    fn on_note(&self, note: &Note, context: &Context) -> Self::Output;

    fn on_silence(&self, silence: Silence<'_>, context: &Context) -> Self::Output;

    fn combine_seq(&self, left: Self::Output, right: Self::Output) -> Self::Output;

    fn combine_par(&self, top: Self::Output, bottom: Self::Output) -> Self::Output;

    /// Controllers are treated as silence unless a performer overrides this
    fn on_controller(&self, controller: &Controller, context: &Context) -> Self::Output {
        self.on_silence(Silence::Controller(controller), context)
    }

    fn perform(&self, score: &Score, context: &Context) -> Self::Output {
        perform_timed(self, score, context).0
    }

    /// Perform from time zero with nothing inherited
    fn perform_from_start(&self, score: &Score) -> Self::Output {
        self.perform(score, &Context::default())
    }
}

/// Walk `score` once, returning the performer's output together with the
/// subtree's duration so a `Seq` never re-measures its left branch.
pub(crate) fn perform_timed<P>(
    performer: &P,
    score: &Score,
    context: &Context,
) -> (P::Output, Time)
where
    P: Performer + ?Sized,
{
    match score {
        Score::Note(note) => (performer.on_note(note, context), note.duration),
        Score::Rest(rest) => (
            performer.on_silence(Silence::Rest(rest), context),
            rest.duration,
        ),
        Score::Controller(controller) => {
            (performer.on_controller(controller, context), Time::zero())
        }
        Score::Seq(left, right) => {
            let (first, left_duration) = perform_timed(performer, left, context);
            let (second, right_duration) =
                perform_timed(performer, right, &context.advance(left_duration));
            (
                performer.combine_seq(first, second),
                left_duration + right_duration,
            )
        }
        Score::Par(top, bottom) => {
            let (upper, top_duration) = perform_timed(performer, top, context);
            let (lower, bottom_duration) = perform_timed(performer, bottom, context);
            (
                performer.combine_par(upper, lower),
                std::cmp::max(top_duration, bottom_duration),
            )
        }
        Score::Group(score, attributes) => {
            perform_timed(performer, score, &context.inherit(attributes))
        }
    }
}
