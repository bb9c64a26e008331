//! Binding / StateBinding (§3.1, §4.6): a unit of work the scheduler can
//! run, retry, or park on an Event. `resume_step` is the "State" in
//! StateBinding — how far through a multi-step bind (e.g. typechecking an
//! n-ary expression child by child) this unit has gotten, so re-running it
//! after an Event fires picks up where it left off instead of restarting.

use crate::ids::ExpressionId;

/// A `BindStatement(StatementId)` kind was dropped from here: Statement has
/// no structural link back to the Relation it declares or the target it
/// assigns, so a statement-level Binding would have nothing to dispatch on
/// without first growing the HIR. Relation -> Transformer dispatch and
/// branch-secrecy checks instead run as dedicated passes over
/// `root.statements`/`root.relations` once the fixpoint empties, in
/// `pipeline::compile` — see `binder core` in DESIGN.md.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    TypecheckExpression(ExpressionId),
}

#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub kind: BindingKind,
    /// How many children/sub-steps of this binding have already completed;
    /// resumed bindings continue from here instead of from zero.
    pub resume_step: usize,
}

impl Binding {
    pub fn new(kind: BindingKind) -> Self {
        Binding { kind, resume_step: 0 }
    }
}

/// What running one step of a Binding produced.
pub enum BindingOutcome {
    /// Fully bound; drop it.
    Done,
    /// Needs another step immediately (e.g. it just unblocked a child and
    /// can now proceed) — re-enqueued at the back of the ready queue.
    Ready,
    /// Parked on `event` until that event fires.
    Blocked(crate::ids::EventId),
}
