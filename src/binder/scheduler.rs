//! The fixpoint scheduler (§4.6, §5): pops a Binding off the ready queue,
//! runs one step, and either drops it (Done), re-enqueues it (Ready), or
//! parks it on an Event (Blocked). No priority between ready items; the
//! only ordering guarantee is that an Event fire resumes every attached
//! Binding before any new work is popped (§5), which is why `fire_event`
//! drains the whole blocked list into the ready queue in one call instead
//! of trickling bindings back one at a time.

use crate::binder::binding::{Binding, BindingOutcome};
use crate::event_log;
use crate::hir::root::Root;
use crate::ids::{BindingId, EventId};

/// Push a new Binding onto the ready queue, returning its id.
pub fn enqueue(root: &mut Root, binding: Binding) -> BindingId {
    let id = root.bindings.alloc(binding);
    root.ready_queue.push(id);
    id
}

/// Park `binding_id` on `event`. Caller must have already popped it off the
/// ready queue (the scheduler loop does this naturally).
pub fn block_on(root: &mut Root, binding_id: BindingId, event: EventId) {
    event_log!("binding {:?} blocked on event {:?}", binding_id, event);
    root.blocked.entry(event).or_default().push(binding_id);
}

/// Fire `event`: mark it fired and move every Binding parked on it back
/// onto the ready queue. Per §8 item 3, a fired Event's blocked list is
/// fully drained here — nothing may remain attached to a fired Event.
pub fn fire_event(root: &mut Root, event: EventId) {
    root.events.get_mut(event).fired = true;
    if let Some(waiters) = root.blocked.remove(&event) {
        event_log!("event {:?} fired, waking {} binding(s)", event, waiters.len());
        root.ready_queue.extend(waiters);
    }
}

/// Drains the ready queue to a fixpoint, calling `step` once per popped
/// Binding. Returns the set of Events that still have Bindings attached
/// when the queue empties — a non-empty result means unresolved forward
/// references (§7 "Name-resolution errors — an Undefined Ident still
/// undefined when the binder queue empties").
pub fn run_to_fixpoint(root: &mut Root, mut step: impl FnMut(&mut Root, BindingId, Binding) -> BindingOutcome) -> Vec<EventId> {
    while let Some(binding_id) = root.ready_queue.pop() {
        let binding = *root.bindings.get(binding_id);
        match step(root, binding_id, binding) {
            BindingOutcome::Done => {
                root.bindings.free(binding_id);
            }
            BindingOutcome::Ready => {
                root.ready_queue.push(binding_id);
            }
            BindingOutcome::Blocked(event) => {
                block_on(root, binding_id, event);
            }
        }
    }
    root.blocked.keys().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::binding::BindingKind;
    use crate::config::CompileConfig;
    use crate::event::{Event, EventKind};
    use crate::ids::{ExpressionId, VariableId};
    use std::path::PathBuf;

    fn fresh_root() -> Root {
        Root::new(CompileConfig::new(PathBuf::from("main.rn")))
    }

    #[test]
    fn a_binding_blocked_on_an_unfired_event_never_runs_again() {
        let mut root = fresh_root();
        let var: VariableId = crate::arena::Idx::from_raw(0);
        let event = root.events.alloc(Event::new(EventKind::VariableAssigned(var)));
        let expr: ExpressionId = crate::arena::Idx::from_raw(0);
        enqueue(&mut root, Binding::new(BindingKind::TypecheckExpression(expr)));
        let remaining = run_to_fixpoint(&mut root, |_, _, _| BindingOutcome::Blocked(event));
        assert_eq!(remaining, vec![event]);
    }

    #[test]
    fn firing_an_event_wakes_every_parked_binding_before_new_work_runs() {
        let mut root = fresh_root();
        let var: VariableId = crate::arena::Idx::from_raw(0);
        let event = root.events.alloc(Event::new(EventKind::VariableAssigned(var)));
        let expr: ExpressionId = crate::arena::Idx::from_raw(0);
        let b1 = enqueue(&mut root, Binding::new(BindingKind::TypecheckExpression(expr)));
        let b2 = enqueue(&mut root, Binding::new(BindingKind::TypecheckExpression(expr)));

        // First pass: both park on the same event.
        let mut seen = Vec::new();
        run_to_fixpoint(&mut root, |_, id, _| {
            seen.push(id);
            BindingOutcome::Blocked(event)
        });
        assert_eq!(seen.len(), 2);

        fire_event(&mut root, event);
        assert_eq!(root.ready_queue.len(), 2);

        let mut ran = Vec::new();
        run_to_fixpoint(&mut root, |_, id, _| {
            ran.push(id);
            BindingOutcome::Done
        });
        assert!(ran.contains(&b1) && ran.contains(&b2));
    }
}
