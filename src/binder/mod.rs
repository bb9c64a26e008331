//! The binder core (§2.6, §4.6): a fixpoint, event-driven scheduler that
//! simultaneously performs identifier resolution, type inference, template
//! instantiation, secret-taint propagation, and relation-driven code
//! generation.

pub mod binding;
pub mod instantiate;
pub mod scheduler;
pub mod secret;
pub mod typecheck;

pub use binding::{Binding, BindingKind, BindingOutcome};
