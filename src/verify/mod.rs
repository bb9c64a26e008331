//! Verification passes (§2.10): relation-graph cycle check,
//! reference-counting classification, memory-safety diagnostics. Runs
//! after the binder queue empties with no errors, before external
//! lowering.

pub mod cycle;
pub mod refcount;
pub mod safety;
