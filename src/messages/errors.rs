//! Diagnostic model (§7): grounded in the teacher's (legacy) `compiler::
//! compiler_errors` tree, reshaped around owned `PathBuf` locations instead
//! of an interner borrow so a `CompilerError` can outlive the `StringTable`
//! it was raised against and be collected into `CompilerMessages` for a
//! whole compilation before anything gets printed.

use crate::signature::SignatureStore;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePos {
    pub line_number: u32,
    pub char_column: u32,
}

#[derive(Debug, Clone)]
pub struct ErrorLocation {
    pub scope: PathBuf,
    pub start_pos: SourcePos,
    pub end_pos: SourcePos,
}

/// §7's five user-facing error kinds, plus the internal-invariant bucket
/// that panics instead of flowing through `CompilerMessages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Lex/parse errors are surfaced before the HIR builder is reached;
    /// this variant exists so a parser-stub test harness can pass one
    /// through the same reporting path.
    Syntax,
    NameResolution,
    Type,
    Relation,
    RuntimeSemanticsAtCompileTime,
    Config,
}

#[derive(Debug, Clone)]
pub struct StackFrame {
    pub callsite: Option<ErrorLocation>,
}

#[derive(Debug, Clone)]
pub struct CompilerError {
    pub kind: ErrorKind,
    pub msg: String,
    pub location: ErrorLocation,
    /// Walked from `Signature::caller` at the point the error was raised
    /// (§7 "ASCII stack trace of the signature-call chain").
    pub stack_trace: Vec<StackFrame>,
}

impl CompilerError {
    pub fn new(kind: ErrorKind, msg: impl Into<String>, location: ErrorLocation) -> Self {
        CompilerError {
            kind,
            msg: msg.into(),
            location,
            stack_trace: Vec::new(),
        }
    }

    pub fn with_stack_trace(mut self, frames: Vec<StackFrame>) -> Self {
        self.stack_trace = frames;
        self
    }
}

#[derive(Debug, Clone)]
pub struct CompilerWarning {
    pub msg: String,
    pub location: ErrorLocation,
}

#[derive(Debug, Clone, Default)]
pub struct CompilerMessages {
    pub errors: Vec<CompilerError>,
    pub warnings: Vec<CompilerWarning>,
}

impl CompilerMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_error(&mut self, err: CompilerError) {
        self.errors.push(err);
    }

    pub fn push_warning(&mut self, warning: CompilerWarning) {
        self.warnings.push(warning);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Builds the `StackFrame` list for a `CompilerError` raised while
/// `signature` was executing, per §7's "Signature records its caller
/// Signature and caller Statement".
pub fn stack_trace_for(
    signatures: &SignatureStore,
    signature: crate::ids::SignatureId,
    locate: impl Fn(crate::ids::StatementId) -> ErrorLocation,
) -> Vec<StackFrame> {
    signatures
        .call_chain(signature)
        .into_iter()
        .map(|sig| StackFrame {
            callsite: signatures.get(sig).callsite.map(&locate),
        })
        .collect()
}

/// Internal invariant violations (§7): distinct from `CompilerError` —
/// these are never collected into `CompilerMessages`, they abort the
/// process immediately via `panic!`.
#[derive(Debug)]
pub struct InternalInvariantViolation {
    pub what: String,
}

impl std::fmt::Display for InternalInvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "internal invariant violated: {}", self.what)
    }
}

impl std::error::Error for InternalInvariantViolation {}

#[macro_export]
macro_rules! internal_invariant {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            panic!("{}", $crate::messages::errors::InternalInvariantViolation {
                what: format!($($msg)*),
            });
        }
    };
}
