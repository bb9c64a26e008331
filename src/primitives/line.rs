//! Line: an immutable source-location record attached to every
//! Block/Statement/Expression/Function for diagnostics (§3.1).

use crate::primitives::filepath::FilepathId;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub filepath: FilepathId,
    pub line_number: u32,
    /// The exact original source text of this line, kept verbatim so
    /// diagnostics can print the offending line without re-reading the file
    /// (the file may have since been edited or, in test harnesses, may not
    /// exist on disk at all).
    pub text: Rc<str>,
}

impl Line {
    pub fn new(filepath: FilepathId, line_number: u32, text: impl Into<Rc<str>>) -> Self {
        Line { filepath, line_number, text: text.into() }
    }
}
