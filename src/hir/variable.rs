//! Variable (§3.1): a Parameter or Local, tracking the bookkeeping the
//! binder and template instantiator need: whether assigning it changes the
//! resulting Class, whether it's actually materialized, and its original
//! name so alpha-renaming during instantiation can be reversed for
//! diagnostics.

use crate::ids::{DatatypeId, ExpressionId};
use crate::string_interning::StringId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Parameter,
    Local,
}

#[derive(Debug, Clone)]
pub struct Variable {
    pub kind: VariableKind,
    pub initializer: Option<ExpressionId>,
    pub type_constraint: Option<ExpressionId>,
    /// Bound datatype; `None` until the type checker first assigns one.
    pub datatype: Option<DatatypeId>,
    /// True when assignment of this parameter changes the resulting Class
    /// (it's one of the Template's template parameters).
    pub in_template_signature: bool,
    /// True once the value is actually produced in generated code.
    pub instantiated: bool,
    pub original_name: StringId,
}

impl Variable {
    pub fn new(kind: VariableKind, original_name: StringId) -> Self {
        Variable {
            kind,
            initializer: None,
            type_constraint: None,
            datatype: None,
            in_template_signature: false,
            instantiated: false,
            original_name,
        }
    }

    pub fn is_bound(&self) -> bool {
        self.datatype.is_some()
    }
}
