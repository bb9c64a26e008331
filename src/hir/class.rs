//! Class (§3.1): a concrete instantiation of a Template, keyed by the tuple
//! of datatypes assigned to the Template's template parameters.

use crate::ids::{BlockId, DatatypeId, TemplateId};

#[derive(Debug, Clone)]
pub struct Class {
    pub template: TemplateId,
    /// The CLASS-block owning this Class's member Variables.
    pub block: BlockId,
    /// This Class's own Datatype (a `DatatypeKind::Class` entry).
    pub datatype: DatatypeId,
    /// The tuple of template-parameter datatypes that distinguishes this
    /// Class from the Template's other instantiations.
    pub template_args: Vec<DatatypeId>,
}

impl Class {
    pub fn new(template: TemplateId, block: BlockId, datatype: DatatypeId, template_args: Vec<DatatypeId>) -> Self {
        Class { template, block, datatype, template_args }
    }
}
