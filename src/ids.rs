//! Stable arena handles for every HIR entity, collected in one module so
//! `datatype`, `signature` and `hir::*` can all refer to each other's ids
//! without a module cycle (mirrors the teacher's `HirNodeId`/`BlockId`/
//! `FunctionId` newtype-per-entity convention in `hir_nodes.rs`, just
//! hoisted out so the ids can be shared across the HIR/datatype/signature
//! boundary instead of living next to one specific arena).

use crate::arena::Idx;

pub mod marker {
    pub struct Block;
    pub struct Function;
    pub struct Template;
    pub struct Class;
    pub struct Variable;
    pub struct Ident;
    pub struct Statement;
    pub struct Expression;
    pub struct Relation;
    pub struct MemberRel;
    pub struct Datatype;
    pub struct Signature;
    pub struct Event;
    pub struct Binding;
}

pub type BlockId = Idx<marker::Block>;
pub type FunctionId = Idx<marker::Function>;
pub type TemplateId = Idx<marker::Template>;
pub type ClassId = Idx<marker::Class>;
pub type VariableId = Idx<marker::Variable>;
pub type IdentId = Idx<marker::Ident>;
pub type StatementId = Idx<marker::Statement>;
pub type ExpressionId = Idx<marker::Expression>;
pub type RelationId = Idx<marker::Relation>;
pub type MemberRelId = Idx<marker::MemberRel>;
pub type DatatypeId = Idx<marker::Datatype>;
pub type SignatureId = Idx<marker::Signature>;
pub type EventId = Idx<marker::Event>;
pub type BindingId = Idx<marker::Binding>;
