//! The HIR entity layer (§3.1, §4.4): one typed arena per entity kind, all
//! owned by `Root`. Mirrors the teacher's `hir_nodes.rs` shape — a plain
//! struct per node kind addressed by a newtype id — generalized onto the
//! shared `arena::Arena`/`relations::*` runtime instead of bespoke `Vec`s.

pub mod block;
pub mod builder;
pub mod class;
pub mod dump;
pub mod expression;
pub mod function;
pub mod ident;
pub mod relation_entity;
pub mod root;
pub mod statement;
pub mod template;
pub mod validate;
pub mod variable;

pub use block::{Block, BlockKind};
pub use class::Class;
pub use expression::{Expression, ExprKind};
pub use function::{Function, FunctionKind, Linkage};
pub use ident::{Ident, IdentKind};
pub use relation_entity::{MemberRel, Relation, TransformerKind};
pub use root::Root;
pub use statement::{Statement, StatementKind};
pub use template::{BuiltinTemplateKind, Template};
pub use variable::{Variable, VariableKind};
