//! HIR construction API (§6.2): "every production has a corresponding HIR
//! constructor call." These are the entry points the (external) parser
//! calls, and the ones template instantiation calls again to produce a
//! "uniquified" clone of a function body per signature (§4.6.3).

use crate::hir::block::{Block, BlockKind};
use crate::hir::class::Class;
use crate::hir::expression::{ExprKind, Expression};
use crate::hir::function::{Function, FunctionKind, Linkage};
use crate::hir::ident::{Ident, IdentKind};
use crate::hir::root::Root;
use crate::hir::statement::{Statement, StatementKind};
use crate::hir::template::Template;
use crate::hir::variable::{Variable, VariableKind};
use crate::ids::{BlockId, ClassId, DatatypeId, ExpressionId, FunctionId, IdentId, StatementId, TemplateId, VariableId};
use crate::string_interning::StringId;
use rustc_hash::FxHashMap;

impl Root {
    pub fn block_create(&mut self, kind: BlockKind, parent: Option<BlockId>) -> BlockId {
        self.blocks.alloc(Block::new(kind, parent))
    }

    pub fn function_create(&mut self, kind: FunctionKind, linkage: Linkage, block: BlockId) -> FunctionId {
        let id = self.functions.alloc(Function::new(kind, linkage, block));
        if let BlockKind::Function = self.blocks.get(block).kind {
            self.blocks.get_mut(block).owning_function = Some(id);
        }
        id
    }

    pub fn template_create(&mut self, owning_constructor: FunctionId, reference_width: u32) -> TemplateId {
        let id = self.templates.alloc(Template::new(owning_constructor, reference_width));
        self.functions.get_mut(owning_constructor).owning_template = Some(id);
        id
    }

    pub fn class_create(
        &mut self,
        template: TemplateId,
        block: BlockId,
        datatype: DatatypeId,
        template_args: Vec<DatatypeId>,
    ) -> ClassId {
        let id = self.classes.alloc(Class::new(template, block, datatype, template_args));
        self.blocks.get_mut(block).owning_class = Some(id);
        self.templates.get_mut(template).classes.append(id);
        id
    }

    pub fn variable_create(&mut self, block: BlockId, kind: VariableKind, name: StringId) -> VariableId {
        let id = self.variables.alloc(Variable::new(kind, name));
        self.blocks.get_mut(block).variables.push(id);
        let ident = self.idents.alloc(Ident::new(name, block, IdentKind::Variable(id)));
        self.blocks.get_mut(block).define(name, ident);
        id
    }

    pub fn statement_create(&mut self, block: BlockId, kind: StatementKind) -> StatementId {
        let id = self.statements.alloc(Statement::new(kind));
        self.blocks.get_mut(block).statements.push(id);
        id
    }

    pub fn expression_create(&mut self, kind: ExprKind) -> ExpressionId {
        self.expressions.alloc(Expression::new(kind))
    }

    pub fn expression_attach(&mut self, parent: ExpressionId, child: ExpressionId) {
        self.expressions.get_mut(parent).children.push(child);
    }

    /// Registers an Undefined ident as a forward-reference wait point
    /// (§3.1); the caller attaches an Event separately once the binder
    /// schedules a Binding against it.
    pub fn ident_declare_undefined(
        &mut self,
        block: BlockId,
        symbol: StringId,
        event: crate::ids::EventId,
    ) -> IdentId {
        let id = self.idents.alloc(Ident::new(symbol, block, IdentKind::Undefined(event)));
        self.blocks.get_mut(block).define(symbol, id);
        id
    }

    /// Shallow-copies a Block (and everything transitively owned by it:
    /// sub-blocks, statements, expressions, variables) with a fresh set of
    /// ids, renaming every `original_name` reference through `rename_map`.
    /// This is the "uniquified" clone signature instantiation performs
    /// (§4.6.3) and the operation the §8 round-trip property exercises.
    pub fn copy_block(&mut self, source: BlockId, parent: Option<BlockId>) -> BlockId {
        let mut rename_map: FxHashMap<ExpressionId, ExpressionId> = FxHashMap::default();
        self.copy_block_inner(source, parent, &mut rename_map)
    }

    fn copy_block_inner(
        &mut self,
        source: BlockId,
        parent: Option<BlockId>,
        expr_map: &mut FxHashMap<ExpressionId, ExpressionId>,
    ) -> BlockId {
        let kind = self.blocks.get(source).kind;
        let new_block = self.block_create(kind, parent);

        let statement_ids = self.blocks.get(source).statements.clone();
        for stmt_id in statement_ids {
            let new_stmt_id = self.copy_statement(stmt_id, new_block, expr_map);
            self.blocks.get_mut(new_block).statements.push(new_stmt_id);
        }

        let variable_ids = self.blocks.get(source).variables.clone();
        for var_id in variable_ids {
            let var = self.variables.get(var_id).clone();
            let new_var_id = self.variables.alloc(var);
            self.blocks.get_mut(new_block).variables.push(new_var_id);
        }

        new_block
    }

    fn copy_statement(
        &mut self,
        source: StatementId,
        owning_block: BlockId,
        expr_map: &mut FxHashMap<ExpressionId, ExpressionId>,
    ) -> StatementId {
        let original = self.statements.get(source).clone();
        let new_expr = original.expression.map(|e| self.copy_expression(e, expr_map));
        let new_sub_block = original
            .sub_block
            .map(|b| self.copy_block_inner(b, Some(owning_block), expr_map));

        let mut copy = original;
        copy.expression = new_expr;
        copy.sub_block = new_sub_block;
        self.statements.alloc(copy)
    }

    fn copy_expression(
        &mut self,
        source: ExpressionId,
        expr_map: &mut FxHashMap<ExpressionId, ExpressionId>,
    ) -> ExpressionId {
        if let Some(&already) = expr_map.get(&source) {
            return already;
        }
        let original = self.expressions.get(source).clone();
        let new_children: Vec<ExpressionId> = original
            .children
            .iter()
            .map(|&c| self.copy_expression(c, expr_map))
            .collect();
        let mut copy = original;
        copy.children = new_children;
        let new_id = self.expressions.alloc(copy);
        expr_map.insert(source, new_id);
        new_id
    }
}
