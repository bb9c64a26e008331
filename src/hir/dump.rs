//! Debug dumper (§SPEC_FULL 4 "supplemented features"): a stable textual
//! form of the object graph, grounded in the teacher's `hir_display.rs` /
//! `display_hir.rs`. Used for the `show_hir` developer view and for the
//! §8 round-trip testable property (shallow-copy-then-dump equality).

use crate::hir::block::Block;
use crate::hir::root::Root;
use crate::hir::statement::Statement;
use crate::ids::BlockId;
use std::fmt::Write as _;

pub fn dump_block(root: &Root, block_id: BlockId) -> String {
    let mut out = String::new();
    dump_block_inner(root, block_id, 0, &mut out);
    out
}

fn dump_block_inner(root: &Root, block_id: BlockId, indent: usize, out: &mut String) {
    let block: &Block = root.blocks.get(block_id);
    let pad = "  ".repeat(indent);
    let _ = writeln!(out, "{pad}Block({:?})", block.kind);
    for &var_id in &block.variables {
        let var = root.variables.get(var_id);
        let _ = writeln!(
            out,
            "{pad}  var {} : {}",
            root.strings.try_resolve(var.original_name).unwrap_or("?"),
            var.datatype.map(|d| d.raw()).map_or("unbound".to_string(), |r| r.to_string())
        );
    }
    for &stmt_id in &block.statements {
        dump_statement(root, stmt_id, indent + 1, out);
    }
}

fn dump_statement(root: &Root, stmt_id: crate::ids::StatementId, indent: usize, out: &mut String) {
    let stmt: &Statement = root.statements.get(stmt_id);
    let pad = "  ".repeat(indent);
    let _ = writeln!(
        out,
        "{pad}{:?}{}",
        stmt.kind,
        if stmt.generated { " [generated]" } else { "" }
    );
    if let Some(sub) = stmt.sub_block {
        dump_block_inner(root, sub, indent + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompileConfig;
    use crate::hir::block::BlockKind;
    use crate::hir::statement::StatementKind;
    use std::path::PathBuf;

    #[test]
    fn dumping_a_block_copy_matches_the_original_verbatim() {
        let mut root = Root::new(CompileConfig::new(PathBuf::from("main.rn")));
        let block = root.block_create(BlockKind::Function, None);
        root.statement_create(block, StatementKind::Return);

        let before = dump_block(&root, block);
        let copy = root.copy_block(block, None);
        let after = dump_block(&root, copy);
        assert_eq!(before, after);
    }
}
