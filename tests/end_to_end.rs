//! End-to-end scenarios (§8): each test builds the HIR the way the
//! external parser/builder would for the quoted source line, then drives
//! it through the binder/transformer/verify pipeline this crate owns.

use std::path::PathBuf;
use tessera_hir::binder::instantiate::{instantiate_class, instantiate_signature};
use tessera_hir::binder::secret;
use tessera_hir::config::CompileConfig;
use tessera_hir::fmt_grammar;
use tessera_hir::hir::block::BlockKind;
use tessera_hir::hir::function::{FunctionKind, Linkage};
use tessera_hir::hir::relation_entity::{Relation, TransformerKind};
use tessera_hir::hir::root::Root;
use tessera_hir::hir::statement::StatementKind;
use tessera_hir::messages::errors::{ErrorLocation, SourcePos};
use tessera_hir::transformer;
use tessera_hir::verify;

fn fresh_root() -> Root {
    Root::new(CompileConfig::new(PathBuf::from("main.rn")))
}

fn loc() -> ErrorLocation {
    ErrorLocation {
        scope: PathBuf::from("main.rn"),
        start_pos: SourcePos { line_number: 1, char_column: 1 },
        end_pos: SourcePos { line_number: 1, char_column: 1 },
    }
}

/// Scenario 1: `println "Hello, World!"` — the print argument's format
/// string auto-synthesizes to a bare string specifier and the statement
/// is represented by one `Print` node wrapping the literal expression.
#[test]
fn hello_world_synthesizes_a_string_format_and_one_print_statement() {
    let mut root = fresh_root();
    let block = root.block_create(BlockKind::Function, None);
    let literal = root.expression_create(tessera_hir::hir::expression::ExprKind::Literal);
    let string_ty = root.datatypes.string_datatype();
    root.expressions.get_mut(literal).datatype = Some(string_ty);

    let print_stmt = root.statement_create(block, StatementKind::Print);
    root.statements.get_mut(print_stmt).expression = Some(literal);

    let spec = fmt_grammar::synthesize(&root.datatypes, string_ty).unwrap();
    assert_eq!(fmt_grammar::render_spec(&spec), "%s");
    assert_eq!(root.blocks.get(block).statements, vec![print_stmt]);
}

/// Scenario 2: `Point(1u32,2u32)` and `Point(1.3f64,-3.8f64)` land on two
/// distinct Classes under one Template, each with its own Signature.
#[test]
fn template_polymorphism_produces_two_classes_and_two_signatures() {
    let mut root = fresh_root();
    let ctor_block = root.block_create(BlockKind::Function, None);
    let ctor = root.function_create(FunctionKind::Constructor, Linkage::Module, ctor_block);
    let point = root.template_create(ctor, 64);

    let u32_ty = root.datatypes.uint_datatype(32);
    let f64_ty = root.datatypes.float_datatype(64);

    let int_point = instantiate_class(&mut root, point, vec![u32_ty, u32_ty]);
    let float_point = instantiate_class(&mut root, point, vec![f64_ty, f64_ty]);
    assert_ne!(int_point, float_point);
    assert_eq!(root.templates.get(point).classes.len(), 2);

    let s1 = instantiate_signature(&mut root, ctor, vec![u32_ty, u32_ty], None, None);
    let s2 = instantiate_signature(&mut root, ctor, vec![f64_ty, f64_ty], None, None);
    assert_ne!(s1, s2);
}

/// Scenario 3: assigning `null(Tree)` then `Tree(...)` to the same field
/// must refine the field's recorded datatype from `Null(Tree)` to the
/// concrete Class datatype.
#[test]
fn null_then_concrete_assignment_refines_the_datatype() {
    let mut root = fresh_root();
    let ctor_block = root.block_create(BlockKind::Function, None);
    let ctor = root.function_create(FunctionKind::Constructor, Linkage::Module, ctor_block);
    let tree = root.template_create(ctor, 64);

    let null_ty = root.datatypes.null_datatype(tree);
    let field_expr = root.expression_create(tessera_hir::hir::expression::ExprKind::Identifier);
    root.expressions.get_mut(field_expr).datatype = Some(null_ty);
    assert!(!root.datatypes.get(null_ty).is_concrete());

    let tree_class = instantiate_class(&mut root, tree, vec![]);
    let class_ty = root.classes.get(tree_class).datatype;
    root.expressions.get_mut(field_expr).datatype = Some(class_ty);

    assert!(root.datatypes.get(root.expressions.get(field_expr).datatype.unwrap()).is_concrete());
}

/// Scenario 4: branching on a secret value is rejected; laundering the
/// same comparison through `reveal` still taints the result but compiles.
#[test]
fn secret_branch_is_rejected_but_revealed_use_compiles() {
    let mut root = fresh_root();
    let string_ty = root.datatypes.string_datatype();
    let secret_password = root.datatypes.set_secret(string_ty, true);
    let bool_ty = root.datatypes.bool_datatype();

    let comparison = secret::propagate(&mut root.datatypes, bool_ty, secret_password, string_ty);
    assert!(root.datatypes.get(comparison).secret);
    assert!(secret::reject_secret_in_branch(&root.datatypes, comparison, &loc()).is_err());

    assert!(secret::reveal_for_branch_use(&root.datatypes, comparison, &loc()).is_ok());
    assert!(root.datatypes.get(comparison).secret, "reveal must not erase the taint bit itself");
}

/// Scenario 5: `relation DoublyLinked Graph Node cascade` generates the
/// six named identifiers on Graph's constructor block.
#[test]
fn cascade_doubly_linked_relation_generates_the_named_identifiers() {
    let mut root = fresh_root();
    let graph_ctor_block = root.block_create(BlockKind::Function, None);
    let graph_ctor = root.function_create(FunctionKind::Constructor, Linkage::Module, graph_ctor_block);
    let graph = root.template_create(graph_ctor, 32);

    let node_ctor_block = root.block_create(BlockKind::Function, None);
    let node_ctor = root.function_create(FunctionKind::Constructor, Linkage::Module, node_ctor_block);
    let node = root.template_create(node_ctor, 32);

    let graph_role = root.strings.intern("Graph");
    let node_role = root.strings.intern("Node");
    let mut relation = Relation::new(graph, node, TransformerKind::DoublyLinked, true);
    relation.parent_role = Some(graph_role);
    relation.child_role = Some(node_role);
    let relation_id = root.relations.alloc(relation);

    transformer::run(&mut root, relation_id);

    let names: Vec<String> = root
        .blocks
        .get(graph_ctor_block)
        .idents
        .keys()
        .map(|&s| root.strings.resolve(s).to_string())
        .collect();
    for expected in ["appendNode", "removeNode", "firstNode", "lastNode", "nextGraphNode", "prevGraphNode"] {
        assert!(names.contains(&expected.to_string()), "missing {expected}");
    }

    let reference_counted = verify::refcount::reference_counted_templates(&root);
    assert!(!reference_counted.contains(&node), "cascade child must not be reference-counted");
}

/// Scenario 6: two non-cascade OneToOne relations between A and B form a
/// reference-counted cycle and are rejected.
#[test]
fn two_non_cascade_one_to_one_relations_form_a_rejected_cycle() {
    let mut root = fresh_root();
    let a_block = root.block_create(BlockKind::Function, None);
    let a_ctor = root.function_create(FunctionKind::Constructor, Linkage::Module, a_block);
    let a = root.template_create(a_ctor, 64);

    let b_block = root.block_create(BlockKind::Function, None);
    let b_ctor = root.function_create(FunctionKind::Constructor, Linkage::Module, b_block);
    let b = root.template_create(b_ctor, 64);

    root.relations.alloc(Relation::new(a, b, TransformerKind::OneToOne, false));
    root.relations.alloc(Relation::new(b, a, TransformerKind::OneToOne, false));

    let cycle = verify::cycle::find_reference_counted_cycle(&root).expect("cycle must be detected");
    assert!(cycle.path.contains(&a) && cycle.path.contains(&b));
}
