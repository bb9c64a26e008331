//! Template/signature instantiation (§2.8, §4.6.3): uniquifies
//! functions/classes per call signature. A `Signature` is found-or-created
//! for `(Function, arg-types)`; when the callee's body actually needs to
//! see distinct parameter types per call site, a per-signature clone of the
//! function body is attached as `uniquified_function`.

use crate::hir::root::Root;
use crate::ids::{ClassId, DatatypeId, FunctionId, SignatureId, StatementId, TemplateId};

/// Finds or creates the Signature for calling `function` with `arg_types`.
/// If this is the first time this particular arg-type tuple has been seen
/// for `function`, clones the function's block as the "uniquified" body so
/// later binding steps can bind parameter types into a body private to this
/// call shape without disturbing other signatures of the same function.
pub fn instantiate_signature(
    root: &mut Root,
    function: FunctionId,
    arg_types: Vec<DatatypeId>,
    callsite: Option<StatementId>,
    caller: Option<SignatureId>,
) -> SignatureId {
    if let Some(existing) = root.signatures.find(function, &arg_types) {
        return existing;
    }

    let sig_id = root.signatures.intern(function, arg_types, callsite, caller);

    let needs_uniquification = root.signatures.len() > 1;
    if needs_uniquification {
        let original_block = root.functions.get(function).block;
        let cloned_block = root.copy_block(original_block, None);
        let uniquified = root.function_create(
            root.functions.get(function).kind,
            root.functions.get(function).linkage,
            cloned_block,
        );
        root.signatures.get_mut(sig_id).uniquified_function = Some(uniquified);
    }

    sig_id
}

/// Finds or creates the Class for instantiating `template` with
/// `template_args`. Mirrors §8 scenario 2: `Point(1u32,2u32)` and
/// `Point(1.3f64,-3.8f64)` must land on two distinct Classes under one
/// Template.
pub fn instantiate_class(root: &mut Root, template: TemplateId, template_args: Vec<DatatypeId>) -> ClassId {
    for class_id in root.templates.get(template).classes.iter() {
        if root.classes.get(class_id).template_args == template_args {
            return class_id;
        }
    }

    // `DatatypeKind::Class` needs the `ClassId` it names, which doesn't
    // exist yet — allocate the Class with a placeholder datatype, then
    // re-intern against its real id and fix the record up.
    let placeholder = root.datatypes.none_datatype();
    let class_block = root.block_create(crate::hir::block::BlockKind::Class, None);
    let class_id = root.class_create(template, class_block, placeholder, template_args);

    let correct_datatype = root.datatypes.class_datatype(class_id);
    root.classes.get_mut(class_id).datatype = correct_datatype;
    class_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompileConfig;
    use crate::hir::block::BlockKind;
    use crate::hir::function::{FunctionKind, Linkage};
    use std::path::PathBuf;

    fn fresh_root() -> Root {
        Root::new(CompileConfig::new(PathBuf::from("main.rn")))
    }

    #[test]
    fn distinct_template_arg_tuples_produce_distinct_classes() {
        let mut root = fresh_root();
        let ctor_block = root.block_create(BlockKind::Function, None);
        let ctor = root.function_create(FunctionKind::Constructor, Linkage::Module, ctor_block);
        let template = root.template_create(ctor, 32);

        let u32_dt = root.datatypes.uint_datatype(32);
        let f64_dt = root.datatypes.float_datatype(64);

        let c1 = instantiate_class(&mut root, template, vec![u32_dt, u32_dt]);
        let c2 = instantiate_class(&mut root, template, vec![f64_dt, f64_dt]);
        assert_ne!(c1, c2);
        assert_eq!(root.templates.get(template).classes.len(), 2);
    }

    #[test]
    fn repeated_instantiation_with_the_same_args_reuses_the_class() {
        let mut root = fresh_root();
        let ctor_block = root.block_create(BlockKind::Function, None);
        let ctor = root.function_create(FunctionKind::Constructor, Linkage::Module, ctor_block);
        let template = root.template_create(ctor, 32);
        let u32_dt = root.datatypes.uint_datatype(32);

        let c1 = instantiate_class(&mut root, template, vec![u32_dt]);
        let c2 = instantiate_class(&mut root, template, vec![u32_dt]);
        assert_eq!(c1, c2);
        assert_eq!(root.templates.get(template).classes.len(), 1);
    }

    #[test]
    fn a_second_distinct_signature_gets_its_own_uniquified_function_body() {
        let mut root = fresh_root();
        let block = root.block_create(BlockKind::Function, None);
        let function = root.function_create(FunctionKind::Plain, Linkage::Module, block);
        let u32_dt = root.datatypes.uint_datatype(32);
        let f64_dt = root.datatypes.float_datatype(64);

        let s1 = instantiate_signature(&mut root, function, vec![u32_dt], None, None);
        assert!(root.signatures.get(s1).uniquified_function.is_none());

        let s2 = instantiate_signature(&mut root, function, vec![f64_dt], None, None);
        assert!(root.signatures.get(s2).uniquified_function.is_some());
    }
}
