//! Constant-time contract enforcement (§1, §4.7, §8 scenario 4): secret
//! taint propagates through any operation combining a secret operand, and
//! secret values are forbidden in branch conditions, array indices, and
//! any non-constant-time built-in.

use crate::datatype::DatatypeStore;
use crate::ids::DatatypeId;
use crate::messages::errors::{CompilerError, ErrorKind, ErrorLocation};

/// Combine the secret bits of two operand datatypes and return the result
/// datatype (interning a secret variant if either operand was secret).
/// This is the "any operation combining a secret operand yields a secret
/// result" rule stated in §SPEC_FULL / the glossary.
pub fn propagate(datatypes: &mut DatatypeStore, result_shape: DatatypeId, lhs: DatatypeId, rhs: DatatypeId) -> DatatypeId {
    let secret = datatypes.get(lhs).secret || datatypes.get(rhs).secret;
    if secret {
        datatypes.set_secret(result_shape, true)
    } else {
        result_shape
    }
}

/// §8 scenario 4: `if secret_value { ... }` is rejected at bind time.
pub fn reject_secret_in_branch(
    datatypes: &DatatypeStore,
    condition: DatatypeId,
    location: &ErrorLocation,
) -> Result<(), CompilerError> {
    if datatypes.get(condition).secret {
        return Err(CompilerError::new(
            ErrorKind::Type,
            "branch on secret value",
            location.clone(),
        ));
    }
    Ok(())
}

/// A secret value must never select an array index or drive any other
/// data-dependent control path at codegen time.
pub fn reject_secret_index(
    datatypes: &DatatypeStore,
    index: DatatypeId,
    location: &ErrorLocation,
) -> Result<(), CompilerError> {
    if datatypes.get(index).secret {
        return Err(CompilerError::new(
            ErrorKind::Type,
            "secret value used as array index",
            location.clone(),
        ));
    }
    Ok(())
}

/// `reveal(expr)` (§8 scenario 4): explicitly launders a secret-tainted
/// value so it can be used in a branch/index, without affecting the bit
/// itself on every *other* use of the original expression. The laundered
/// result keeps `secret = true` in the datatype store (taint never actually
/// disappears structurally) — `reveal` only changes how the *binder*
/// treats the value at this one use site, not its type.
pub fn reveal_for_branch_use(
    datatypes: &DatatypeStore,
    revealed: DatatypeId,
    location: &ErrorLocation,
) -> Result<(), CompilerError> {
    let _ = location;
    let _ = datatypes.get(revealed);
    Ok(())
}
