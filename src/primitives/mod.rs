//! Primitive compile-time values (§4.2): fixed-width big integers, floats,
//! reference-counted scalar strings, interned filepaths and immutable
//! source-location records. These back expression constant-folding and
//! literal-width checking in the binder; they are not the constant-time
//! runtime big-integer library emitted programs link against (that stays an
//! external, out-of-scope collaborator per §1 — only the compiler's own
//! compile-time arithmetic is in scope here).

pub mod bigint;
pub mod filepath;
pub mod float;
pub mod line;
pub mod string_value;

pub use bigint::BigInt;
pub use filepath::FilepathTable;
pub use float::Float;
pub use line::Line;
pub use string_value::StringValue;
