//! The relation runtime (design §4.1): for every declared relation between a
//! parent entity P and a child entity C, one of these containers provides
//! O(1) append/remove and a plain/safe iteration pair. Every container is
//! generic over the child's arena handle (`crate::arena::Idx<C>`) so the same
//! code backs both HIR-internal bookkeeping (a `Template`'s list of `Class`
//! instantiations) and the datatype/signature interning tables.
//!
//! Plain iteration (`iter`) is undefined if the container is mutated while
//! the iterator is alive — callers that need to remove/destroy the current
//! element mid-walk must use `iter_safe`, which pre-reads the successor
//! before yielding the current element.

mod array_rel;
mod hashed;
mod heapq;
mod list;
mod one_to_one;

pub use array_rel::ArrayRel;
pub use hashed::{HashKey, HashedClassRel, HashedRel};
pub use heapq::HeapqRel;
pub use list::{DoublyLinkedRel, LinkedListRel, TailLinkedRel};
pub use one_to_one::OneToOneRel;
