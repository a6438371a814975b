//! Derived entities: which artifacts exist for a model element and what
//! they are called.
//!
//! - [`Role`] - The fixed set of artifact kinds
//! - [`Element`], [`Descriptor`] - A model element bound to a role
//! - [`NameDeriver`] - Canonical names for descriptors and linked entities
//! - [`BaseList`] - Ordered base types of a declaration
//! - [`BackingInt`] - Minimal backing integer for an enumeration
//! - [`bind`] - The factory binding every model element to its roles

mod backing;
mod bases;
mod binding;
mod descriptor;
mod names;
mod role;

pub use backing::{BackingInt, value_range};
pub use bases::BaseList;
pub use binding::{bind, check_unique};
pub use descriptor::{Descriptor, Element};
pub use names::NameDeriver;
pub use role::{Facet, Role};
