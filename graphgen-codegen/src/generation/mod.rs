//! Output dependency tracking.

mod dependencies;

pub use dependencies::Dependencies;
