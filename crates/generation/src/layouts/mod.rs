//! Layout catalog and resolution.
//!
//! Layout descriptors are loaded once at startup from JSON files in
//! `assets/layouts/` (with a built-in fallback set) and never mutated at
//! runtime. [`LayoutCatalog::resolve`] picks the descriptor a generation
//! run uses: exact (name, player count) match first, then the first
//! catalog-order descriptor with the right player count, else an explicit
//! error — generation never proceeds without a layout.

mod catalog;
mod types;

#[cfg(test)]
mod tests;

pub use catalog::{load_catalog_from_disk, LayoutCatalog};
pub use types::{LayoutDescriptor, LayoutError};
