//! Element reference data
//!
//! This module contains the catalog side of the system:
//! - Element records as stored in the reference dataset
//! - The symbol-keyed catalog used for exact-case lookup
//! - The category palette used to color tiles

/// Element record type
pub mod element;
/// Category to color mapping
pub mod palette;
/// Symbol-keyed element catalog and its JSON loader
pub mod table;

pub use element::ElementRecord;
pub use palette::CategoryPalette;
pub use table::Catalog;
