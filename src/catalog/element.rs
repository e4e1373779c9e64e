//! Element records as found in the periodic table dataset

use serde::Deserialize;

/// One chemical element
///
/// Records are owned by the [`Catalog`](crate::catalog::Catalog) and borrowed
/// everywhere else. Fields the dataset carries beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ElementRecord {
    /// Atomic number
    pub number: u32,
    /// Case-sensitive element symbol, e.g. `Na`
    pub symbol: String,
    /// English element name
    pub name: String,
    /// Standard atomic mass
    pub atomic_mass: f64,
    /// Category tag, e.g. `noble gas`
    pub category: String,
}

impl ElementRecord {
    /// Build a record from its parts
    pub fn new(
        number: u32,
        symbol: impl Into<String>,
        name: impl Into<String>,
        atomic_mass: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            number,
            symbol: symbol.into(),
            name: name.into(),
            atomic_mass,
            category: category.into(),
        }
    }
}
