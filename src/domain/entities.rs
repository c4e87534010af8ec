//! Domain entities: core data structures

use std::fmt;

/// A member of a lineage.
///
/// `name` is the lookup key; uniqueness is assumed but not enforced.
/// `year_converted` is only consulted by filtering queries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vampire {
    pub name: String,
    pub year_converted: i32,
}

impl Vampire {
    pub fn new(name: impl Into<String>, year_converted: i32) -> Self {
        Self {
            name: name.into(),
            year_converted,
        }
    }
}

impl fmt::Display for Vampire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.year_converted)
    }
}
