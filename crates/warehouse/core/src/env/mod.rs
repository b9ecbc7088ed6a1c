//! Traits describing read-only reference data.
//!
//! The item catalog and the option description tables are supplied by the
//! surrounding layer. The [`Env`] aggregate bundles them so the warehouse and
//! the session engine can reach both without depending on a concrete loader.
mod error;
mod items;

pub use error::OracleError;
pub use items::{ItemDefinition, ItemOracle};

#[cfg(test)]
pub(crate) use items::fixtures;

use crate::options::TablesOracle;

/// Aggregates the read-only oracles used by loading, placement and display.
pub struct Env<'a, I, T>
where
    I: ItemOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
    items: Option<&'a I>,
    tables: Option<&'a T>,
}

pub type WarehouseEnv<'a> = Env<'a, dyn ItemOracle + 'a, dyn TablesOracle + 'a>;

impl<'a, I, T> Env<'a, I, T>
where
    I: ItemOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
    pub fn new(items: Option<&'a I>, tables: Option<&'a T>) -> Self {
        Self { items, tables }
    }

    pub fn with_all(items: &'a I, tables: &'a T) -> Self {
        Self::new(Some(items), Some(tables))
    }

    pub fn empty() -> Self {
        Self {
            items: None,
            tables: None,
        }
    }

    /// Returns the ItemOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no item oracle was provided.
    pub fn items(&self) -> Result<&'a I, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the TablesOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TablesNotAvailable` if no tables oracle was provided.
    pub fn tables(&self) -> Result<&'a T, OracleError> {
        self.tables.ok_or(OracleError::TablesNotAvailable)
    }
}

impl<'a, I, T> Clone for Env<'a, I, T>
where
    I: ItemOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, I, T> Copy for Env<'a, I, T>
where
    I: ItemOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
}
