//! Multi-column tabular data with deterministic iteration order.
//!
//! The [`DataFrame`] type stores named, type-erased columns. It uses
//! `IndexMap` so columns always iterate in insertion order.

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{NumericsError, Result};
use crate::handle::{type_mismatch, Element, VectorDataType, VectorHandle};
use crate::series::Series;
use crate::vector::Vector;

/// A table of equally long, named columns of any supported element type.
///
/// # Example
///
/// ```rust
/// use navec_core::{DataFrame, Series, Timestamp};
///
/// let mut df = DataFrame::new();
/// df.add_series(Series::new("period", vec![Timestamp::EPOCH])).unwrap();
/// df.add_series(Series::new("value", vec![1.5f64])).unwrap();
///
/// assert_eq!(df.len(), 1);
/// assert_eq!(df.column_names(), vec!["period", "value"]);
/// assert_eq!(df.column::<f64>("value").unwrap().as_slice(), &[1.5]);
/// assert!(df.column::<i32>("value").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct DataFrame {
    columns: IndexMap<String, VectorHandle>,
}

impl DataFrame {
    /// Create an empty data frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a data frame with capacity for `capacity` columns.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: IndexMap::with_capacity(capacity),
        }
    }

    /// Create a data frame from named columns.
    ///
    /// # Errors
    ///
    /// Returns an error if two columns share a name or differ in length.
    pub fn from_columns(columns: Vec<(String, VectorHandle)>) -> Result<Self> {
        let mut df = Self::with_capacity(columns.len());
        for (name, column) in columns {
            df.add_column(name, column)?;
        }
        Ok(df)
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.values().next().map_or(0, VectorHandle::len)
    }

    /// Returns `true` if the data frame has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names in insertion order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    /// Column names with their element types, in insertion order.
    #[must_use]
    pub fn data_types(&self) -> Vec<(&str, VectorDataType)> {
        self.columns
            .iter()
            .map(|(name, column)| (name.as_str(), column.data_type()))
            .collect()
    }

    /// Check if a column exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Type-erased column by name.
    #[must_use]
    pub fn get_column(&self, name: &str) -> Option<&VectorHandle> {
        self.columns.get(name)
    }

    /// Typed column by name.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::KeyNotFound`] if there is no such column, or
    /// [`NumericsError::InvalidData`] if it holds another element type.
    pub fn column<T: Element>(&self, name: &str) -> Result<&Vector<T>> {
        let column = self
            .columns
            .get(name)
            .ok_or_else(|| NumericsError::KeyNotFound(name.to_string()))?;
        column
            .downcast::<T>()
            .ok_or_else(|| type_mismatch::<T>(column.data_type()))
    }

    /// Mutable typed column by name.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::KeyNotFound`] if there is no such column, or
    /// [`NumericsError::InvalidData`] if it holds another element type.
    pub fn column_mut<T: Element>(&mut self, name: &str) -> Result<&mut Vector<T>> {
        let column = self
            .columns
            .get_mut(name)
            .ok_or_else(|| NumericsError::KeyNotFound(name.to_string()))?;
        let actual = column.data_type();
        column
            .downcast_mut::<T>()
            .ok_or_else(|| type_mismatch::<T>(actual))
    }

    /// Typed column by name, copied out as a series.
    ///
    /// # Errors
    ///
    /// Same as [`column`](Self::column).
    pub fn series<T: Element>(&self, name: &str) -> Result<Series<T>> {
        self.column::<T>(name)
            .map(|vector| Series::from_vector(name, vector.clone()))
    }

    /// Add a new column at the end.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::InvalidData`] if the name is taken, or
    /// [`NumericsError::LengthMismatch`] if the length differs from the
    /// existing columns.
    pub fn add_column(&mut self, name: impl Into<String>, column: impl Into<VectorHandle>) -> Result<()> {
        let name = name.into();
        let column = column.into();
        if self.columns.contains_key(&name) {
            return Err(NumericsError::invalid_data(format_args!(
                "column '{name}' already exists"
            )));
        }
        if !self.columns.is_empty() {
            NumericsError::check_length("column", self.len(), column.len())?;
        }
        self.columns.insert(name, column);
        Ok(())
    }

    /// Add a series as a new column named after it.
    ///
    /// # Errors
    ///
    /// Same as [`add_column`](Self::add_column).
    pub fn add_series<T: Element>(&mut self, series: Series<T>) -> Result<()> {
        let (name, vector) = series.into_parts();
        self.add_column(name, vector)
    }

    /// Add or replace a column.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::LengthMismatch`] if a new column's length
    /// differs from the existing columns.
    pub fn set_column(&mut self, name: impl Into<String>, column: impl Into<VectorHandle>) -> Result<()> {
        let name = name.into();
        let column = column.into();
        let replacing_only = self.columns.len() == 1 && self.columns.contains_key(&name);
        if !self.columns.is_empty() && !replacing_only {
            NumericsError::check_length("column", self.len(), column.len())?;
        }
        self.columns.insert(name, column);
        Ok(())
    }

    /// Remove and return a column by name.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::KeyNotFound`] if the column doesn't exist.
    pub fn drop_column(&mut self, name: &str) -> Result<VectorHandle> {
        self.columns
            .shift_remove(name)
            .ok_or_else(|| NumericsError::KeyNotFound(name.to_string()))
    }

    /// Rename a column, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::KeyNotFound`] if the old column doesn't
    /// exist, or [`NumericsError::InvalidData`] if the new name is taken.
    pub fn rename_column(&mut self, old_name: &str, new_name: impl Into<String>) -> Result<()> {
        let new_name = new_name.into();
        let Some(index) = self.columns.get_index_of(old_name) else {
            return Err(NumericsError::KeyNotFound(old_name.to_string()));
        };
        if self.columns.contains_key(&new_name) {
            return Err(NumericsError::invalid_data(format_args!(
                "column '{new_name}' already exists"
            )));
        }
        if let Some(column) = self.columns.shift_remove(old_name) {
            self.columns.shift_insert(index, new_name, column);
        }
        Ok(())
    }

    /// A new data frame with only the given columns, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::KeyNotFound`] if any column doesn't exist.
    pub fn select(&self, columns: &[&str]) -> Result<Self> {
        let mut result = Self::with_capacity(columns.len());
        for &name in columns {
            let column = self
                .columns
                .get(name)
                .ok_or_else(|| NumericsError::KeyNotFound(name.to_string()))?;
            result.columns.insert(name.to_string(), column.clone());
        }
        Ok(result)
    }

    /// Join the columns of two data frames side by side.
    ///
    /// # Errors
    ///
    /// Returns an error if the row counts differ or a name is shared.
    pub fn concat(&self, other: &Self) -> Result<Self> {
        let mut result = self.clone();
        for (name, column) in &other.columns {
            result.add_column(name.clone(), column.clone())?;
        }
        Ok(result)
    }

    /// Iterate over `(name, column)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VectorHandle)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Remove every column.
    pub fn clear(&mut self) {
        self.columns.clear();
    }
}

impl PartialEq for DataFrame {
    fn eq(&self, other: &Self) -> bool {
        // Column order is part of a frame's identity.
        self.columns.len() == other.columns.len()
            && self
                .columns
                .iter()
                .zip(&other.columns)
                .all(|((k1, v1), (k2, v2))| k1 == k2 && v1 == v2)
    }
}

#[cfg(feature = "serde")]
impl Serialize for DataFrame {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        self.columns.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DataFrame {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let columns = IndexMap::<String, VectorHandle>::deserialize(deserializer)?;
        Self::from_columns(columns.into_iter().collect()).map_err(serde::de::Error::custom)
    }
}
