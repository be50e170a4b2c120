//! Human-readable labels attached to data values.

use core::fmt;

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{NumericsError, Result};

/// A data value paired with its label.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValueLabel<T> {
    /// The data value.
    pub value: T,
    /// The label shown in place of the value.
    pub label: String,
}

impl<T> ValueLabel<T> {
    /// Pair a value with a label.
    #[must_use]
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// A collection of value labels, unique by value and by label.
///
/// Entries are kept in insertion order. Lookup by label is hashed; lookup by
/// value is a linear scan so values only need `PartialEq`.
///
/// ```rust
/// use navec_core::ValueLabelCollection;
///
/// let mut labels = ValueLabelCollection::new();
/// labels.add(1, "Agree").unwrap();
/// labels.add(2, "Disagree").unwrap();
///
/// assert_eq!(labels.get_label(&2), Some("Disagree"));
/// assert_eq!(labels.get_value("Agree"), Some(&1));
/// assert!(labels.add(1, "Unsure").is_err());
/// ```
#[derive(Clone, PartialEq)]
pub struct ValueLabelCollection<T> {
    by_label: IndexMap<String, T>,
}

impl<T> Default for ValueLabelCollection<T> {
    fn default() -> Self {
        Self {
            by_label: IndexMap::new(),
        }
    }
}

impl<T: PartialEq> ValueLabelCollection<T> {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of labelled values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_label.len()
    }

    /// Returns `true` if no value is labelled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_label.is_empty()
    }

    /// Label a value.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::DuplicateValueLabel`] if the value or the
    /// label is already present.
    pub fn add(&mut self, value: T, label: impl Into<String>) -> Result<()>
    where
        T: fmt::Display,
    {
        let label = label.into();
        if self.contains_value(&value) {
            return Err(NumericsError::DuplicateValueLabel {
                name: "value",
                value: value.to_string(),
            });
        }
        if self.by_label.contains_key(&label) {
            return Err(NumericsError::DuplicateValueLabel {
                name: "label",
                value: label,
            });
        }
        self.by_label.insert(label, value);
        Ok(())
    }

    /// Remove the label of a value. Returns the removed label, if any.
    pub fn remove(&mut self, value: &T) -> Option<String> {
        let index = self.by_label.values().position(|v| v == value)?;
        self.by_label.shift_remove_index(index).map(|(label, _)| label)
    }

    /// Label of a value.
    #[must_use]
    pub fn get_label(&self, value: &T) -> Option<&str> {
        self.by_label
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(label, _)| label.as_str())
    }

    /// Value carrying a label.
    #[must_use]
    pub fn get_value(&self, label: &str) -> Option<&T> {
        self.by_label.get(label)
    }

    /// Check whether a value is labelled.
    #[must_use]
    pub fn contains_value(&self, value: &T) -> bool {
        self.by_label.values().any(|v| v == value)
    }

    /// Check whether a label is in use.
    #[must_use]
    pub fn contains_label(&self, label: &str) -> bool {
        self.by_label.contains_key(label)
    }

    /// Iterate over `(value, label)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &str)> {
        self.by_label.iter().map(|(label, value)| (value, label.as_str()))
    }

    /// Remove every label.
    pub fn clear(&mut self) {
        self.by_label.clear();
    }
}

impl<T: PartialEq + fmt::Display> TryFrom<Vec<ValueLabel<T>>> for ValueLabelCollection<T> {
    type Error = NumericsError;

    fn try_from(labels: Vec<ValueLabel<T>>) -> Result<Self> {
        let mut collection = Self::new();
        for ValueLabel { value, label } in labels {
            collection.add(value, label)?;
        }
        Ok(collection)
    }
}

impl<T: fmt::Debug> fmt::Debug for ValueLabelCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.by_label.iter().map(|(label, value)| (value, label)))
            .finish()
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for ValueLabelCollection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.by_label.len()))?;
        for (label, value) in &self.by_label {
            seq.serialize_element(&ValueLabel {
                value,
                label: label.clone(),
            })?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T> Deserialize<'de> for ValueLabelCollection<T>
where
    T: Deserialize<'de> + PartialEq + fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let labels = Vec::<ValueLabel<T>>::deserialize(deserializer)?;
        Self::try_from(labels).map_err(serde::de::Error::custom)
    }
}
