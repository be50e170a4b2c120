//! Category sets: the declared domain of a categorical vector.
//!
//! [`CategorySet`] is mutable and [`ReadOnlyCategorySet`] is frozen. Both
//! implement [`Categories`], which provides the set relations so either kind
//! can be compared with the other.
//!
//! Membership only needs `PartialEq`, so float categories are allowed.
//! Lookups are linear; category domains are expected to be small.

use core::fmt;
use core::slice;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{NumericsError, Result};

/// Read access and set relations shared by both category set kinds.
///
/// All relations follow the usual laws for the empty set: it is a subset of
/// every set, a proper subset of every non-empty set, overlaps nothing, and
/// equals only itself.
pub trait Categories<T: PartialEq> {
    /// Members in insertion order.
    fn members(&self) -> &[T];

    /// Number of members.
    fn len(&self) -> usize {
        self.members().len()
    }

    /// Returns `true` if the set has no members.
    fn is_empty(&self) -> bool {
        self.members().is_empty()
    }

    /// Check membership.
    fn contains(&self, value: &T) -> bool {
        self.members().contains(value)
    }

    /// Every member of `self` is in `other`.
    fn is_subset_of<C: Categories<T> + ?Sized>(&self, other: &C) -> bool {
        self.len() <= other.len() && self.members().iter().all(|v| other.contains(v))
    }

    /// Subset of `other` and strictly smaller.
    fn is_proper_subset_of<C: Categories<T> + ?Sized>(&self, other: &C) -> bool {
        self.len() < other.len() && self.is_subset_of(other)
    }

    /// Every member of `other` is in `self`.
    fn is_superset_of<C: Categories<T> + ?Sized>(&self, other: &C) -> bool {
        other.len() <= self.len() && other.members().iter().all(|v| self.contains(v))
    }

    /// Superset of `other` and strictly larger.
    fn is_proper_superset_of<C: Categories<T> + ?Sized>(&self, other: &C) -> bool {
        other.len() < self.len() && self.is_superset_of(other)
    }

    /// The sets share at least one member.
    fn overlaps<C: Categories<T> + ?Sized>(&self, other: &C) -> bool {
        self.members().iter().any(|v| other.contains(v))
    }

    /// Both sets have exactly the same members.
    fn set_equals<C: Categories<T> + ?Sized>(&self, other: &C) -> bool {
        self.len() == other.len() && self.is_subset_of(other)
    }
}

/// A mutable set of declared category values.
///
/// ```rust
/// use navec_core::category::{Categories, CategorySet};
///
/// let mut set = CategorySet::new();
/// assert!(set.add(1));
/// assert!(set.add(2));
/// assert!(!set.add(1));
///
/// let all: CategorySet<i32> = [1, 2, 3].into_iter().collect();
/// assert!(set.is_proper_subset_of(&all));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CategorySet<T> {
    members: Vec<T>,
}

impl<T> Default for CategorySet<T> {
    fn default() -> Self {
        Self {
            members: Vec::new(),
        }
    }
}

impl<T: PartialEq> CategorySet<T> {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from values, rejecting duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::InvalidData`] if a value appears twice.
    pub fn try_from_values(values: Vec<T>) -> Result<Self>
    where
        T: fmt::Debug,
    {
        let mut set = Self {
            members: Vec::with_capacity(values.len()),
        };
        for value in values {
            if set.contains(&value) {
                return Err(NumericsError::invalid_data(format_args!(
                    "duplicate category {value:?}"
                )));
            }
            set.members.push(value);
        }
        Ok(set)
    }

    /// Add a value. Returns `false` if it was already present.
    pub fn add(&mut self, value: T) -> bool {
        if self.contains(&value) {
            false
        } else {
            self.members.push(value);
            true
        }
    }

    /// Remove a value. Returns `false` if it was not present.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.members.iter().position(|m| m == value) {
            Some(index) => {
                self.members.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every member.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Iterate over members in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.members.iter()
    }

    /// Freeze the set without copying its members.
    #[must_use]
    pub fn into_read_only(self) -> ReadOnlyCategorySet<T> {
        ReadOnlyCategorySet {
            members: self.members,
        }
    }
}

impl<T: PartialEq> Categories<T> for CategorySet<T> {
    fn members(&self) -> &[T] {
        &self.members
    }
}

impl<T: PartialEq> FromIterator<T> for CategorySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq> Extend<T> for CategorySet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a CategorySet<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// An immutable set of declared category values.
#[derive(Clone, Debug, PartialEq)]
pub struct ReadOnlyCategorySet<T> {
    members: Vec<T>,
}

impl<T: PartialEq> ReadOnlyCategorySet<T> {
    /// Iterate over members in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.members.iter()
    }
}

impl<T: PartialEq> Categories<T> for ReadOnlyCategorySet<T> {
    fn members(&self) -> &[T] {
        &self.members
    }
}

impl<T: PartialEq> From<CategorySet<T>> for ReadOnlyCategorySet<T> {
    fn from(set: CategorySet<T>) -> Self {
        set.into_read_only()
    }
}

impl<T: PartialEq> FromIterator<T> for ReadOnlyCategorySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<CategorySet<T>>().into_read_only()
    }
}

#[cfg(feature = "serde")]
macro_rules! impl_category_serde {
    ($name:ident) => {
        impl<T: Serialize> Serialize for $name<T> {
            fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
                self.members.serialize(serializer)
            }
        }

        impl<'de, T: Deserialize<'de> + PartialEq + fmt::Debug> Deserialize<'de> for $name<T> {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
                let values = Vec::<T>::deserialize(deserializer)?;
                let set = CategorySet::try_from_values(values).map_err(serde::de::Error::custom)?;
                Ok(set.into())
            }
        }
    };
}

#[cfg(feature = "serde")]
impl_category_serde!(CategorySet);
#[cfg(feature = "serde")]
impl_category_serde!(ReadOnlyCategorySet);

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[i32]) -> CategorySet<i32> {
        values.iter().copied().collect()
    }

    fn frozen(values: &[i32]) -> ReadOnlyCategorySet<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_add_and_remove() {
        let mut s = set(&[1, 2]);
        assert!(!s.add(2));
        assert!(s.add(3));
        assert_eq!(s.len(), 3);
        assert!(s.remove(&1));
        assert!(!s.remove(&1));
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_try_from_values_rejects_duplicates() {
        assert!(CategorySet::try_from_values(vec![1, 2, 3]).is_ok());
        assert!(matches!(
            CategorySet::try_from_values(vec![1, 2, 1]),
            Err(NumericsError::InvalidData(_))
        ));
    }

    #[test]
    fn test_empty_set_laws() {
        let empty = set(&[]);
        let empty_frozen = frozen(&[]);
        let full = set(&[1, 2]);

        assert!(empty.is_subset_of(&empty_frozen));
        assert!(empty.is_subset_of(&full));
        assert!(!empty.is_proper_subset_of(&empty_frozen));
        assert!(empty.is_proper_subset_of(&full));
        assert!(empty.is_superset_of(&empty_frozen));
        assert!(!empty.is_superset_of(&full));
        assert!(!empty.is_proper_superset_of(&empty_frozen));
        assert!(full.is_superset_of(&empty));
        assert!(full.is_proper_superset_of(&empty_frozen));
        assert!(!empty.overlaps(&empty_frozen));
        assert!(!full.overlaps(&empty));
        assert!(empty.set_equals(&empty_frozen));
        assert!(!empty.set_equals(&full));
    }

    #[test]
    fn test_relations_across_kinds() {
        let small = set(&[2, 1]);
        let big = frozen(&[1, 2, 3]);

        assert!(small.is_subset_of(&big));
        assert!(small.is_proper_subset_of(&big));
        assert!(big.is_superset_of(&small));
        assert!(big.is_proper_superset_of(&small));
        assert!(small.overlaps(&big));
        assert!(!small.set_equals(&big));
        assert!(small.set_equals(&frozen(&[1, 2])));
        assert!(!small.is_proper_subset_of(&frozen(&[1, 2])));
        assert!(!set(&[4]).overlaps(&big));
        assert!(!set(&[1, 4]).is_subset_of(&big));
    }

    #[test]
    fn test_float_categories() {
        let s: CategorySet<f64> = [0.5, 1.5].into_iter().collect();
        assert!(s.contains(&1.5));
        assert!(!s.contains(&2.5));
    }

    #[test]
    fn test_into_read_only_keeps_members() {
        let s = set(&[3, 1, 2]);
        let ptr = s.members().as_ptr();
        let frozen = s.into_read_only();
        assert_eq!(frozen.members(), &[3, 1, 2]);
        assert_eq!(frozen.members().as_ptr(), ptr);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let s = set(&[5, 7]);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "[5,7]");
        let back: ReadOnlyCategorySet<i32> = serde_json::from_str(&json).unwrap();
        assert!(back.set_equals(&s));
        assert!(serde_json::from_str::<CategorySet<i32>>("[1,1]").is_err());
    }
}
