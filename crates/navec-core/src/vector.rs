//! Contiguous one-dimensional data with categorical metadata.
//!
//! A [`Vector`] owns its buffer together with an optional [`CategorySet`]
//! declaring the allowed values and a [`ValueLabelCollection`] naming some of
//! them. [`ReadOnlyVector`] is a borrowed, read-only alias of the same data.

use core::fmt;
use core::ops::{Index, IndexMut, Range};
use core::slice;
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

use crate::category::{Categories, CategorySet};
use crate::error::{NumericsError, Result};
use crate::label::ValueLabelCollection;
use crate::num::Number;
use crate::view::{StridedSpan, StridedSpanMut, StridedView};

/// A contiguous vector of values with optional categories and value labels.
///
/// Equality compares the data only.
///
/// # Example
///
/// ```rust
/// use navec_core::{CategorySet, Vector};
///
/// let mut answers = Vector::from_vec(vec![1, 2, 2, 3])
///     .with_categories([1, 2, 3].into_iter().collect::<CategorySet<_>>());
/// answers.labels_mut().add(1, "No").unwrap();
/// answers.labels_mut().add(2, "Yes").unwrap();
///
/// let shown: Vec<_> = answers.labelled_data().collect();
/// assert_eq!(shown, ["No", "Yes", "Yes", "3"]);
/// assert!(answers.uncategorized_positions().is_empty());
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(bound(serialize = "T: Serialize + PartialEq")))]
pub struct Vector<T> {
    data: Vec<T>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    categories: Option<CategorySet<T>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "ValueLabelCollection::is_empty"))]
    labels: ValueLabelCollection<T>,
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::from_vec(Vec::new())
    }
}

impl<T> Vector<T> {
    /// Take ownership of a buffer.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            data,
            categories: None,
            labels: ValueLabelCollection::default(),
        }
    }

    /// Copy values into a new vector.
    #[must_use]
    pub fn create(values: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_vec(values.to_vec())
    }

    /// A vector of `len` copies of `value`.
    #[must_use]
    pub fn create_filled(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_vec(vec![value; len])
    }

    /// A vector of `len` default values.
    #[must_use]
    pub fn create_with_length(len: usize) -> Self
    where
        T: Default + Clone,
    {
        Self::create_filled(len, T::default())
    }

    /// A vector of `len` values produced from their positions, with no
    /// default fill first.
    #[must_use]
    pub fn create_uninitialized(len: usize, init: impl FnMut(usize) -> T) -> Self {
        Self::from_vec((0..len).map(init).collect())
    }

    /// Attach declared categories.
    ///
    /// The data is not checked against them; see
    /// [`uncategorized_positions`](Self::uncategorized_positions).
    #[must_use]
    pub fn with_categories(mut self, categories: CategorySet<T>) -> Self {
        self.categories = Some(categories);
        self
    }

    /// Attach value labels.
    #[must_use]
    pub fn with_labels(mut self, labels: ValueLabelCollection<T>) -> Self {
        self.labels = labels;
        self
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The data as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Mutable element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Iterate over the data.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Append a value.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Declared categories, if any.
    #[must_use]
    pub fn categories(&self) -> Option<&CategorySet<T>> {
        self.categories.as_ref()
    }

    /// Declared categories, mutably.
    pub fn categories_mut(&mut self) -> Option<&mut CategorySet<T>> {
        self.categories.as_mut()
    }

    /// Returns `true` if categories are declared.
    #[must_use]
    pub fn has_categories(&self) -> bool {
        self.categories.is_some()
    }

    /// Value labels.
    #[must_use]
    pub fn labels(&self) -> &ValueLabelCollection<T> {
        &self.labels
    }

    /// Value labels, mutably.
    pub fn labels_mut(&mut self) -> &mut ValueLabelCollection<T> {
        &mut self.labels
    }

    /// Borrow as a read-only vector. No data is copied.
    #[must_use]
    pub fn as_read_only(&self) -> ReadOnlyVector<'_, T> {
        ReadOnlyVector {
            data: &self.data,
            categories: self.categories.as_ref(),
            labels: Some(&self.labels),
        }
    }

    /// View the data with a multidimensional shape.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::ShapeMismatch`] if `shape` does not match
    /// the length.
    pub fn as_view(&self, shape: &[usize]) -> Result<StridedSpan<'_, T>> {
        StridedView::new(self.data.as_slice(), shape)
    }

    /// View the data mutably with a multidimensional shape.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::ShapeMismatch`] if `shape` does not match
    /// the length.
    pub fn as_view_mut(&mut self, shape: &[usize]) -> Result<StridedSpanMut<'_, T>> {
        StridedView::new(self.data.as_mut_slice(), shape)
    }

    /// Consume the vector, returning its buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Number> Vector<T> {
    /// A vector of `len` zeroes.
    #[must_use]
    pub fn create_zeroes(len: usize) -> Self {
        Self::create_filled(len, T::ZERO)
    }

    /// A vector of `len` ones.
    #[must_use]
    pub fn create_ones(len: usize) -> Self {
        Self::create_filled(len, T::ONE)
    }
}

impl<T: PartialEq> Vector<T> {
    /// Positions whose value is not among the declared categories.
    ///
    /// Empty when no categories are declared.
    #[must_use]
    pub fn uncategorized_positions(&self) -> Vec<usize> {
        self.as_read_only().uncategorized_positions()
    }

    /// Lazily render each element as its label, or as its text when it has
    /// no label.
    pub fn labelled_data(&self) -> impl Iterator<Item = Cow<'_, str>> + '_
    where
        T: fmt::Display,
    {
        self.as_read_only().labelled_data()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("data", &self.data)
            .field("categories", &self.categories)
            .field("labels", &self.labels)
            .finish()
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

/// Raw constituents of a [`Vector`], as produced by external readers.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "T: Deserialize<'de> + PartialEq + fmt::Display + fmt::Debug"))
)]
pub struct VectorParts<T> {
    /// The data buffer. Required.
    pub data: Option<Vec<T>>,
    /// Declared categories.
    pub categories: Option<CategorySet<T>>,
    /// Value labels.
    pub labels: Option<ValueLabelCollection<T>>,
}

impl<T> Vector<T> {
    /// Assemble a vector from raw parts.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::NullArgument`] if the data buffer is absent.
    pub fn from_parts(parts: VectorParts<T>) -> Result<Self> {
        let data = parts.data.ok_or(NumericsError::NullArgument { name: "data" })?;
        Ok(Self {
            data,
            categories: parts.categories,
            labels: parts.labels.unwrap_or_default(),
        })
    }
}

#[cfg(feature = "serde")]
impl<'de, T> Deserialize<'de> for Vector<T>
where
    T: Deserialize<'de> + PartialEq + fmt::Display + fmt::Debug,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let parts = VectorParts::<T>::deserialize(deserializer)?;
        Self::from_parts(parts).map_err(serde::de::Error::custom)
    }
}

/// A borrowed, read-only alias of a vector's data and metadata.
///
/// Creating one is O(1) and never copies the buffer.
pub struct ReadOnlyVector<'a, T> {
    data: &'a [T],
    categories: Option<&'a CategorySet<T>>,
    labels: Option<&'a ValueLabelCollection<T>>,
}

impl<T> Clone for ReadOnlyVector<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ReadOnlyVector<'_, T> {}

impl<'a, T> ReadOnlyVector<'a, T> {
    /// Alias a plain slice with no metadata.
    #[must_use]
    pub fn from_slice(data: &'a [T]) -> Self {
        Self {
            data,
            categories: None,
            labels: None,
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The aliased data.
    #[must_use]
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.data.get(index)
    }

    /// Iterate over the data.
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.data.iter()
    }

    /// Declared categories, if any.
    #[must_use]
    pub fn categories(&self) -> Option<&'a CategorySet<T>> {
        self.categories
    }

    /// Value labels, if any.
    #[must_use]
    pub fn labels(&self) -> Option<&'a ValueLabelCollection<T>> {
        self.labels
    }

    /// Alias a sub-range, keeping the metadata.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> Option<Self> {
        Some(Self {
            data: self.data.get(range)?,
            ..*self
        })
    }

    /// View the data with a multidimensional shape.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::ShapeMismatch`] if `shape` does not match
    /// the length.
    pub fn as_view(&self, shape: &[usize]) -> Result<StridedSpan<'a, T>> {
        StridedView::new(self.data, shape)
    }
}

impl<'a, T: PartialEq> ReadOnlyVector<'a, T> {
    /// Positions whose value is not among the declared categories.
    #[must_use]
    pub fn uncategorized_positions(&self) -> Vec<usize> {
        let Some(categories) = self.categories else {
            return Vec::new();
        };
        self.data
            .iter()
            .enumerate()
            .filter(|(_, value)| !categories.contains(value))
            .map(|(i, _)| i)
            .collect()
    }

    /// Lazily render each element as its label, or as its text.
    pub fn labelled_data(&self) -> impl Iterator<Item = Cow<'a, str>> + 'a
    where
        T: fmt::Display,
    {
        let labels = self.labels;
        self.data.iter().map(move |value| {
            match labels.and_then(|l| l.get_label(value)) {
                Some(label) => Cow::Borrowed(label),
                None => Cow::Owned(value.to_string()),
            }
        })
    }
}

impl<T: PartialEq> PartialEq for ReadOnlyVector<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: PartialEq> PartialEq<Vector<T>> for ReadOnlyVector<'_, T> {
    fn eq(&self, other: &Vector<T>) -> bool {
        self.data == other.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for ReadOnlyVector<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReadOnlyVector").field(&self.data).finish()
    }
}

impl<'a, T> From<&'a Vector<T>> for ReadOnlyVector<'a, T> {
    fn from(vector: &'a Vector<T>) -> Self {
        vector.as_read_only()
    }
}

impl<T> AsRef<[T]> for ReadOnlyVector<'_, T> {
    fn as_ref(&self) -> &[T] {
        self.data
    }
}

impl<T> Index<usize> for ReadOnlyVector<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<'a, T> IntoIterator for ReadOnlyVector<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
