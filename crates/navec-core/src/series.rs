//! Named vectors.
//!
//! A [`Series`] is a [`Vector`] with a name, the unit a [`DataFrame`]
//! column is built from.
//!
//! [`DataFrame`]: crate::DataFrame

use core::fmt;
use core::ops::{Index, IndexMut};
use core::slice;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::vector::{ReadOnlyVector, Vector};

/// A named vector of values.
///
/// The series length is always the length of its vector.
///
/// # Example
///
/// ```rust
/// use navec_core::Series;
///
/// let mut close = Series::new("close", vec![100.0, 101.5]);
/// close.push(99.8);
///
/// assert_eq!(close.name(), "close");
/// assert_eq!(close.len(), 3);
/// assert_eq!(close.last(), Some(&99.8));
/// assert_eq!(close.tail(2), &[101.5, 99.8]);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: Serialize + PartialEq",
        deserialize = "T: Deserialize<'de> + PartialEq + fmt::Display + fmt::Debug"
    ))
)]
pub struct Series<T> {
    name: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    vector: Vector<T>,
}

impl<T> Series<T> {
    /// Create a series from a name and a buffer.
    #[must_use]
    pub fn new(name: impl Into<String>, data: Vec<T>) -> Self {
        Self::from_vector(name, Vector::from_vec(data))
    }

    /// Create an empty series.
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    /// Create an empty series with reserved capacity.
    #[must_use]
    pub fn with_capacity(name: impl Into<String>, capacity: usize) -> Self {
        Self::new(name, Vec::with_capacity(capacity))
    }

    /// Name an existing vector.
    #[must_use]
    pub fn from_vector(name: impl Into<String>, vector: Vector<T>) -> Self {
        Self {
            name: name.into(),
            vector,
        }
    }

    /// The series name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the series.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The underlying vector.
    #[must_use]
    pub fn vector(&self) -> &Vector<T> {
        &self.vector
    }

    /// The underlying vector, mutably.
    pub fn vector_mut(&mut self) -> &mut Vector<T> {
        &mut self.vector
    }

    /// Split into name and vector.
    #[must_use]
    pub fn into_parts(self) -> (String, Vector<T>) {
        (self.name, self.vector)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vector.len()
    }

    /// Returns `true` if the series contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vector.is_empty()
    }

    /// The data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.vector.as_slice()
    }

    /// The data as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.vector.as_mut_slice()
    }

    /// Element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.vector.get(index)
    }

    /// First element, if any.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Last element, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// The first `n` elements, or all of them if there are fewer.
    #[must_use]
    pub fn head(&self, n: usize) -> &[T] {
        let end = n.min(self.len());
        &self.as_slice()[..end]
    }

    /// The last `n` elements, or all of them if there are fewer.
    #[must_use]
    pub fn tail(&self, n: usize) -> &[T] {
        let start = self.len().saturating_sub(n);
        &self.as_slice()[start..]
    }

    /// Append a value.
    pub fn push(&mut self, value: T) {
        self.vector.push(value);
    }

    /// Iterate over the data.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.vector.iter()
    }

    /// Borrow the data and metadata read-only.
    #[must_use]
    pub fn as_read_only(&self) -> ReadOnlyVector<'_, T> {
        self.vector.as_read_only()
    }

    /// Apply a function to each element, keeping the name.
    #[must_use]
    pub fn map<U, F>(&self, f: F) -> Series<U>
    where
        F: FnMut(&T) -> U,
    {
        Series::new(self.name.clone(), self.iter().map(f).collect())
    }
}

impl<T: PartialEq> PartialEq for Series<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.vector == other.vector
    }
}

impl<T: fmt::Display> fmt::Display for Series<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [", self.name)?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T> AsRef<[T]> for Series<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Series<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for Series<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.vector[index]
    }
}

impl<T> IndexMut<usize> for Series<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.vector[index]
    }
}

impl<'a, T> IntoIterator for &'a Series<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
