//! Strided multidimensional views over flat buffers.
//!
//! A single [`StridedView`] type is parameterized by its storage, giving four
//! flavours that share one indexing implementation:
//!
//! | Alias | Storage | Ownership | Mutability |
//! |---|---|---|---|
//! | [`StridedMemory`] | `Vec<T>` | owned | mutable |
//! | [`ReadOnlyStridedMemory`] | `Arc<Vec<T>>` | shared | read-only |
//! | [`StridedSpanMut`] | `&mut [T]` | borrowed | mutable |
//! | [`StridedSpan`] | `&[T]` | borrowed | read-only |
//!
//! The buffer length always equals the product of the shape.
//!
//! # Example
//!
//! ```rust
//! use navec_core::view::StridedMemory;
//!
//! let mut grid = StridedMemory::new(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
//! assert_eq!(grid[[1, 0]], 4);
//! grid[[0, 2]] = 30;
//! assert_eq!(grid.as_slice(), &[1, 2, 30, 4, 5, 6]);
//!
//! let shared = grid.into_read_only();
//! let other = shared.clone();
//! assert_eq!(other[[0, 2]], 30);
//! ```

use core::ops::{Index, IndexMut};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{NumericsError, Result};
use crate::shape::{check_shape, element_count, offset_of, strides_for, Layout};

/// Read access to a contiguous element buffer.
pub trait Storage {
    /// Element type.
    type Elem;

    /// The buffer as a slice.
    fn as_slice(&self) -> &[Self::Elem];
}

/// Write access to a contiguous element buffer.
pub trait StorageMut: Storage {
    /// The buffer as a mutable slice.
    fn as_mut_slice(&mut self) -> &mut [Self::Elem];
}

impl<T> Storage for Vec<T> {
    type Elem = T;

    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> StorageMut for Vec<T> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Storage for Arc<Vec<T>> {
    type Elem = T;

    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> Storage for &[T] {
    type Elem = T;

    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> Storage for &mut [T] {
    type Elem = T;

    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> StorageMut for &mut [T] {
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

/// A multidimensional view over a flat buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct StridedView<S> {
    storage: S,
    shape: Vec<usize>,
    strides: Vec<usize>,
    layout: Layout,
}

/// Owned, mutable strided memory.
pub type StridedMemory<T> = StridedView<Vec<T>>;
/// Owned, read-only strided memory that can be cloned and shared cheaply.
pub type ReadOnlyStridedMemory<T> = StridedView<Arc<Vec<T>>>;
/// Borrowed, mutable strided view.
pub type StridedSpanMut<'a, T> = StridedView<&'a mut [T]>;
/// Borrowed, read-only strided view.
pub type StridedSpan<'a, T> = StridedView<&'a [T]>;

impl<S: Storage> StridedView<S> {
    /// Create a row-major view.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::ShapeMismatch`] if the buffer length is not
    /// the product of `shape`.
    pub fn new(storage: S, shape: &[usize]) -> Result<Self> {
        Self::with_layout(storage, shape, Layout::RowMajor)
    }

    /// Create a view with an explicit layout.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::ShapeMismatch`] if the buffer length is not
    /// the product of `shape`.
    pub fn with_layout(storage: S, shape: &[usize], layout: Layout) -> Result<Self> {
        check_shape("buffer", shape, storage.as_slice().len())?;
        Ok(Self::from_parts(storage, shape.to_vec(), layout))
    }

    fn from_parts(storage: S, shape: Vec<usize>, layout: Layout) -> Self {
        let strides = strides_for(&shape, layout);
        Self {
            storage,
            shape,
            strides,
            layout,
        }
    }

    /// Per-dimension extents.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Per-dimension stride multipliers.
    #[must_use]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Index-to-offset layout.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Number of dimensions.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.as_slice().len()
    }

    /// Returns `true` if the view holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The underlying flat buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[S::Elem] {
        self.storage.as_slice()
    }

    /// Flat offset of `index`, or `None` if it is out of bounds.
    #[must_use]
    pub fn offset(&self, index: &[usize]) -> Option<usize> {
        offset_of(&self.shape, &self.strides, index)
    }

    /// Element at a multidimensional index.
    #[must_use]
    pub fn get(&self, index: &[usize]) -> Option<&S::Elem> {
        let offset = self.offset(index)?;
        self.storage.as_slice().get(offset)
    }

    /// Iterate over elements in buffer order.
    pub fn iter(&self) -> core::slice::Iter<'_, S::Elem> {
        self.storage.as_slice().iter()
    }

    /// Borrow as a read-only span without copying.
    #[must_use]
    pub fn as_span(&self) -> StridedSpan<'_, S::Elem> {
        StridedView {
            storage: self.storage.as_slice(),
            shape: self.shape.clone(),
            strides: self.strides.clone(),
            layout: self.layout,
        }
    }

    /// Consume the view, returning its storage.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn out_of_bounds(&self, index: &[usize]) -> ! {
        panic!(
            "index {index:?} out of bounds for shape {:?}",
            self.shape
        )
    }
}

impl<S: StorageMut> StridedView<S> {
    /// Mutable element at a multidimensional index.
    pub fn get_mut(&mut self, index: &[usize]) -> Option<&mut S::Elem> {
        let offset = self.offset(index)?;
        self.storage.as_mut_slice().get_mut(offset)
    }

    /// The underlying flat buffer, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [S::Elem] {
        self.storage.as_mut_slice()
    }

    /// Borrow as a mutable span without copying.
    pub fn as_span_mut(&mut self) -> StridedSpanMut<'_, S::Elem> {
        StridedView {
            storage: self.storage.as_mut_slice(),
            shape: self.shape.clone(),
            strides: self.strides.clone(),
            layout: self.layout,
        }
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: S::Elem)
    where
        S::Elem: Clone,
    {
        self.storage.as_mut_slice().fill(value);
    }
}

impl<T> StridedMemory<T> {
    /// Allocate default-filled memory for `shape`.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::Overflow`] if the element count overflows.
    pub fn with_dimensions(shape: &[usize]) -> Result<Self>
    where
        T: Default + Clone,
    {
        let len = element_count(shape)?;
        Ok(Self::from_parts(vec![T::default(); len], shape.to_vec(), Layout::RowMajor))
    }

    /// Allocate memory for `shape`, producing each element from its flat
    /// offset instead of writing a default first.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::Overflow`] if the element count overflows.
    pub fn create_uninitialized(shape: &[usize], init: impl FnMut(usize) -> T) -> Result<Self> {
        let len = element_count(shape)?;
        let data = (0..len).map(init).collect();
        Ok(Self::from_parts(data, shape.to_vec(), Layout::RowMajor))
    }

    /// Copy a rectangular jagged array into row-major memory.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::ShapeMismatch`] if the rows differ in length.
    pub fn from_jagged(rows: &[Vec<T>]) -> Result<Self>
    where
        T: Clone,
    {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(NumericsError::ShapeMismatch {
                    name: "rows",
                    shape: vec![rows.len(), cols],
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self::from_parts(data, vec![rows.len(), cols], Layout::RowMajor))
    }

    /// Convert into shared read-only memory without copying elements.
    #[must_use]
    pub fn into_read_only(self) -> ReadOnlyStridedMemory<T> {
        StridedView {
            storage: Arc::new(self.storage),
            shape: self.shape,
            strides: self.strides,
            layout: self.layout,
        }
    }

    /// Consume the memory, returning the flat buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.storage
    }
}

impl<'a, T> StridedSpanMut<'a, T> {
    /// Give up write access, keeping the same borrow.
    #[must_use]
    pub fn into_read_only(self) -> StridedSpan<'a, T> {
        StridedView {
            storage: &*self.storage,
            shape: self.shape,
            strides: self.strides,
            layout: self.layout,
        }
    }
}

impl<'a, T> StridedSpan<'a, T> {
    /// View a 2-D array as a row-major span.
    #[must_use]
    pub fn from_array2<const R: usize, const C: usize>(data: &'a [[T; C]; R]) -> Self {
        Self::from_parts(data.as_flattened(), vec![R, C], Layout::RowMajor)
    }

    /// View a 3-D array as a row-major span.
    #[must_use]
    pub fn from_array3<const D0: usize, const D1: usize, const D2: usize>(
        data: &'a [[[T; D2]; D1]; D0],
    ) -> Self {
        Self::from_parts(
            data.as_flattened().as_flattened(),
            vec![D0, D1, D2],
            Layout::RowMajor,
        )
    }

    /// View a 4-D array as a row-major span.
    #[must_use]
    pub fn from_array4<const D0: usize, const D1: usize, const D2: usize, const D3: usize>(
        data: &'a [[[[T; D3]; D2]; D1]; D0],
    ) -> Self {
        Self::from_parts(
            data.as_flattened().as_flattened().as_flattened(),
            vec![D0, D1, D2, D3],
            Layout::RowMajor,
        )
    }
}

impl<S: Storage, const N: usize> Index<[usize; N]> for StridedView<S> {
    type Output = S::Elem;

    fn index(&self, index: [usize; N]) -> &S::Elem {
        match self.get(&index) {
            Some(value) => value,
            None => self.out_of_bounds(&index),
        }
    }
}

impl<S: StorageMut, const N: usize> IndexMut<[usize; N]> for StridedView<S> {
    fn index_mut(&mut self, index: [usize; N]) -> &mut S::Elem {
        match self.offset(&index) {
            Some(offset) => &mut self.storage.as_mut_slice()[offset],
            None => self.out_of_bounds(&index),
        }
    }
}

impl<S: Storage> Index<&[usize]> for StridedView<S> {
    type Output = S::Elem;

    fn index(&self, index: &[usize]) -> &S::Elem {
        match self.get(index) {
            Some(value) => value,
            None => self.out_of_bounds(index),
        }
    }
}

impl<S: StorageMut> IndexMut<&[usize]> for StridedView<S> {
    fn index_mut(&mut self, index: &[usize]) -> &mut S::Elem {
        match self.offset(index) {
            Some(offset) => &mut self.storage.as_mut_slice()[offset],
            None => self.out_of_bounds(index),
        }
    }
}

impl<S: Storage> AsRef<[S::Elem]> for StridedView<S> {
    fn as_ref(&self) -> &[S::Elem] {
        self.storage.as_slice()
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for StridedMemory<T> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> core::result::Result<Ser::Ok, Ser::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("StridedMemory", 3)?;
        state.serialize_field("shape", &self.shape)?;
        state.serialize_field("layout", &self.layout)?;
        state.serialize_field("data", &self.storage)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>> Deserialize<'de> for StridedMemory<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Repr<T> {
            shape: Vec<usize>,
            #[serde(default)]
            layout: Layout,
            data: Vec<T>,
        }

        let repr = Repr::<T>::deserialize(deserializer)?;
        Self::with_layout(repr.data, &repr.shape, repr.layout).map_err(serde::de::Error::custom)
    }
}
