//! Method-call syntax for the primitives.

use navec_core::error::Result;
use navec_core::num::Number;
use navec_core::vector::Vector;
use num_traits::Float;

use crate::{arithmetic, compare, reduce};

/// Primitives as methods on anything that dereferences to a slice of numbers:
/// `Vec<T>`, arrays, [`Vector`], [`Series`], [`ReadOnlyVector`] and strided
/// views.
///
/// Extrema are called `minimum`/`maximum` so they do not collide with
/// [`Ord::min`].
///
/// ```rust
/// use navec_core::Vector;
/// use navec_primitives::VectorPrimitives;
///
/// let a = Vector::from_vec(vec![1.0, 2.0, 3.0]);
/// let b = vec![0.5, 0.5, 0.5];
///
/// let total = a.add(&b).unwrap();
/// assert_eq!(total.as_slice(), &[1.5, 2.5, 3.5]);
/// assert_eq!(a.mean().unwrap(), 2.0);
/// ```
///
/// [`Series`]: navec_core::Series
/// [`ReadOnlyVector`]: navec_core::ReadOnlyVector
pub trait VectorPrimitives<T: Number>: AsRef<[T]> {
    /// See [`arithmetic::add`].
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ.
    fn add<R: AsRef<[T]> + ?Sized>(&self, rhs: &R) -> Result<Vector<T>> {
        arithmetic::add(self.as_ref(), rhs.as_ref()).map(Vector::from_vec)
    }

    /// See [`arithmetic::subtract`].
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ.
    fn subtract<R: AsRef<[T]> + ?Sized>(&self, rhs: &R) -> Result<Vector<T>> {
        arithmetic::subtract(self.as_ref(), rhs.as_ref()).map(Vector::from_vec)
    }

    /// See [`arithmetic::multiply`].
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ.
    fn multiply<R: AsRef<[T]> + ?Sized>(&self, rhs: &R) -> Result<Vector<T>> {
        arithmetic::multiply(self.as_ref(), rhs.as_ref()).map(Vector::from_vec)
    }

    /// See [`arithmetic::divide`].
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ or a divisor is zero.
    fn divide<R: AsRef<[T]> + ?Sized>(&self, rhs: &R) -> Result<Vector<T>> {
        arithmetic::divide(self.as_ref(), rhs.as_ref()).map(Vector::from_vec)
    }

    /// See [`arithmetic::add_scalar`].
    fn add_scalar(&self, scalar: T) -> Vector<T> {
        Vector::from_vec(arithmetic::add_scalar(self.as_ref(), scalar))
    }

    /// See [`arithmetic::subtract_scalar`].
    fn subtract_scalar(&self, scalar: T) -> Vector<T> {
        Vector::from_vec(arithmetic::subtract_scalar(self.as_ref(), scalar))
    }

    /// See [`arithmetic::multiply_scalar`].
    fn multiply_scalar(&self, scalar: T) -> Vector<T> {
        Vector::from_vec(arithmetic::multiply_scalar(self.as_ref(), scalar))
    }

    /// See [`arithmetic::divide_scalar`].
    ///
    /// # Errors
    ///
    /// Returns an error if `scalar` is zero.
    fn divide_scalar(&self, scalar: T) -> Result<Vector<T>> {
        arithmetic::divide_scalar(self.as_ref(), scalar).map(Vector::from_vec)
    }

    /// See [`arithmetic::add_in_place`].
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ.
    fn add_in_place<R: AsRef<[T]> + ?Sized>(&mut self, rhs: &R) -> Result<()>
    where
        Self: AsMut<[T]>,
    {
        arithmetic::add_in_place(self.as_mut(), rhs.as_ref())
    }

    /// See [`arithmetic::subtract_in_place`].
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ.
    fn subtract_in_place<R: AsRef<[T]> + ?Sized>(&mut self, rhs: &R) -> Result<()>
    where
        Self: AsMut<[T]>,
    {
        arithmetic::subtract_in_place(self.as_mut(), rhs.as_ref())
    }

    /// See [`arithmetic::multiply_in_place`].
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ.
    fn multiply_in_place<R: AsRef<[T]> + ?Sized>(&mut self, rhs: &R) -> Result<()>
    where
        Self: AsMut<[T]>,
    {
        arithmetic::multiply_in_place(self.as_mut(), rhs.as_ref())
    }

    /// See [`arithmetic::divide_in_place`].
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ or a divisor is zero.
    fn divide_in_place<R: AsRef<[T]> + ?Sized>(&mut self, rhs: &R) -> Result<()>
    where
        Self: AsMut<[T]>,
    {
        arithmetic::divide_in_place(self.as_mut(), rhs.as_ref())
    }

    /// See [`compare::less_than`].
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ.
    fn less_than<R: AsRef<[T]> + ?Sized>(&self, rhs: &R) -> Result<Vector<bool>> {
        compare::less_than(self.as_ref(), rhs.as_ref()).map(Vector::from_vec)
    }

    /// See [`compare::greater_than`].
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ.
    fn greater_than<R: AsRef<[T]> + ?Sized>(&self, rhs: &R) -> Result<Vector<bool>> {
        compare::greater_than(self.as_ref(), rhs.as_ref()).map(Vector::from_vec)
    }

    /// See [`compare::equals`].
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ.
    fn equals<R: AsRef<[T]> + ?Sized>(&self, rhs: &R) -> Result<Vector<bool>> {
        compare::equals(self.as_ref(), rhs.as_ref()).map(Vector::from_vec)
    }

    /// See [`reduce::sum`].
    fn sum(&self) -> T {
        reduce::sum(self.as_ref())
    }

    /// See [`reduce::sum_checked`].
    ///
    /// # Errors
    ///
    /// Returns an error on integer overflow.
    fn sum_checked(&self) -> Result<T> {
        reduce::sum_checked(self.as_ref())
    }

    /// See [`reduce::sum_with`].
    fn sum_with(&self, strategy: reduce::Summation) -> T
    where
        T: Float,
    {
        reduce::sum_with(self.as_ref(), strategy)
    }

    /// See [`reduce::mean`].
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty.
    fn mean(&self) -> Result<T> {
        reduce::mean(self.as_ref())
    }

    /// See [`reduce::mean_as`].
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty.
    fn mean_as<R: Number + Float>(&self) -> Result<R> {
        reduce::mean_as(self.as_ref())
    }

    /// See [`reduce::variance`].
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty.
    fn variance(&self) -> Result<T>
    where
        T: Float,
    {
        reduce::variance(self.as_ref())
    }

    /// See [`reduce::sample_variance`].
    ///
    /// # Errors
    ///
    /// Returns an error if the input has fewer than two elements.
    fn sample_variance(&self) -> Result<T>
    where
        T: Float,
    {
        reduce::sample_variance(self.as_ref())
    }

    /// See [`reduce::min`].
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty.
    fn minimum(&self) -> Result<T> {
        reduce::min(self.as_ref())
    }

    /// See [`reduce::max`].
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty.
    fn maximum(&self) -> Result<T> {
        reduce::max(self.as_ref())
    }
}

impl<T: Number, V: AsRef<[T]> + ?Sized> VectorPrimitives<T> for V {}

#[cfg(test)]
mod tests {
    use super::*;
    use navec_core::{Series, StridedMemory};

    #[test]
    fn test_methods_on_vector() {
        let v = Vector::from_vec(vec![1, 2, 3, 4]);
        assert_eq!(v.sum(), 10);
        assert_eq!(v.minimum(), Ok(1));
        assert_eq!(v.maximum(), Ok(4));
        assert_eq!(v.mean_as::<f64>(), Ok(2.5));
        assert_eq!(v.multiply_scalar(2).as_slice(), &[2, 4, 6, 8]);
        assert_eq!(v.less_than(&[2, 2, 2, 2]).unwrap().as_slice(), &[true, false, false, false]);
    }

    #[test]
    fn test_methods_on_series_and_read_only() {
        let s = Series::new("x", vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(s.variance(), Ok(2.0));
        assert_eq!(s.as_read_only().sample_variance(), Ok(2.5));
    }

    #[test]
    fn test_methods_on_strided_memory() {
        let m = StridedMemory::new(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        assert_eq!(m.sum(), 10.0);
    }

    #[test]
    fn test_in_place_methods() {
        let mut v = Vector::from_vec(vec![10, 20]);
        v.subtract_in_place(&[1, 2]).unwrap();
        assert_eq!(v.as_slice(), &[9, 18]);
        v.divide_in_place(&[3, 3]).unwrap();
        assert_eq!(v.as_slice(), &[3, 6]);
        assert!(v.divide_in_place(&[1, 0]).is_err());
        assert_eq!(v.as_slice(), &[3, 6]);
    }
}
