use std::fmt;

use derive_more::{From, Index, Into};
use itertools::Itertools;

use crate::{element::Element, error::TupleError, stats};

/// Largest arity the family supports.
///
/// A deliberate design ceiling: groups wider than this are better served by a
/// named-field struct than by positional access.
pub const MAX_ARITY: usize = 9;

/// An immutable ordered group of `N` numeric values of type `T`.
///
/// One const-generic type covers the whole arity-0 through arity-9 family;
/// per-arity `of` factories and positional accessors are layered on through
/// the [`Tuple0`](crate::Tuple0) through [`Tuple9`](crate::Tuple9) aliases.
/// Element order is significant and preserved by every operation except
/// [`reverse`](Self::reverse).
///
/// The representation is the backing array itself, so every array view is a
/// stack copy and anything handed out publicly is already a defensive copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Index, From, Into)]
pub struct Tuple<T: Element, const N: usize>([T; N]);

impl<T: Element, const N: usize> Tuple<T, N> {
    /// Builds the tuple directly from its backing array.
    #[inline]
    pub const fn from_array(vals: [T; N]) -> Self {
        Self(vals)
    }

    /// The number of elements this tuple holds.
    #[inline]
    pub const fn arity(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the smallest element.
    ///
    /// Fails with [`TupleError::Empty`] on the empty tuple.
    pub fn min(&self) -> Result<T, TupleError> {
        stats::min(&self.0).ok_or(TupleError::Empty)
    }

    /// Returns the largest element.
    ///
    /// Fails with [`TupleError::Empty`] on the empty tuple.
    pub fn max(&self) -> Result<T, TupleError> {
        stats::max(&self.0).ok_or(TupleError::Empty)
    }

    /// Returns the median element under the element type's total ordering.
    ///
    /// For even arities this is the lower-middle element of the sorted
    /// sequence (index `(N - 1) / 2`); the two middle values are never
    /// averaged. Fails with [`TupleError::Empty`] on the empty tuple.
    pub fn median(&self) -> Result<T, TupleError> {
        stats::median(&self.0).ok_or(TupleError::Empty)
    }

    /// Sums the elements into the widening accumulator type.
    ///
    /// Total over all arities: the empty tuple sums to zero.
    pub fn sum(&self) -> T::Accum {
        stats::sum(&self.0)
    }

    /// Returns the arithmetic mean of the elements as `f64`.
    ///
    /// Fails with [`TupleError::Empty`] on the empty tuple.
    pub fn average(&self) -> Result<f64, TupleError> {
        stats::mean(&self.0).ok_or(TupleError::Empty)
    }

    /// Returns a tuple with the element order reversed.
    pub fn reverse(mut self) -> Self {
        self.0.reverse();
        self
    }

    /// Returns true iff any element equals `value`.
    pub fn contains(&self, value: T) -> bool {
        self.0.contains(&value)
    }

    /// Returns a fresh copy of the elements as an array.
    #[inline]
    pub fn to_array(&self) -> [T; N] {
        self.0
    }

    /// Returns a fresh copy of the elements as a growable vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.0.to_vec()
    }

    /// Iterates the elements in positional order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.0.iter().copied()
    }

    /// Invokes `f` once per element, in positional order.
    ///
    /// Panics raised by `f` propagate to the caller unsuppressed.
    pub fn for_each(&self, f: impl FnMut(T)) {
        self.0.iter().copied().for_each(f);
    }

    /// Returns a tuple with `f` applied to every element, order preserved.
    pub fn map_elements(mut self, mut f: impl FnMut(T) -> T) -> Self {
        for v in &mut self.0 {
            *v = f(*v);
        }
        self
    }
}

impl<T: Element> Tuple<T, 0> {
    /// The empty tuple. Zero-sized, so every arity-0 value is this value.
    pub const EMPTY: Self = Self([]);
}

impl<T: Element> Default for Tuple<T, 0> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<T: Element, const N: usize> IntoIterator for Tuple<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: Element, const N: usize> IntoIterator for &'a Tuple<T, N> {
    type Item = T;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

impl<T: Element + fmt::Display, const N: usize> fmt::Display for Tuple<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().format(", "))
    }
}
