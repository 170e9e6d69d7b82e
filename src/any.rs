use std::fmt;

use crate::{element::Element, error::TupleError, tuple::Tuple};

/// A tuple whose arity is picked at runtime, one variant per supported arity.
///
/// Built by [`from_slice`](Self::from_slice), which dispatches on slice
/// length. Two values compare equal only when they hold the same arity
/// variant with pairwise-equal elements; all derived operations delegate to
/// the underlying fixed-arity [`Tuple`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnyTuple<T: Element> {
    Empty(Tuple<T, 0>),
    One(Tuple<T, 1>),
    Two(Tuple<T, 2>),
    Three(Tuple<T, 3>),
    Four(Tuple<T, 4>),
    Five(Tuple<T, 5>),
    Six(Tuple<T, 6>),
    Seven(Tuple<T, 7>),
    Eight(Tuple<T, 8>),
    Nine(Tuple<T, 9>),
}

macro_rules! with_each_arity {
    ($self:expr, $t:ident => wrap $body:expr) => {
        match $self {
            AnyTuple::Empty($t) => AnyTuple::Empty($body),
            AnyTuple::One($t) => AnyTuple::One($body),
            AnyTuple::Two($t) => AnyTuple::Two($body),
            AnyTuple::Three($t) => AnyTuple::Three($body),
            AnyTuple::Four($t) => AnyTuple::Four($body),
            AnyTuple::Five($t) => AnyTuple::Five($body),
            AnyTuple::Six($t) => AnyTuple::Six($body),
            AnyTuple::Seven($t) => AnyTuple::Seven($body),
            AnyTuple::Eight($t) => AnyTuple::Eight($body),
            AnyTuple::Nine($t) => AnyTuple::Nine($body),
        }
    };
    ($self:expr, $t:ident => $body:expr) => {
        match $self {
            AnyTuple::Empty($t) => $body,
            AnyTuple::One($t) => $body,
            AnyTuple::Two($t) => $body,
            AnyTuple::Three($t) => $body,
            AnyTuple::Four($t) => $body,
            AnyTuple::Five($t) => $body,
            AnyTuple::Six($t) => $body,
            AnyTuple::Seven($t) => $body,
            AnyTuple::Eight($t) => $body,
            AnyTuple::Nine($t) => $body,
        }
    };
}

impl<T: Element> AnyTuple<T> {
    /// Builds the arity-matching tuple from a slice.
    ///
    /// The empty slice yields the empty tuple; slices longer than
    /// [`MAX_ARITY`](crate::MAX_ARITY) fail with [`TupleError::UnsupportedArity`].
    pub fn from_slice(vals: &[T]) -> Result<Self, TupleError> {
        let v = vals;
        Ok(match v.len() {
            0 => Self::Empty(Tuple::EMPTY),
            1 => Self::One(Tuple::from_array([v[0]])),
            2 => Self::Two(Tuple::from_array([v[0], v[1]])),
            3 => Self::Three(Tuple::from_array([v[0], v[1], v[2]])),
            4 => Self::Four(Tuple::from_array([v[0], v[1], v[2], v[3]])),
            5 => Self::Five(Tuple::from_array([v[0], v[1], v[2], v[3], v[4]])),
            6 => Self::Six(Tuple::from_array([v[0], v[1], v[2], v[3], v[4], v[5]])),
            7 => Self::Seven(Tuple::from_array([v[0], v[1], v[2], v[3], v[4], v[5], v[6]])),
            8 => Self::Eight(Tuple::from_array([
                v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7],
            ])),
            9 => Self::Nine(Tuple::from_array([
                v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7], v[8],
            ])),
            n => return Err(TupleError::UnsupportedArity(n)),
        })
    }

    pub fn arity(&self) -> usize {
        with_each_arity!(self, t => t.arity())
    }

    pub fn is_empty(&self) -> bool {
        with_each_arity!(self, t => t.is_empty())
    }

    /// See [`Tuple::min`].
    pub fn min(&self) -> Result<T, TupleError> {
        with_each_arity!(self, t => t.min())
    }

    /// See [`Tuple::max`].
    pub fn max(&self) -> Result<T, TupleError> {
        with_each_arity!(self, t => t.max())
    }

    /// See [`Tuple::median`].
    pub fn median(&self) -> Result<T, TupleError> {
        with_each_arity!(self, t => t.median())
    }

    /// See [`Tuple::sum`].
    pub fn sum(&self) -> T::Accum {
        with_each_arity!(self, t => t.sum())
    }

    /// See [`Tuple::average`].
    pub fn average(&self) -> Result<f64, TupleError> {
        with_each_arity!(self, t => t.average())
    }

    /// Returns a tuple of the same arity with the element order reversed.
    pub fn reverse(self) -> Self {
        with_each_arity!(self, t => wrap t.reverse())
    }

    /// Returns true iff any element equals `value`.
    pub fn contains(&self, value: T) -> bool {
        with_each_arity!(self, t => t.contains(value))
    }

    /// Returns a fresh copy of the elements as a growable vector.
    ///
    /// This is the array view at runtime arity; a fixed-size array would
    /// need the arity in its type, so only [`Tuple::to_array`] offers one.
    pub fn to_vec(&self) -> Vec<T> {
        with_each_arity!(self, t => t.to_vec())
    }

    /// Iterates the elements in positional order.
    pub fn iter(&self) -> std::vec::IntoIter<T> {
        self.to_vec().into_iter()
    }

    /// Invokes `f` once per element, in positional order.
    pub fn for_each(&self, f: impl FnMut(T)) {
        with_each_arity!(self, t => t.for_each(f))
    }
}

impl<T: Element> IntoIterator for AnyTuple<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Element> IntoIterator for &'a AnyTuple<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Element> TryFrom<&[T]> for AnyTuple<T> {
    type Error = TupleError;

    fn try_from(vals: &[T]) -> Result<Self, Self::Error> {
        Self::from_slice(vals)
    }
}

macro_rules! impl_from_tuple {
    ($($variant:ident => $n:literal),+ $(,)?) => {$(
        impl<T: Element> From<Tuple<T, $n>> for AnyTuple<T> {
            fn from(t: Tuple<T, $n>) -> Self {
                Self::$variant(t)
            }
        }
    )+};
}

impl_from_tuple!(
    Empty => 0,
    One => 1,
    Two => 2,
    Three => 3,
    Four => 4,
    Five => 5,
    Six => 6,
    Seven => 7,
    Eight => 8,
    Nine => 9,
);

impl<T: Element + fmt::Display> fmt::Display for AnyTuple<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_each_arity!(self, t => fmt::Display::fmt(t, f))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::{Tuple1, Tuple2, Tuple3, MAX_ARITY};

    #[test]
    fn empty_slice_yields_the_empty_tuple() {
        let t = AnyTuple::<i32>::from_slice(&[]).unwrap();
        assert_eq!(t, AnyTuple::Empty(Tuple::EMPTY));
        assert_eq!(t.arity(), 0);
        assert_eq!(t.to_string(), "[]");
    }

    #[test]
    fn singleton_slice_matches_of() {
        let t = AnyTuple::from_slice(&[5]).unwrap();
        assert_eq!(t, AnyTuple::from(Tuple1::of(5)));
        assert_eq!(t.arity(), 1);
    }

    #[test]
    fn dispatches_on_length_up_to_the_ceiling() {
        for n in 0..=MAX_ARITY {
            let vals: Vec<i32> = (0..n as i32).collect();
            let t = AnyTuple::from_slice(&vals).unwrap();
            assert_eq!(t.arity(), n);
            assert_eq!(t.to_vec(), vals);
        }
    }

    #[test]
    fn rejects_slices_past_the_ceiling() {
        let vals = [0i32; 10];
        assert_eq!(
            AnyTuple::from_slice(&vals),
            Err(TupleError::UnsupportedArity(10))
        );
        assert_eq!(
            TupleError::UnsupportedArity(10).to_string(),
            "arity 10 exceeds the supported maximum of 9"
        );
    }

    #[test]
    fn try_from_delegates() {
        let t = AnyTuple::try_from([1, 2].as_slice()).unwrap();
        assert_eq!(t, AnyTuple::from(Tuple2::of(1, 2)));
    }

    #[test]
    fn operations_delegate_to_the_fixed_arity_tuple() {
        let t = AnyTuple::from_slice(&[3, 1, 2]).unwrap();
        assert_eq!(t.min(), Ok(1));
        assert_eq!(t.max(), Ok(3));
        assert_eq!(t.median(), Ok(2));
        assert_eq!(t.sum(), 6i64);
        assert_eq!(t.average(), Ok(2.0));
        assert!(t.contains(1));
        assert!(!t.contains(9));
        assert_eq!(t.to_string(), "[3, 1, 2]");

        let mut seen = Vec::new();
        t.for_each(|v| seen.push(v));
        assert_eq!(seen, vec![3, 1, 2]);
    }

    #[test]
    fn iteration_yields_elements_in_order() {
        let t = AnyTuple::from_slice(&[3, 1, 2]).unwrap();
        assert_eq!(t.iter().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(t.into_iter().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!((&t).into_iter().sum::<i32>(), 6);

        let empty = AnyTuple::<i32>::from_slice(&[]).unwrap();
        assert_eq!(empty.iter().count(), 0);
    }

    #[test]
    fn reverse_preserves_the_arity_variant() {
        let t = AnyTuple::from_slice(&[3, 1, 2]).unwrap();
        assert_eq!(t.reverse(), AnyTuple::from(Tuple3::of(2, 1, 3)));
        assert_eq!(t.reverse().reverse(), t);
    }

    #[test]
    fn empty_variant_statistics_fail() {
        let t = AnyTuple::<i32>::from_slice(&[]).unwrap();
        assert_eq!(t.min(), Err(TupleError::Empty));
        assert_eq!(t.average(), Err(TupleError::Empty));
        assert_eq!(t.sum(), 0i64);
        assert_eq!(TupleError::Empty.to_string(), "empty tuple has no elements");
    }

    #[test]
    fn different_arities_never_compare_equal() {
        let one = AnyTuple::from_slice(&[1]).unwrap();
        let two = AnyTuple::from_slice(&[1, 1]).unwrap();
        assert_ne!(one, two);
    }
}
