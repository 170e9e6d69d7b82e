//! Per-arity surface of the tuple family: `of` factories, positional
//! accessors, and the destructuring extras for pairs and triples.

use crate::{element::Element, tuple::Tuple};

/// The empty tuple.
pub type Tuple0<T> = Tuple<T, 0>;
/// Arity-1 tuple.
pub type Tuple1<T> = Tuple<T, 1>;
/// Arity-2 tuple.
pub type Tuple2<T> = Tuple<T, 2>;
/// Arity-3 tuple.
pub type Tuple3<T> = Tuple<T, 3>;
/// Arity-4 tuple.
pub type Tuple4<T> = Tuple<T, 4>;
/// Arity-5 tuple.
pub type Tuple5<T> = Tuple<T, 5>;
/// Arity-6 tuple.
pub type Tuple6<T> = Tuple<T, 6>;
/// Arity-7 tuple.
pub type Tuple7<T> = Tuple<T, 7>;
/// Arity-8 tuple. Consider a named-field struct instead.
pub type Tuple8<T> = Tuple<T, 8>;
/// Arity-9 tuple, the family's ceiling. Consider a named-field struct instead.
pub type Tuple9<T> = Tuple<T, 9>;

macro_rules! impl_arity {
    ($(#[$of_doc:meta])+ $n:literal; $($field:ident : $idx:tt),+) => {
        impl<T: Element> Tuple<T, $n> {
            $(#[$of_doc])+
            #[allow(clippy::too_many_arguments)]
            pub const fn of($($field: T),+) -> Self {
                Self::from_array([$($field),+])
            }

            $(
                #[inline(always)]
                pub fn $field(&self) -> T {
                    self[$idx]
                }
            )+
        }
    };
}

impl_arity! {
    /// Builds the single-element tuple.
    1; first: 0
}

impl_arity! {
    /// Builds the pair from its elements, in order.
    2; first: 0, second: 1
}

impl_arity! {
    /// Builds the triple from its elements, in order.
    3; first: 0, second: 1, third: 2
}

impl_arity! {
    /// Builds the arity-4 tuple from its elements, in order.
    4; first: 0, second: 1, third: 2, fourth: 3
}

impl_arity! {
    /// Builds the arity-5 tuple from its elements, in order.
    5; first: 0, second: 1, third: 2, fourth: 3, fifth: 4
}

impl_arity! {
    /// Builds the arity-6 tuple from its elements, in order.
    6; first: 0, second: 1, third: 2, fourth: 3, fifth: 4, sixth: 5
}

impl_arity! {
    /// Builds the arity-7 tuple from its elements, in order.
    7; first: 0, second: 1, third: 2, fourth: 3, fifth: 4, sixth: 5, seventh: 6
}

impl_arity! {
    /// Builds the arity-8 tuple from its elements, in order.
    ///
    /// Groups this wide are usually better served by a named-field struct;
    /// the factory stays supported for completeness.
    8; first: 0, second: 1, third: 2, fourth: 3, fifth: 4, sixth: 5, seventh: 6,
       eighth: 7
}

impl_arity! {
    /// Builds the arity-9 tuple from its elements, in order.
    ///
    /// Groups this wide are usually better served by a named-field struct;
    /// the factory stays supported for completeness. Nine is the family's
    /// ceiling.
    9; first: 0, second: 1, third: 2, fourth: 3, fifth: 4, sixth: 5, seventh: 6,
       eighth: 7, ninth: 8
}

impl<T: Element> Tuple<T, 2> {
    /// Invokes `f` with both elements at once.
    pub fn accept(&self, f: impl FnOnce(T, T)) {
        f(self[0], self[1]);
    }

    /// Destructures the pair through `f`.
    pub fn map<R>(&self, f: impl FnOnce(T, T) -> R) -> R {
        f(self[0], self[1])
    }

    /// Returns the pair iff `predicate` holds over both elements.
    pub fn filter(&self, predicate: impl FnOnce(T, T) -> bool) -> Option<Self> {
        predicate(self[0], self[1]).then_some(*self)
    }
}

impl<T: Element> Tuple<T, 3> {
    /// Invokes `f` with all three elements at once.
    pub fn accept(&self, f: impl FnOnce(T, T, T)) {
        f(self[0], self[1], self[2]);
    }

    /// Destructures the triple through `f`.
    pub fn map<R>(&self, f: impl FnOnce(T, T, T) -> R) -> R {
        f(self[0], self[1], self[2])
    }

    /// Returns the triple iff `predicate` holds over all three elements.
    pub fn filter(&self, predicate: impl FnOnce(T, T, T) -> bool) -> Option<Self> {
        predicate(self[0], self[1], self[2]).then_some(*self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn factories_preserve_positional_order() {
        assert!(Tuple0::<i32>::EMPTY.is_empty());
        assert_eq!(Tuple1::of(1).to_array(), [1]);
        assert_eq!(Tuple5::of(1, 2, 3, 4, 5).to_array(), [1, 2, 3, 4, 5]);
        assert_eq!(
            Tuple9::of(1, 2, 3, 4, 5, 6, 7, 8, 9).to_array(),
            [1, 2, 3, 4, 5, 6, 7, 8, 9]
        );
    }

    #[test]
    fn accessors_are_positional() {
        let t = Tuple3::of(10, 20, 30);
        assert_eq!(t.first(), 10);
        assert_eq!(t.second(), 20);
        assert_eq!(t.third(), 30);

        let wide = Tuple9::of(1, 2, 3, 4, 5, 6, 7, 8, 9);
        assert_eq!(wide.first(), 1);
        assert_eq!(wide.fifth(), 5);
        assert_eq!(wide.ninth(), 9);
    }

    #[test]
    fn high_arity_factories_stay_supported() {
        let t = Tuple8::of(1, 2, 3, 4, 5, 6, 7, 8);
        assert_eq!(t.arity(), 8);
        assert_eq!(t.eighth(), 8);
    }

    #[test]
    fn pair_accept_sees_both_elements() {
        let mut seen = (0, 0);
        Tuple2::of(4, 7).accept(|a, b| seen = (a, b));
        assert_eq!(seen, (4, 7));
    }

    #[test]
    fn pair_map_destructures() {
        assert_eq!(Tuple2::of(4, 7).map(|a, b| a * b), 28);
    }

    #[test]
    fn pair_filter_keeps_or_drops() {
        let t = Tuple2::of(4, 7);
        assert_eq!(t.filter(|a, b| a < b), Some(t));
        assert_eq!(t.filter(|a, b| a > b), None);
    }

    #[test]
    fn triple_extras_destructure_all_three() {
        let t = Tuple3::of(1, 2, 3);
        assert_eq!(t.map(|a, b, c| a + b + c), 6);
        assert_eq!(t.filter(|a, b, c| a < b && b < c), Some(t));
        assert_eq!(t.filter(|a, _, c| a > c), None);

        let mut sum = 0;
        t.accept(|a, b, c| sum = a + b + c);
        assert_eq!(sum, 6);
    }
}
