use std::{cmp::Ordering, fmt::Debug};

use num_traits::{Num, ToPrimitive};

/// The bound every tuple element type satisfies.
///
/// Implemented for the primitive numeric family: `u8`/`i8` through
/// `u64`/`i64`, plus `f32` and `f64`. Each implementation pins the widening
/// accumulator used by sums and a total ordering used by min/max/median.
pub trait Element: Num + PartialOrd + Copy + Debug {
    /// Accumulator wide enough that no supported tuple's sum can overflow.
    type Accum: Num + ToPrimitive + Copy + Debug;

    /// Widens an element into the accumulator type, losslessly for integers.
    fn widen(self) -> Self::Accum;

    /// Total ordering over the element type.
    ///
    /// Integers defer to `Ord`; floats use IEEE 754 `totalOrder`, so NaN
    /// sorts after every finite value instead of poisoning comparisons.
    fn total_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_element_int {
    ($($t:ty => $acc:ty),* $(,)?) => {$(
        impl Element for $t {
            type Accum = $acc;

            #[inline]
            fn widen(self) -> $acc {
                self as $acc
            }

            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }
        }
    )*};
}

macro_rules! impl_element_float {
    ($($t:ty),* $(,)?) => {$(
        impl Element for $t {
            type Accum = f64;

            #[inline]
            fn widen(self) -> f64 {
                self as f64
            }

            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                <$t>::total_cmp(self, other)
            }
        }
    )*};
}

impl_element_int!(
    u8 => u64,
    u16 => u64,
    u32 => u64,
    u64 => u128,
    i8 => i64,
    i16 => i64,
    i32 => i64,
    i64 => i128,
);

impl_element_float!(f32, f64);
