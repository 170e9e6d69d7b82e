//! Fixed-arity immutable tuples over primitive numeric element types.
//!
//! A [`Tuple<T, N>`](Tuple) holds exactly `N` values of one numeric type,
//! for arities 0 through [`MAX_ARITY`]. Tuples are built from per-arity
//! `of` factories (pinned through the [`Tuple0`]..[`Tuple9`] aliases) or
//! from arrays, and expose aggregate statistics
//! (min/max/median/sum/average), reversal, membership testing, and
//! conversion to arrays, vectors, and iterators. Runtime-length input goes
//! through [`AnyTuple::from_slice`], which dispatches on slice length.
//!
//! ```
//! use numtuple::Tuple3;
//!
//! let t = Tuple3::of(3, 1, 2);
//! assert_eq!(t.sum(), 6i64);
//! assert_eq!(t.reverse().to_array(), [2, 1, 3]);
//! assert_eq!(t.min(), Ok(1));
//! assert_eq!(t.to_string(), "[3, 1, 2]");
//! ```

mod any;
mod arity;
mod element;
mod error;
pub mod stats;
mod tuple;

pub use any::AnyTuple;
pub use arity::{
    Tuple0, Tuple1, Tuple2, Tuple3, Tuple4, Tuple5, Tuple6, Tuple7, Tuple8, Tuple9,
};
pub use element::Element;
pub use error::TupleError;
pub use tuple::{Tuple, MAX_ARITY};
