//! Physim Units - dimension-checked classical-mechanics quantities
//!
//! A [`Quantity`] pairs an `f64` magnitude with a [`Dimension`], the
//! (mass, length, time) exponent triple of the quantity's kind. Ordinary
//! arithmetic operators combine quantities; multiplying or dividing
//! combines the dimensions and resolves the result to its canonical
//! named kind (mass × velocity is a momentum, not a bare number), while
//! adding or subtracting is accepted only between equal dimensions.
//!
//! ```
//! use physim_units::{Quantity, QuantityKind};
//!
//! let p = Quantity::mass(10.0) * Quantity::velocity(10.0);
//! assert_eq!(p.raw(), 100.0);
//! assert_eq!(p.kind(), QuantityKind::Momentum);
//!
//! // mass + velocity is dimensionally unsound
//! assert!((Quantity::mass(1.0) + Quantity::velocity(1.0)).is_err());
//! ```

mod canon;
mod dimension;
mod error;
mod ops;
mod quantity;

pub use canon::{resolve, QuantityKind};
pub use dimension::Dimension;
pub use error::QuantityError;
pub use quantity::Quantity;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{resolve, Dimension, Quantity, QuantityError, QuantityKind};
}
