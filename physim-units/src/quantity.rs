//! Quantity type - a magnitude with a fixed dimension

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::canon::{resolve, QuantityKind};
use crate::{Dimension, QuantityError};

/// A physical quantity: a scalar magnitude tagged with its dimension.
///
/// The dimension is fixed at construction. Arithmetic produces new
/// quantities whose kind is resolved from the operand dimensions; the
/// only way to change an existing quantity's magnitude is [`Quantity::assign`],
/// which keeps the dimension and rejects mismatched sources.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// The scalar magnitude
    pub(crate) value: f64,
    /// The resolved kind, carrying the dimension
    pub(crate) kind: QuantityKind,
}

impl Quantity {
    /// Create a quantity of the given dimension, resolving its kind
    pub fn new(dimension: Dimension, value: f64) -> Self {
        Quantity {
            value,
            kind: resolve(dimension),
        }
    }

    /// Create a dimensionless quantity (explicitly wrapped pure number)
    pub fn dimensionless(value: f64) -> Self {
        Quantity {
            value,
            kind: QuantityKind::Dimensionless,
        }
    }

    /// Mass [M]
    pub fn mass(value: f64) -> Self {
        Quantity { value, kind: QuantityKind::Mass }
    }

    /// Length [L]
    pub fn length(value: f64) -> Self {
        Quantity { value, kind: QuantityKind::Length }
    }

    /// Time [T]
    pub fn time(value: f64) -> Self {
        Quantity { value, kind: QuantityKind::Time }
    }

    /// Velocity [L T^-1]
    pub fn velocity(value: f64) -> Self {
        Quantity { value, kind: QuantityKind::Velocity }
    }

    /// Acceleration [L T^-2]
    pub fn acceleration(value: f64) -> Self {
        Quantity { value, kind: QuantityKind::Acceleration }
    }

    /// Force [M L T^-2]
    pub fn force(value: f64) -> Self {
        Quantity { value, kind: QuantityKind::Force }
    }

    /// Energy [M L^2 T^-2]
    pub fn energy(value: f64) -> Self {
        Quantity { value, kind: QuantityKind::Energy }
    }

    /// Power [M L^2 T^-3]
    pub fn power(value: f64) -> Self {
        Quantity { value, kind: QuantityKind::Power }
    }

    /// Area [L^2]
    pub fn area(value: f64) -> Self {
        Quantity { value, kind: QuantityKind::Area }
    }

    /// Volume [L^3]
    pub fn volume(value: f64) -> Self {
        Quantity { value, kind: QuantityKind::Volume }
    }

    /// Pressure [M L^-1 T^-2]
    pub fn pressure(value: f64) -> Self {
        Quantity { value, kind: QuantityKind::Pressure }
    }

    /// Momentum [M L T^-1]
    pub fn momentum(value: f64) -> Self {
        Quantity { value, kind: QuantityKind::Momentum }
    }

    /// Density [M L^-3]
    pub fn density(value: f64) -> Self {
        Quantity { value, kind: QuantityKind::Density }
    }

    /// Get the current magnitude
    pub fn raw(&self) -> f64 {
        self.value
    }

    /// Get the dimension of this quantity
    pub fn dimension(&self) -> Dimension {
        self.kind.dimension()
    }

    /// Get the resolved kind of this quantity
    pub fn kind(&self) -> QuantityKind {
        self.kind
    }

    /// Check if this is a dimensionless quantity
    pub fn is_dimensionless(&self) -> bool {
        self.dimension().is_dimensionless()
    }

    /// Check if two quantities have the same dimension
    pub fn is_compatible(&self, other: &Quantity) -> bool {
        self.dimension() == other.dimension()
    }

    /// Replace the magnitude with a freshly computed quantity's magnitude.
    ///
    /// The receiver's dimension is kept; a source of a different dimension
    /// is rejected with [`QuantityError::DimensionMismatch`].
    pub fn assign(&mut self, other: Quantity) -> Result<(), QuantityError> {
        if !self.is_compatible(&other) {
            return Err(QuantityError::mismatch(self.dimension(), other.dimension()));
        }
        self.value = other.value;
        Ok(())
    }

    /// Add two quantities (must have equal dimensions)
    pub fn add(&self, other: &Quantity) -> Result<Quantity, QuantityError> {
        if !self.is_compatible(other) {
            return Err(QuantityError::mismatch(self.dimension(), other.dimension()));
        }
        Ok(Quantity {
            value: self.value + other.value,
            kind: self.kind,
        })
    }

    /// Subtract two quantities (must have equal dimensions)
    pub fn sub(&self, other: &Quantity) -> Result<Quantity, QuantityError> {
        if !self.is_compatible(other) {
            return Err(QuantityError::mismatch(self.dimension(), other.dimension()));
        }
        Ok(Quantity {
            value: self.value - other.value,
            kind: self.kind,
        })
    }

    /// Multiply two quantities (dimensions are multiplied)
    pub fn mul(&self, other: &Quantity) -> Quantity {
        Quantity::new(
            self.dimension().multiply(&other.dimension()),
            self.value * other.value,
        )
    }

    /// Divide two quantities (dimensions are divided).
    ///
    /// A zero-magnitude divisor yields an infinite or NaN magnitude.
    pub fn div(&self, other: &Quantity) -> Quantity {
        Quantity::new(
            self.dimension().divide(&other.dimension()),
            self.value / other.value,
        )
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::dimensionless(0.0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} [{}]", self.value, self.dimension())
        }
    }
}
