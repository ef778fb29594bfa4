//! Kinetic and potential energy bookkeeping

use serde::{Deserialize, Serialize};
use physim_units::{Dimension, Quantity, QuantityError};

/// A particle's energy record: kinetic and potential slots,
/// both of energy dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Energy {
    kinetic: Quantity,
    potential: Quantity,
}

impl Energy {
    /// Create an energy record with the given kinetic energy and zero
    /// potential energy
    pub fn new(kinetic: Quantity) -> Result<Self, QuantityError> {
        let mut e = Energy::default();
        e.set_kinetic(kinetic)?;
        Ok(e)
    }

    /// Current kinetic energy
    pub fn kinetic(&self) -> Quantity {
        self.kinetic
    }

    /// Current potential energy
    pub fn potential(&self) -> Quantity {
        self.potential
    }

    /// Replace the kinetic energy; the source must have energy dimension
    pub fn set_kinetic(&mut self, kinetic: Quantity) -> Result<(), QuantityError> {
        self.kinetic.assign(kinetic)
    }

    /// Replace the potential energy; the source must have energy dimension
    pub fn set_potential(&mut self, potential: Quantity) -> Result<(), QuantityError> {
        self.potential.assign(potential)
    }
}

impl Default for Energy {
    fn default() -> Self {
        Energy {
            kinetic: Quantity::energy(0.0),
            potential: Quantity::energy(0.0),
        }
    }
}

/// Classical kinetic energy: `0.5 * m * v^2`.
///
/// The inputs must be a mass and a velocity; anything else is a
/// dimension mismatch. The result resolves to the energy kind.
pub fn kinetic_energy(mass: &Quantity, velocity: &Quantity) -> Result<Quantity, QuantityError> {
    if mass.dimension() != Dimension::MASS {
        return Err(QuantityError::DimensionMismatch {
            lhs: Dimension::MASS,
            rhs: mass.dimension(),
        });
    }
    if velocity.dimension() != Dimension::VELOCITY {
        return Err(QuantityError::DimensionMismatch {
            lhs: Dimension::VELOCITY,
            rhs: velocity.dimension(),
        });
    }
    Ok(0.5 * *mass * *velocity * *velocity)
}
