//! Simulated-body records

use serde::{Deserialize, Serialize};
use physim_units::{Quantity, QuantityError};

use crate::energy::{kinetic_energy, Energy};

/// A point particle: mass, velocity, momentum, and an energy record.
///
/// Momentum and kinetic energy are derived from mass and velocity; the
/// write path re-derives them whenever the velocity changes, so the
/// record stays internally consistent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    energy: Energy,
    mass: Quantity,
    velocity: Quantity,
    momentum: Quantity,
}

impl Particle {
    /// Assemble a particle from already-typed quantities, checking that
    /// each slot carries its expected dimension
    pub fn new(
        energy: Energy,
        mass: Quantity,
        velocity: Quantity,
        momentum: Quantity,
    ) -> Result<Self, QuantityError> {
        let mut p = Particle::default();
        p.energy = energy;
        p.mass.assign(mass)?;
        p.velocity.assign(velocity)?;
        p.momentum.assign(momentum)?;
        Ok(p)
    }

    /// Build a particle from a mass and velocity magnitude, deriving
    /// momentum and kinetic energy
    pub fn from_state(mass: f64, velocity: f64) -> Result<Self, QuantityError> {
        let mut p = Particle::default();
        p.mass.assign(Quantity::mass(mass))?;
        p.velocity.assign(Quantity::velocity(velocity))?;
        p.refresh_derived()?;
        Ok(p)
    }

    pub fn mass(&self) -> Quantity {
        self.mass
    }

    pub fn velocity(&self) -> Quantity {
        self.velocity
    }

    pub fn momentum(&self) -> Quantity {
        self.momentum
    }

    pub fn energy(&self) -> Energy {
        self.energy
    }

    pub fn kinetic(&self) -> Quantity {
        self.energy.kinetic()
    }

    pub fn potential(&self) -> Quantity {
        self.energy.potential()
    }

    /// Replace the velocity, then re-derive momentum and kinetic energy
    /// from the new state. Rejects non-velocity sources.
    pub fn set_velocity(&mut self, velocity: Quantity) -> Result<(), QuantityError> {
        self.velocity.assign(velocity)?;
        self.refresh_derived()
    }

    /// Re-derive momentum and kinetic energy from mass and velocity
    pub(crate) fn refresh_derived(&mut self) -> Result<(), QuantityError> {
        self.momentum.assign(self.mass * self.velocity)?;
        let kinetic = kinetic_energy(&self.mass, &self.velocity)?;
        self.energy.set_kinetic(kinetic)
    }
}

impl Default for Particle {
    fn default() -> Self {
        Particle {
            energy: Energy::default(),
            mass: Quantity::mass(0.0),
            velocity: Quantity::velocity(0.0),
            momentum: Quantity::momentum(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physim_units::Dimension;

    #[test]
    fn test_from_state_derives_momentum_and_energy() {
        let p = Particle::from_state(10.0, 10.0).unwrap();
        assert_eq!(p.momentum().raw(), 100.0);
        assert!((p.kinetic().raw() - 500.0).abs() < 1e-12);
        assert_eq!(p.potential().raw(), 0.0);
    }

    #[test]
    fn test_new_checks_slots() {
        let energy = Energy::new(Quantity::energy(500.0)).unwrap();
        let p = Particle::new(
            energy,
            Quantity::mass(10.0),
            Quantity::velocity(10.0),
            Quantity::momentum(100.0),
        )
        .unwrap();
        assert_eq!(p.mass().raw(), 10.0);

        // velocity slot refuses a mass
        assert!(Particle::new(
            energy,
            Quantity::mass(10.0),
            Quantity::mass(10.0),
            Quantity::momentum(100.0),
        )
        .is_err());
    }

    #[test]
    fn test_set_velocity_refreshes_derived() {
        let mut p = Particle::from_state(2.0, 3.0).unwrap();
        p.set_velocity(Quantity::velocity(5.0)).unwrap();
        assert_eq!(p.velocity().raw(), 5.0);
        assert_eq!(p.momentum().raw(), 10.0);
        assert!((p.kinetic().raw() - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_set_velocity_rejects_mismatch() {
        let mut p = Particle::from_state(2.0, 3.0).unwrap();
        let err = p.set_velocity(Quantity::energy(5.0)).unwrap_err();
        assert_eq!(
            err,
            QuantityError::DimensionMismatch {
                lhs: Dimension::VELOCITY,
                rhs: Dimension::ENERGY,
            }
        );
        assert_eq!(p.velocity().raw(), 3.0);
    }
}
