//! Physim Mechanics - particle records and collision kinematics
//!
//! Builds on `physim-units`: a [`Particle`] bundles mass, velocity,
//! momentum, and an [`Energy`] record, all as dimension-checked
//! quantities, and [`elastic_collision_1d`] updates a colliding pair
//! through the unit operators alone.

mod collision;
mod energy;
mod particle;

pub use collision::elastic_collision_1d;
pub use energy::{kinetic_energy, Energy};
pub use particle::Particle;

#[cfg(test)]
mod tests {
    use super::*;
    use physim_units::{Quantity, QuantityKind};

    #[test]
    fn test_momentum_derivation_end_to_end() {
        let p = Particle::from_state(10.0, 10.0).unwrap();
        let derived = p.mass() * p.velocity();
        assert_eq!(derived.kind(), QuantityKind::Momentum);
        assert_eq!(derived.raw(), p.momentum().raw());
    }

    #[test]
    fn test_kinetic_energy_matches_record() {
        let p = Particle::from_state(10.0, 10.0).unwrap();
        let e = kinetic_energy(&Quantity::mass(10.0), &Quantity::velocity(10.0)).unwrap();
        assert_eq!(e.raw(), p.kinetic().raw());
    }
}
