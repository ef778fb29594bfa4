//! One-dimensional elastic collisions

use physim_units::QuantityError;

use crate::particle::Particle;

/// Elastic head-on collision between two particles.
///
/// Post-collision velocities follow the one-dimensional formula
/// `v1' = 2 (m1 v1 + m2 v2) / (m1 + m2) - v1` (and symmetrically for
/// the second particle). Both are computed from the pre-collision state
/// before either particle is written back; each particle's momentum and
/// kinetic energy are then re-derived from its new velocity.
pub fn elastic_collision_1d(p1: &mut Particle, p2: &mut Particle) -> Result<(), QuantityError> {
    let momentum_sum = (p1.mass() * p1.velocity() + p2.mass() * p2.velocity())?;
    let mass_sum = (p1.mass() + p2.mass())?;
    let center = 2.0 * (momentum_sum / mass_sum);

    let v1 = (center - p1.velocity())?;
    let v2 = (center - p2.velocity())?;

    p1.set_velocity(v1)?;
    p2.set_velocity(v2)
}
