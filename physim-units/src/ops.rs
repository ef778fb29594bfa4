//! Operator overloads for [`Quantity`]
//!
//! Multiplication and division are total: the result dimension follows
//! from the operand dimensions and always resolves to some kind.
//! Addition and subtraction are defined only between equal dimensions,
//! so `+` and `-` yield `Result` and surface the mismatch explicitly.
//! There is deliberately no `Quantity + f64`: wrap the scalar with
//! [`Quantity::dimensionless`] first.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::{Dimension, Quantity, QuantityError};

impl Mul for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        Quantity::mul(&self, &rhs)
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    /// Scaling by a bare scalar keeps the dimension
    fn mul(self, rhs: f64) -> Quantity {
        Quantity {
            value: self.value * rhs,
            kind: self.kind,
        }
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        Quantity {
            value: self * rhs.value,
            kind: rhs.kind,
        }
    }
}

impl Div for Quantity {
    type Output = Quantity;

    fn div(self, rhs: Quantity) -> Quantity {
        Quantity::div(&self, &rhs)
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: f64) -> Quantity {
        Quantity {
            value: self.value / rhs,
            kind: self.kind,
        }
    }
}

impl Div<Quantity> for f64 {
    type Output = Quantity;

    /// Dividing a scalar by a quantity inverts the quantity's dimension
    fn div(self, rhs: Quantity) -> Quantity {
        Quantity::new(
            Dimension::DIMENSIONLESS.divide(&rhs.dimension()),
            self / rhs.value,
        )
    }
}

impl Add for Quantity {
    type Output = Result<Quantity, QuantityError>;

    fn add(self, rhs: Quantity) -> Result<Quantity, QuantityError> {
        Quantity::add(&self, &rhs)
    }
}

impl Sub for Quantity {
    type Output = Result<Quantity, QuantityError>;

    fn sub(self, rhs: Quantity) -> Result<Quantity, QuantityError> {
        Quantity::sub(&self, &rhs)
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        Quantity {
            value: -self.value,
            kind: self.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuantityKind;

    #[test]
    fn test_momentum_from_mass_times_velocity() {
        let p = Quantity::mass(10.0) * Quantity::velocity(10.0);
        assert_eq!(p.raw(), 100.0);
        assert_eq!(p.kind(), QuantityKind::Momentum);
    }

    #[test]
    fn test_scalar_mul_preserves_quantity() {
        let q = Quantity::force(12.0);
        let scaled = q * 1.0;
        assert_eq!(scaled.raw(), 12.0);
        assert_eq!(scaled.kind(), QuantityKind::Force);

        let left = 2.0 * q;
        assert_eq!(left.raw(), 24.0);
        assert_eq!(left.dimension(), Dimension::FORCE);
    }

    #[test]
    fn test_scalar_div() {
        let q = Quantity::area(10.0) / 2.0;
        assert_eq!(q.raw(), 5.0);
        assert_eq!(q.kind(), QuantityKind::Area);
    }

    #[test]
    fn test_scalar_over_quantity_inverts_dimension() {
        let freq = 1.0 / Quantity::time(0.5);
        assert_eq!(freq.raw(), 2.0);
        assert_eq!(freq.dimension(), Dimension::new([0, 0, -1]));
        assert_eq!(
            freq.kind(),
            QuantityKind::Derived(Dimension::new([0, 0, -1]))
        );
    }

    #[test]
    fn test_div_quantities() {
        let rho = Quantity::mass(12.0) / Quantity::volume(4.0);
        assert_eq!(rho.raw(), 3.0);
        assert_eq!(rho.kind(), QuantityKind::Density);
    }

    #[test]
    fn test_add_equal_dimensions() {
        let sum = (Quantity::length(1.0) + Quantity::length(2.0)).unwrap();
        assert_eq!(sum.raw(), 3.0);
        assert_eq!(sum.kind(), QuantityKind::Length);
    }

    #[test]
    fn test_add_mismatch() {
        let res = Quantity::mass(1.0) + Quantity::velocity(1.0);
        assert_eq!(
            res.unwrap_err(),
            QuantityError::DimensionMismatch {
                lhs: Dimension::MASS,
                rhs: Dimension::VELOCITY,
            }
        );
    }

    #[test]
    fn test_sub() {
        let diff = (Quantity::time(5.0) - Quantity::time(2.0)).unwrap();
        assert_eq!(diff.raw(), 3.0);

        assert!((Quantity::time(5.0) - Quantity::length(2.0)).is_err());
    }

    #[test]
    fn test_neg() {
        let q = -Quantity::velocity(10.0);
        assert_eq!(q.raw(), -10.0);
        assert_eq!(q.dimension(), Dimension::VELOCITY);
    }

    #[test]
    fn test_kinetic_energy_expression() {
        let m = Quantity::mass(10.0);
        let v = Quantity::velocity(10.0);
        let e = 0.5 * m * v * v;
        assert_eq!(e.raw(), 500.0);
        assert_eq!(e.kind(), QuantityKind::Energy);
    }
}
