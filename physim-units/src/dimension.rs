//! Dimensional analysis types
//!
//! Each classical-mechanics quantity has a dimension represented as a
//! 3-element vector of exponents: [mass, length, time]

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dimension indices for the 3 base quantities
pub const MASS: usize = 0;
pub const LENGTH: usize = 1;
pub const TIME: usize = 2;

/// Represents the dimension of a physical quantity
/// as exponents of the 3 base dimensions (mass, length, time).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    /// [mass, length, time]
    pub exponents: [i32; 3],
}

impl Dimension {
    /// Dimensionless quantity (all exponents zero)
    pub const DIMENSIONLESS: Dimension = Dimension { exponents: [0, 0, 0] };

    /// Mass dimension [M]
    pub const MASS: Dimension = Dimension { exponents: [1, 0, 0] };

    /// Length dimension [L]
    pub const LENGTH: Dimension = Dimension { exponents: [0, 1, 0] };

    /// Time dimension [T]
    pub const TIME: Dimension = Dimension { exponents: [0, 0, 1] };

    /// Velocity [L T^-1]
    pub const VELOCITY: Dimension = Dimension { exponents: [0, 1, -1] };

    /// Acceleration [L T^-2]
    pub const ACCELERATION: Dimension = Dimension { exponents: [0, 1, -2] };

    /// Force [M L T^-2]
    pub const FORCE: Dimension = Dimension { exponents: [1, 1, -2] };

    /// Energy [M L^2 T^-2]
    pub const ENERGY: Dimension = Dimension { exponents: [1, 2, -2] };

    /// Power [M L^2 T^-3]
    pub const POWER: Dimension = Dimension { exponents: [1, 2, -3] };

    /// Area [L^2]
    pub const AREA: Dimension = Dimension { exponents: [0, 2, 0] };

    /// Volume [L^3]
    pub const VOLUME: Dimension = Dimension { exponents: [0, 3, 0] };

    /// Pressure [M L^-1 T^-2]
    pub const PRESSURE: Dimension = Dimension { exponents: [1, -1, -2] };

    /// Momentum [M L T^-1]
    pub const MOMENTUM: Dimension = Dimension { exponents: [1, 1, -1] };

    /// Density [M L^-3]
    pub const DENSITY: Dimension = Dimension { exponents: [1, -3, 0] };

    /// Create a new dimension from exponents
    pub const fn new(exponents: [i32; 3]) -> Self {
        Dimension { exponents }
    }

    /// Check if this is a dimensionless quantity
    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Multiply dimensions (add exponents)
    pub fn multiply(&self, other: &Dimension) -> Dimension {
        let mut result = [0i32; 3];
        for i in 0..3 {
            result[i] = self.exponents[i] + other.exponents[i];
        }
        Dimension { exponents: result }
    }

    /// Divide dimensions (subtract exponents)
    pub fn divide(&self, other: &Dimension) -> Dimension {
        let mut result = [0i32; 3];
        for i in 0..3 {
            result[i] = self.exponents[i] - other.exponents[i];
        }
        Dimension { exponents: result }
    }

    /// Invert dimensions (negate exponents)
    pub fn invert(&self) -> Dimension {
        let mut result = [0i32; 3];
        for i in 0..3 {
            result[i] = -self.exponents[i];
        }
        Dimension { exponents: result }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = ["M", "L", "T"];
        let mut parts = Vec::new();

        for (i, &exp) in self.exponents.iter().enumerate() {
            if exp != 0 {
                if exp == 1 {
                    parts.push(names[i].to_string());
                } else {
                    parts.push(format!("{}^{}", names[i], exp));
                }
            }
        }

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}
