//! Canonical quantity kinds and the dimension resolver
//!
//! Maps a computed [`Dimension`] back to the named quantity it represents.
//! The mapping is total: dimensions without a registered name resolve to
//! the generic [`QuantityKind::Derived`] fallback, never an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::Dimension;

/// The named identity of a physical quantity, or a generic fallback
/// carrying its dimension when no name is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityKind {
    Dimensionless,
    Mass,
    Length,
    Time,
    Velocity,
    Acceleration,
    Force,
    Energy,
    Power,
    Area,
    Volume,
    Pressure,
    Momentum,
    Density,
    /// A dimension with no registered name, identified by its exponents
    Derived(Dimension),
}

impl QuantityKind {
    /// The dimension this kind stands for
    pub fn dimension(&self) -> Dimension {
        match self {
            QuantityKind::Dimensionless => Dimension::DIMENSIONLESS,
            QuantityKind::Mass => Dimension::MASS,
            QuantityKind::Length => Dimension::LENGTH,
            QuantityKind::Time => Dimension::TIME,
            QuantityKind::Velocity => Dimension::VELOCITY,
            QuantityKind::Acceleration => Dimension::ACCELERATION,
            QuantityKind::Force => Dimension::FORCE,
            QuantityKind::Energy => Dimension::ENERGY,
            QuantityKind::Power => Dimension::POWER,
            QuantityKind::Area => Dimension::AREA,
            QuantityKind::Volume => Dimension::VOLUME,
            QuantityKind::Pressure => Dimension::PRESSURE,
            QuantityKind::Momentum => Dimension::MOMENTUM,
            QuantityKind::Density => Dimension::DENSITY,
            QuantityKind::Derived(dim) => *dim,
        }
    }

    /// The registered name, if any
    pub fn name(&self) -> Option<&'static str> {
        match self {
            QuantityKind::Dimensionless => Some("dimensionless"),
            QuantityKind::Mass => Some("mass"),
            QuantityKind::Length => Some("length"),
            QuantityKind::Time => Some("time"),
            QuantityKind::Velocity => Some("velocity"),
            QuantityKind::Acceleration => Some("acceleration"),
            QuantityKind::Force => Some("force"),
            QuantityKind::Energy => Some("energy"),
            QuantityKind::Power => Some("power"),
            QuantityKind::Area => Some("area"),
            QuantityKind::Volume => Some("volume"),
            QuantityKind::Pressure => Some("pressure"),
            QuantityKind::Momentum => Some("momentum"),
            QuantityKind::Density => Some("density"),
            QuantityKind::Derived(_) => None,
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "derived [{}]", self.dimension()),
        }
    }
}

/// Registry of named quantity kinds, keyed by dimension.
/// Populated once, read-only thereafter.
static CANONICAL: LazyLock<HashMap<Dimension, QuantityKind>> = LazyLock::new(|| {
    let kinds = [
        QuantityKind::Dimensionless,
        QuantityKind::Mass,
        QuantityKind::Length,
        QuantityKind::Time,
        QuantityKind::Velocity,
        QuantityKind::Acceleration,
        QuantityKind::Force,
        QuantityKind::Energy,
        QuantityKind::Power,
        QuantityKind::Area,
        QuantityKind::Volume,
        QuantityKind::Pressure,
        QuantityKind::Momentum,
        QuantityKind::Density,
    ];
    kinds.iter().map(|&k| (k.dimension(), k)).collect()
});

/// Resolve a dimension to its canonical quantity kind.
///
/// Total and deterministic: a registered dimension yields its named kind,
/// anything else yields [`QuantityKind::Derived`] carrying the dimension.
pub fn resolve(dim: Dimension) -> QuantityKind {
    CANONICAL
        .get(&dim)
        .copied()
        .unwrap_or(QuantityKind::Derived(dim))
}
