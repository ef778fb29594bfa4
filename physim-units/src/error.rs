//! Errors for dimension-checked arithmetic

use thiserror::Error;

use crate::Dimension;

/// Errors raised when quantities are combined unsoundly.
///
/// Numeric degeneracy (dividing by a zero magnitude) is not an error:
/// it propagates as an infinite or NaN magnitude on the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// Addition, subtraction, or assignment between unequal dimensions
    #[error("dimension mismatch: cannot combine [{lhs}] with [{rhs}]")]
    DimensionMismatch { lhs: Dimension, rhs: Dimension },
}

impl QuantityError {
    pub(crate) fn mismatch(lhs: Dimension, rhs: Dimension) -> Self {
        QuantityError::DimensionMismatch { lhs, rhs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = QuantityError::mismatch(Dimension::MASS, Dimension::VELOCITY);
        assert_eq!(
            format!("{}", err),
            "dimension mismatch: cannot combine [M] with [L T^-1]"
        );
    }
}
