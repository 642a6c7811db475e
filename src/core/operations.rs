//! The four binary operations and their arithmetic.

use crate::core::{CalcError, CalcResult};

/// Type-safe operation enum - compile-time guarantee of valid operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Maps an operator character to its operation
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operation to two operands with f64 semantics.
    ///
    /// Division by zero, infinite, and NaN results are rejected rather than
    /// propagated as special values.
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
        };

        if result.is_nan() {
            Err(CalcError::InvalidResult("NaN".into()))
        } else if result.is_infinite() {
            Err(CalcError::Overflow)
        } else {
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // --- Operation enum tests ---

    #[test]
    fn test_operation_symbol() {
        assert_eq!(Operation::Add.symbol(), '+');
        assert_eq!(Operation::Subtract.symbol(), '-');
        assert_eq!(Operation::Multiply.symbol(), '*');
        assert_eq!(Operation::Divide.symbol(), '/');
    }

    #[test]
    fn test_operation_from_char() {
        assert_eq!(Operation::from_char('+'), Some(Operation::Add));
        assert_eq!(Operation::from_char('-'), Some(Operation::Subtract));
        assert_eq!(Operation::from_char('*'), Some(Operation::Multiply));
        assert_eq!(Operation::from_char('/'), Some(Operation::Divide));
        assert_eq!(Operation::from_char('^'), None);
        assert_eq!(Operation::from_char('5'), None);
    }

    #[test]
    fn test_operation_symbol_round_trip() {
        for op in [
            Operation::Add,
            Operation::Subtract,
            Operation::Multiply,
            Operation::Divide,
        ] {
            assert_eq!(Operation::from_char(op.symbol()), Some(op));
        }
    }

    // --- apply() tests ---

    #[test]
    fn test_apply_add() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operation::Add.apply(-2.0, 5.0), Ok(3.0));
    }

    #[test]
    fn test_apply_subtract() {
        assert_eq!(Operation::Subtract.apply(5.0, 3.0), Ok(2.0));
        assert_eq!(Operation::Subtract.apply(3.0, 5.0), Ok(-2.0));
    }

    #[test]
    fn test_apply_multiply() {
        assert_eq!(Operation::Multiply.apply(6.0, 7.0), Ok(42.0));
        assert_eq!(Operation::Multiply.apply(-2.0, 3.0), Ok(-6.0));
        assert_eq!(Operation::Multiply.apply(5.0, 0.0), Ok(0.0));
    }

    #[test]
    fn test_apply_divide() {
        assert_eq!(Operation::Divide.apply(6.0, 2.0), Ok(3.0));
        assert_eq!(Operation::Divide.apply(7.0, 2.0), Ok(3.5));
        assert_eq!(Operation::Divide.apply(0.0, 5.0), Ok(0.0));
    }

    #[test]
    fn test_apply_divide_by_zero() {
        assert_eq!(
            Operation::Divide.apply(10.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_apply_overflow() {
        assert_eq!(
            Operation::Multiply.apply(f64::MAX, 2.0),
            Err(CalcError::Overflow)
        );
    }

    #[test]
    fn test_apply_add_decimals() {
        let result = Operation::Add.apply(0.1, 0.2).unwrap();
        assert!((result - 0.3).abs() < 1e-10);
    }

    // --- Property-based tests ---

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e10f64..1e10f64, b in -1e10f64..1e10f64) {
            let r1 = Operation::Add.apply(a, b);
            let r2 = Operation::Add.apply(b, a);
            match (r1, r2) {
                (Ok(v1), Ok(v2)) => prop_assert!((v1 - v2).abs() < 1e-10),
                (Err(_), Err(_)) => {}
                _ => prop_assert!(false, "Commutativity violated"),
            }
        }

        #[test]
        fn prop_multiply_commutative(a in -1e5f64..1e5f64, b in -1e5f64..1e5f64) {
            let r1 = Operation::Multiply.apply(a, b);
            let r2 = Operation::Multiply.apply(b, a);
            match (r1, r2) {
                (Ok(v1), Ok(v2)) => prop_assert!((v1 - v2).abs() < 1e-10),
                (Err(_), Err(_)) => {}
                _ => prop_assert!(false, "Commutativity violated"),
            }
        }

        #[test]
        fn prop_add_identity(a in -1e10f64..1e10f64) {
            prop_assert_eq!(Operation::Add.apply(a, 0.0), Ok(a));
        }

        #[test]
        fn prop_multiply_identity(a in -1e10f64..1e10f64) {
            prop_assert_eq!(Operation::Multiply.apply(a, 1.0), Ok(a));
        }

        #[test]
        fn prop_divide_by_self(a in -1e10f64..1e10f64) {
            prop_assume!(a != 0.0);
            let result = Operation::Divide.apply(a, a).unwrap();
            prop_assert!((result - 1.0).abs() < 1e-10);
        }

        #[test]
        fn prop_subtract_self_is_zero(a in -1e10f64..1e10f64) {
            prop_assert_eq!(Operation::Subtract.apply(a, a), Ok(0.0));
        }
    }
}
