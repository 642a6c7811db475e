//! AST evaluation for keypad expressions.

use crate::core::parser::{AstNode, Parser};
use crate::core::{CalcError, CalcResult};

/// Trait for anything that can turn an expression string into a value.
///
/// The editor depends on this seam rather than a concrete evaluator, which
/// keeps tests free to substitute canned results or forced failures.
pub trait ExpressionEvaluator {
    /// Evaluates an expression string to a numeric result
    fn evaluate_expression(&mut self, input: &str) -> CalcResult<f64>;
}

/// Evaluator for expression ASTs
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates an AST node to a numeric result
    pub fn evaluate(&self, node: &AstNode) -> CalcResult<f64> {
        match node {
            AstNode::Number(n) => Ok(*n),
            AstNode::BinaryOp { left, op, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                op.apply(left_val, right_val)
            }
            AstNode::Negate(inner) => {
                let value = self.evaluate(inner)?;
                Ok(-value)
            }
        }
    }

    /// Parses and evaluates an expression string
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        let ast = Parser::parse_str(input)?;
        let result = self.evaluate(&ast)?;

        if result.is_nan() {
            return Err(CalcError::InvalidResult("NaN".to_string()));
        }
        if result.is_infinite() {
            return Err(CalcError::Overflow);
        }

        Ok(result)
    }
}

impl ExpressionEvaluator for Evaluator {
    fn evaluate_expression(&mut self, input: &str) -> CalcResult<f64> {
        self.evaluate_str(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    // ===== AST evaluation tests =====

    #[test]
    fn test_evaluate_number() {
        let evaluator = Evaluator::new();
        let result = evaluator.evaluate(&AstNode::number(42.0)).unwrap();
        assert_eq!(result, 42.0);
    }

    #[test]
    fn test_evaluate_addition() {
        let evaluator = Evaluator::new();
        let ast = AstNode::binary(AstNode::number(2.0), Operation::Add, AstNode::number(3.0));
        assert_eq!(evaluator.evaluate(&ast).unwrap(), 5.0);
    }

    #[test]
    fn test_evaluate_negate() {
        let evaluator = Evaluator::new();
        let ast = AstNode::negate(AstNode::number(7.0));
        assert_eq!(evaluator.evaluate(&ast).unwrap(), -7.0);
    }

    #[test]
    fn test_evaluate_nested() {
        // (2+3)*4 expressed directly as an AST
        let evaluator = Evaluator::new();
        let sum = AstNode::binary(AstNode::number(2.0), Operation::Add, AstNode::number(3.0));
        let ast = AstNode::binary(sum, Operation::Multiply, AstNode::number(4.0));
        assert_eq!(evaluator.evaluate(&ast).unwrap(), 20.0);
    }

    #[test]
    fn test_evaluate_division_by_zero() {
        let evaluator = Evaluator::new();
        let ast = AstNode::binary(
            AstNode::number(1.0),
            Operation::Divide,
            AstNode::number(0.0),
        );
        assert_eq!(evaluator.evaluate(&ast), Err(CalcError::DivisionByZero));
    }

    // ===== String evaluation tests =====

    #[test]
    fn test_evaluate_str_simple() {
        let evaluator = Evaluator::new();
        assert_eq!(evaluator.evaluate_str("2+3").unwrap(), 5.0);
    }

    #[test]
    fn test_evaluate_str_precedence() {
        let evaluator = Evaluator::new();
        assert_eq!(evaluator.evaluate_str("2+3*4").unwrap(), 14.0);
        assert_eq!(evaluator.evaluate_str("2*3+4").unwrap(), 10.0);
    }

    #[test]
    fn test_evaluate_str_left_associative() {
        let evaluator = Evaluator::new();
        assert_eq!(evaluator.evaluate_str("10-3-2").unwrap(), 5.0);
        assert_eq!(evaluator.evaluate_str("16/4/2").unwrap(), 2.0);
    }

    #[test]
    fn test_evaluate_str_decimals() {
        let evaluator = Evaluator::new();
        assert_eq!(evaluator.evaluate_str("0.5*2").unwrap(), 1.0);
        assert_eq!(evaluator.evaluate_str("1.5+2.5").unwrap(), 4.0);
    }

    #[test]
    fn test_evaluate_str_negative_operand() {
        let evaluator = Evaluator::new();
        assert_eq!(evaluator.evaluate_str("5*-3").unwrap(), -15.0);
        assert_eq!(evaluator.evaluate_str("5--3").unwrap(), 8.0);
    }

    #[test]
    fn test_evaluate_str_leading_negative() {
        let evaluator = Evaluator::new();
        assert_eq!(evaluator.evaluate_str("-5+3").unwrap(), -2.0);
    }

    #[test]
    fn test_evaluate_str_empty() {
        let evaluator = Evaluator::new();
        assert_eq!(evaluator.evaluate_str(""), Err(CalcError::EmptyExpression));
    }

    #[test]
    fn test_evaluate_str_division_by_zero() {
        let evaluator = Evaluator::new();
        assert_eq!(
            evaluator.evaluate_str("1/0"),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_evaluate_str_parse_error() {
        let evaluator = Evaluator::new();
        assert!(matches!(
            evaluator.evaluate_str("2+"),
            Err(CalcError::ParseError(_))
        ));
    }

    #[test]
    fn test_evaluator_trait_impl() {
        let mut evaluator = Evaluator::new();
        assert_eq!(evaluator.evaluate_expression("12+7").unwrap(), 19.0);
    }

    #[test]
    fn test_evaluator_default() {
        let evaluator = Evaluator::default();
        assert_eq!(evaluator.evaluate_str("1+1").unwrap(), 2.0);
    }
}
