/// Binary operators. They all share one precedence and associate left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Sum,
    Subtract,
    Multiply,
    Divide,
    Equal,
    Less,
    NotEqual,
    LessEqual,
    Greater,
    GreaterEqual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Absolute,
    Negate,
    Random,
    Not,
    Remainder,
}

/// ## 16-bit integer arithmetic
///
/// Everything wraps like the machine word it models.

pub struct Operation {}

impl Operation {
    pub fn negate(val: i16) -> i16 {
        val.wrapping_neg()
    }

    pub fn absolute(val: i16) -> i16 {
        val.wrapping_abs()
    }

    pub fn not(val: i16) -> i16 {
        (val == 0) as i16
    }

    pub fn sum(lhs: i16, rhs: i16) -> i16 {
        lhs.wrapping_add(rhs)
    }

    pub fn subtract(lhs: i16, rhs: i16) -> i16 {
        lhs.wrapping_sub(rhs)
    }

    pub fn multiply(lhs: i16, rhs: i16) -> i16 {
        lhs.wrapping_mul(rhs)
    }

    /// Quotient and remainder, truncating toward zero.
    /// `None` when dividing by zero.
    pub fn divide(lhs: i16, rhs: i16) -> Option<(i16, i16)> {
        if rhs == 0 {
            None
        } else {
            Some((lhs.wrapping_div(rhs), lhs.wrapping_rem(rhs)))
        }
    }

    pub fn equal(lhs: i16, rhs: i16) -> i16 {
        (lhs == rhs) as i16
    }

    pub fn not_equal(lhs: i16, rhs: i16) -> i16 {
        (lhs != rhs) as i16
    }

    pub fn less(lhs: i16, rhs: i16) -> i16 {
        (lhs < rhs) as i16
    }

    pub fn less_equal(lhs: i16, rhs: i16) -> i16 {
        (lhs <= rhs) as i16
    }

    pub fn greater(lhs: i16, rhs: i16) -> i16 {
        (lhs > rhs) as i16
    }

    pub fn greater_equal(lhs: i16, rhs: i16) -> i16 {
        (lhs >= rhs) as i16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping() {
        assert_eq!(Operation::sum(i16::max_value(), 1), i16::min_value());
        assert_eq!(Operation::multiply(300, 300), 24464);
        assert_eq!(Operation::negate(i16::min_value()), i16::min_value());
        assert_eq!(Operation::absolute(-5), 5);
    }

    #[test]
    fn test_divide() {
        assert_eq!(Operation::divide(10, 3), Some((3, 1)));
        assert_eq!(Operation::divide(-7, 2), Some((-3, -1)));
        assert_eq!(Operation::divide(5, 0), None);
        assert_eq!(Operation::divide(i16::min_value(), -1), Some((i16::min_value(), 0)));
    }

    #[test]
    fn test_compare() {
        assert_eq!(Operation::less(1, 2), 1);
        assert_eq!(Operation::greater_equal(1, 2), 0);
        assert_eq!(Operation::not_equal(1, 2), 1);
        assert_eq!(Operation::equal(-1, -1), 1);
        assert_eq!(Operation::less_equal(2, 2), 1);
        assert_eq!(Operation::greater(2, 2), 0);
        assert_eq!(Operation::not(0), 1);
        assert_eq!(Operation::not(-3), 0);
    }
}
