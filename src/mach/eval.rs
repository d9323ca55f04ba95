use super::operation::{Operation, Operator, UnaryOperator};
use super::Runtime;
use crate::error;
use crate::lang::{is_miep_digit, is_miep_hexdigit, Error, Ident};
use rand::Rng;

type Result<T> = std::result::Result<T, Error>;

// Expressions are evaluated while they are scanned. There is no
// precedence: `2+3*4` is `(2+3)*4`.

impl Runtime {
    pub(super) fn expression(&mut self) -> Result<i16> {
        self.cursor.skip_spaces();
        let mut value = self.term()?;
        while let Some(op) = self.binary_operator() {
            let rhs = self.term()?;
            value = match op {
                Operator::Sum => Operation::sum(value, rhs),
                Operator::Subtract => Operation::subtract(value, rhs),
                Operator::Multiply => Operation::multiply(value, rhs),
                Operator::Divide => match Operation::divide(value, rhs) {
                    Some((quotient, remainder)) => {
                        self.remainder = remainder;
                        quotient
                    }
                    None => {
                        self.print(&format!("{}\n", error!(DivisionByZero)));
                        -1
                    }
                },
                Operator::Equal => Operation::equal(value, rhs),
                Operator::Less => Operation::less(value, rhs),
                Operator::NotEqual => Operation::not_equal(value, rhs),
                Operator::LessEqual => Operation::less_equal(value, rhs),
                Operator::Greater => Operation::greater(value, rhs),
                Operator::GreaterEqual => Operation::greater_equal(value, rhs),
            };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<i16> {
        self.cursor.skip_spaces();
        if self.cursor.eat(b'(') {
            let value = self.expression()?;
            self.cursor.skip_spaces();
            self.expect(b')');
            return Ok(value);
        }
        if let Some(var) = self.cursor.ident() {
            return self.variable(var);
        }
        match self.cursor.peek() {
            Some(b'$') if !matches!(self.cursor.peek_at(1), Some(c) if is_miep_hexdigit(c)) => {
                self.cursor.advance();
                return Ok(self.input.read_byte());
            }
            Some(b'?') => {
                self.cursor.advance();
                return Ok(self.input.read_number());
            }
            _ => {}
        }
        if let Some(value) = self.constant() {
            return Ok(value);
        }
        if let Some(op) = self.unary_operator() {
            let value = self.term()?;
            return Ok(match op {
                UnaryOperator::Absolute => Operation::absolute(value),
                UnaryOperator::Negate => Operation::negate(value),
                UnaryOperator::Not => Operation::not(value),
                UnaryOperator::Random => {
                    if value > 0 {
                        self.rng.gen_range(0..value)
                    } else {
                        0
                    }
                }
                UnaryOperator::Remainder => self.remainder,
            });
        }
        Ok(0)
    }

    /// `V`, `V:index)` or `V(index)`.
    fn variable(&mut self, var: Ident) -> Result<i16> {
        let base = self.var.fetch(var);
        if self.cursor.eat(b':') {
            let index = self.expression()?;
            self.expect(b')');
            Ok(self.mem.fetch_byte(base, index))
        } else if self.cursor.eat(b'(') {
            let index = self.expression()?;
            self.expect(b')');
            Ok(self.mem.fetch_word(base, index))
        } else {
            Ok(base)
        }
    }

    /// Decimal, `$` hex, or a quoted string packing up to two characters.
    fn constant(&mut self) -> Option<i16> {
        match self.cursor.peek() {
            Some(b'"') => {
                let bytes = self.string();
                let lo = bytes.first().copied().unwrap_or(0) as i16;
                let hi = bytes.get(1).copied().unwrap_or(0) as i16;
                Some(lo.wrapping_add(hi.wrapping_mul(256)))
            }
            Some(b'$') => {
                self.cursor.advance();
                Some(self.cursor.hex().unwrap_or(-1))
            }
            Some(c) if is_miep_digit(c) => self.cursor.decimal(),
            _ => None,
        }
    }

    fn binary_operator(&mut self) -> Option<Operator> {
        let op = match self.cursor.peek()? {
            b'+' => Operator::Sum,
            b'-' => Operator::Subtract,
            b'*' => Operator::Multiply,
            b'/' => Operator::Divide,
            b'=' => Operator::Equal,
            b'<' => {
                self.cursor.advance();
                return Some(if self.cursor.eat(b'>') {
                    Operator::NotEqual
                } else if self.cursor.eat(b'=') {
                    Operator::LessEqual
                } else {
                    Operator::Less
                });
            }
            b'>' => {
                self.cursor.advance();
                return Some(if self.cursor.eat(b'=') {
                    Operator::GreaterEqual
                } else {
                    Operator::Greater
                });
            }
            _ => return None,
        };
        self.cursor.advance();
        Some(op)
    }

    fn unary_operator(&mut self) -> Option<UnaryOperator> {
        let op = match self.cursor.peek()? {
            b'+' => UnaryOperator::Absolute,
            b'-' => UnaryOperator::Negate,
            b'\'' => UnaryOperator::Random,
            b'#' => UnaryOperator::Not,
            b'%' => UnaryOperator::Remainder,
            _ => return None,
        };
        self.cursor.advance();
        Some(op)
    }
}
