//! Бинарные арифметические операции над целыми числами.
//!
//! # Примеры
//!
//! ```
//! use roman_calc::expression::{Operator, apply};
//!
//! assert_eq!(Operator::Add.apply(3, 4), Ok(7));
//! assert_eq!(apply(7, 3, "/"), Ok(2));
//! ```

use std::{fmt::Display, str::FromStr};

use thiserror::Error;

/// Ошибки при вычислении операции.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Деление на ноль.
    #[error("деление на ноль невозможно")]
    DivisionByZero,
    /// Оператор не входит в набор `+ - * /`.
    #[error("недопустимый оператор: {0}")]
    UnsupportedOperator(String),
    /// Целочисленное переполнение.
    #[error("переполнение")]
    Overflow,
}

/// Бинарные операторы.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Сложение.
    Add,
    /// Вычитание.
    Sub,
    /// Умножение.
    Mul,
    /// Целочисленное деление с отбрасыванием дробной части.
    Div,
}

impl Operator {
    /// Применить операцию к операндам.
    ///
    /// # Ошибки
    ///
    /// - [`EvalError::DivisionByZero`] при делении на ноль.
    /// - [`EvalError::Overflow`] при переполнении.
    pub fn apply(self, left: i64, right: i64) -> Result<i64, EvalError> {
        match self {
            Self::Add => left.checked_add(right).ok_or(EvalError::Overflow),
            Self::Sub => left.checked_sub(right).ok_or(EvalError::Overflow),
            Self::Mul => left.checked_mul(right).ok_or(EvalError::Overflow),
            Self::Div => {
                if right == 0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    left.checked_div(right).ok_or(EvalError::Overflow)
                }
            }
        }
    }

    /// Символ оператора.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl FromStr for Operator {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Sub),
            "*" => Ok(Self::Mul),
            "/" => Ok(Self::Div),
            other => Err(EvalError::UnsupportedOperator(other.to_string())),
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Разбирает оператор и применяет его к операндам.
///
/// # Ошибки
///
/// - [`EvalError::UnsupportedOperator`] для оператора вне `+ - * /`.
/// - [`EvalError::DivisionByZero`] при делении на ноль.
/// - [`EvalError::Overflow`] при переполнении.
pub fn apply(left: i64, right: i64, operator: &str) -> Result<i64, EvalError> {
    operator.parse::<Operator>()?.apply(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! apply_tests {
        ($($name:ident: ($a:expr, $b:expr, $op:expr) => $expected:expr),* $(,)?) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(apply($a, $b, $op), $expected, "{} {} {}", $a, $op, $b);
                }
            )*
        };
    }

    apply_tests! {
        apply_add: (3, 4, "+") => Ok(7),
        apply_sub: (3, 4, "-") => Ok(-1),
        apply_mul: (10, 10, "*") => Ok(100),
        apply_div_truncates: (7, 3, "/") => Ok(2),
        apply_div_exact: (10, 5, "/") => Ok(2),
        apply_div_negative_truncates_toward_zero: (-7, 2, "/") => Ok(-3),
        apply_div_by_zero: (6, 0, "/") => Err(EvalError::DivisionByZero),
        apply_unknown_operator: (1, 2, "%") => Err(EvalError::UnsupportedOperator("%".into())),
        apply_operator_is_exact: (1, 2, "++") => Err(EvalError::UnsupportedOperator("++".into())),
        apply_overflow_add: (i64::MAX, 1, "+") => Err(EvalError::Overflow),
        apply_overflow_div: (i64::MIN, -1, "/") => Err(EvalError::Overflow),
    }

    #[test]
    fn parse_operators() {
        assert_eq!("+".parse::<Operator>(), Ok(Operator::Add));
        assert_eq!("-".parse::<Operator>(), Ok(Operator::Sub));
        assert_eq!("*".parse::<Operator>(), Ok(Operator::Mul));
        assert_eq!("/".parse::<Operator>(), Ok(Operator::Div));
        assert!("x".parse::<Operator>().is_err());
    }

    #[test]
    fn operator_display_round_trips() {
        for op in [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div] {
            assert_eq!(op.to_string().parse::<Operator>(), Ok(op));
        }
    }

    #[test]
    fn unsupported_operator_message() {
        let err = apply(1, 2, "^").unwrap_err();
        assert_eq!(err.to_string(), "недопустимый оператор: ^");
    }
}
