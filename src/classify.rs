//! Классификация операндов: арабское число 1–10 или римское I–X.
//!
//! Оба операнда строки обязаны принадлежать одной системе счисления.
//! Система определяет только формат вывода результата.

use std::fmt::Display;

use thiserror::Error;

use crate::roman;
use crate::token::Token;

/// Наименьшее допустимое значение операнда.
pub const MIN_OPERAND: i64 = 1;
/// Наибольшее допустимое значение операнда.
pub const MAX_OPERAND: i64 = 10;

/// Ошибки классификации операндов.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// Операнды из разных систем счисления или нераспознанный операнд.
    #[error("Используются одновременно разные системы счисления или неверные числа.")]
    NumberingSystemMismatch {
        /// Позиция операнда, на котором классификация не сошлась.
        pos: usize,
    },

    /// Значение операнда вне диапазона 1–10.
    #[error("Числа должны быть от 1 до 10 включительно.")]
    OutOfRange {
        /// Значение операнда.
        value: i64,
        /// Позиция операнда.
        pos: usize,
    },
}

impl ClassifyError {
    /// Возвращает позицию операнда, вызвавшего ошибку.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::NumberingSystemMismatch { pos } | Self::OutOfRange { pos, .. } => *pos,
        }
    }
}

/// Система счисления операндов строки.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralSystem {
    /// Арабские цифры.
    Arabic,
    /// Римские цифры.
    Roman,
}

impl Display for NumeralSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arabic => write!(f, "arabic"),
            Self::Roman => write!(f, "roman"),
        }
    }
}

/// Операнды, приведённые к общей системе счисления.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    /// Система счисления обоих операндов.
    pub system: NumeralSystem,
    /// Значение первого операнда.
    pub left: i64,
    /// Значение второго операнда.
    pub right: i64,
}

/// Разбирает токен как десятичное целое в диапазоне 1–10.
///
/// Знак допускается стандартным разбором целого (`+5` даёт 5).
#[must_use]
pub fn classify_arabic(token: &str) -> Option<i64> {
    token
        .parse::<i64>()
        .ok()
        .filter(|value| (MIN_OPERAND..=MAX_OPERAND).contains(value))
}

/// Разбирает токен как римское число из набора I–X.
#[must_use]
pub fn classify_roman(token: &str) -> Option<i64> {
    roman::roman_to_arabic(token)
}

/// Определяет общую систему счисления двух операндов.
///
/// Арабская интерпретация проверяется первой. Если ни одна система не
/// подходит обоим операндам, ошибка указывает на первый операнд, который
/// не распознан ни в одной системе, а при смешении систем на второй.
///
/// # Ошибки
///
/// Возвращает [`ClassifyError::NumberingSystemMismatch`].
pub fn resolve_operands(left: Token<'_>, right: Token<'_>) -> Result<Operands, ClassifyError> {
    let arabic = (classify_arabic(left.text), classify_arabic(right.text));
    let roman = (classify_roman(left.text), classify_roman(right.text));

    let (system, (a, b)) = match (arabic, roman) {
        ((Some(a), Some(b)), _) => (NumeralSystem::Arabic, (a, b)),
        (_, (Some(a), Some(b))) => (NumeralSystem::Roman, (a, b)),
        ((None, _), (None, _)) => {
            return Err(ClassifyError::NumberingSystemMismatch { pos: left.pos });
        }
        _ => return Err(ClassifyError::NumberingSystemMismatch { pos: right.pos }),
    };

    let operands = Operands {
        system,
        left: ensure_in_range(a, left.pos)?,
        right: ensure_in_range(b, right.pos)?,
    };
    Ok(operands)
}

/// Повторная проверка диапазона 1–10 для уже распознанного значения.
///
/// # Ошибки
///
/// Возвращает [`ClassifyError::OutOfRange`], если значение вне диапазона.
pub fn ensure_in_range(value: i64, pos: usize) -> Result<i64, ClassifyError> {
    if (MIN_OPERAND..=MAX_OPERAND).contains(&value) {
        Ok(value)
    } else {
        Err(ClassifyError::OutOfRange { value, pos })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(text: &str, pos: usize) -> Token<'_> {
        Token::new(text, pos)
    }

    #[test]
    fn arabic_accepts_range() {
        for n in 1..=10 {
            assert_eq!(classify_arabic(&n.to_string()), Some(n));
        }
    }

    #[test]
    fn arabic_rejects_outside_range_and_garbage() {
        assert_eq!(classify_arabic("0"), None);
        assert_eq!(classify_arabic("11"), None);
        assert_eq!(classify_arabic("-3"), None);
        assert_eq!(classify_arabic("abc"), None);
        assert_eq!(classify_arabic("V"), None);
        assert_eq!(classify_arabic(""), None);
        assert_eq!(classify_arabic("99999999999999999999"), None);
    }

    #[test]
    fn arabic_standard_integer_syntax() {
        assert_eq!(classify_arabic("+5"), Some(5));
        assert_eq!(classify_arabic("007"), Some(7));
        assert_eq!(classify_arabic("1.0"), None);
    }

    #[test]
    fn roman_delegates_to_table() {
        assert_eq!(classify_roman("ix"), Some(9));
        assert_eq!(classify_roman("Viii"), Some(8));
        assert_eq!(classify_roman("XI"), None);
        assert_eq!(classify_roman("10"), None);
    }

    #[test]
    fn resolve_arabic_pair() {
        let ops = resolve_operands(tok("3", 0), tok("10", 4)).unwrap();
        assert_eq!(
            ops,
            Operands {
                system: NumeralSystem::Arabic,
                left: 3,
                right: 10,
            }
        );
    }

    #[test]
    fn resolve_roman_pair() {
        let ops = resolve_operands(tok("iii", 0), tok("IV", 6)).unwrap();
        assert_eq!(ops.system, NumeralSystem::Roman);
        assert_eq!((ops.left, ops.right), (3, 4));
    }

    #[test]
    fn resolve_mixed_points_at_right() {
        let err = resolve_operands(tok("5", 0), tok("III", 4)).unwrap_err();
        assert_eq!(err, ClassifyError::NumberingSystemMismatch { pos: 4 });
    }

    #[test]
    fn resolve_unknown_left_points_at_left() {
        let err = resolve_operands(tok("abc", 0), tok("3", 6)).unwrap_err();
        assert_eq!(err.position(), 0);
    }

    #[test]
    fn resolve_out_of_range_is_mismatch() {
        let err = resolve_operands(tok("11", 0), tok("2", 5)).unwrap_err();
        assert!(matches!(err, ClassifyError::NumberingSystemMismatch { .. }));
    }

    #[test]
    fn range_recheck() {
        assert_eq!(ensure_in_range(1, 0), Ok(1));
        assert_eq!(ensure_in_range(10, 0), Ok(10));
        assert_eq!(
            ensure_in_range(0, 3),
            Err(ClassifyError::OutOfRange { value: 0, pos: 3 })
        );
        assert_eq!(
            ensure_in_range(11, 7),
            Err(ClassifyError::OutOfRange { value: 11, pos: 7 })
        );
    }
}
