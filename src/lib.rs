//! # roman_calc
//!
//! Консольный калькулятор для двух операндов в одной системе счисления.
//!
//! Поддерживает:
//! - Арабские числа от 1 до 10
//! - Римские числа от I до X (без учёта регистра)
//! - Бинарные операции: `+`, `-`, `*`, `/` (деление целочисленное)
//!
//! Результат выводится в той же системе счисления, что и операнды.
//! Римский результат обязан быть положительным, арабский не проверяется.
//!
//! # Пример использования
//!
//! ```
//! use roman_calc::evaluate;
//!
//! assert_eq!(evaluate("3 + 4").unwrap().to_string(), "7");
//! assert_eq!(evaluate("III + IV").unwrap().to_string(), "VII");
//! assert_eq!(evaluate("1 - 5").unwrap().to_string(), "-4");
//! assert!(evaluate("IV - V").is_err());
//! ```

pub mod classify;
pub mod config;
pub mod expression;
pub mod logger;
pub mod parser;
pub mod repl;
pub mod roman;
pub mod token;

use std::fmt::Display;
use std::io;

use thiserror::Error;
use tracing::debug;

use crate::classify::{ClassifyError, NumeralSystem};
use crate::expression::{EvalError, Operator};

/// Общий тип ошибки калькулятора.
#[derive(Debug, Error)]
pub enum CalcError {
    /// Не удалось прочитать строку ввода.
    #[error("Не удалось прочитать ввод")]
    Input(#[source] io::Error),

    /// Ввод закончился до команды выхода.
    #[error("Не удалось прочитать ввод")]
    EndOfInput,

    /// Не удалось записать в поток вывода.
    #[error("Ошибка вывода: {0}")]
    Output(#[source] io::Error),

    /// Строка не состоит из трёх полей.
    #[error("{0}")]
    Parse(#[from] parser::ParseError),

    /// Операнды не распознаны или относятся к разным системам.
    #[error("{0}")]
    Classify(#[from] ClassifyError),

    /// Ошибка вычисления.
    #[error("{0}")]
    Eval(#[from] EvalError),

    /// Римский результат меньше единицы.
    #[error("Результат в римской системе должен быть положительным.")]
    NonPositiveRomanResult(i64),
}

/// Вид ошибки, не зависящий от её текста.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Не удалось прочитать ввод или он закончился.
    InputReadFailure,
    /// Не удалось записать вывод.
    OutputWriteFailure,
    /// В строке не три поля.
    FieldCount,
    /// Операнды не распознаны или из разных систем.
    NumberingSystemMismatch,
    /// Операнд вне диапазона 1–10.
    OutOfRange,
    /// Деление на ноль.
    DivisionByZero,
    /// Оператор вне `+ - * /`.
    UnsupportedOperator,
    /// Целочисленное переполнение.
    Overflow,
    /// Римский результат меньше единицы.
    NonPositiveRomanResult,
}

impl CalcError {
    /// Возвращает вид ошибки.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Input(_) | Self::EndOfInput => ErrorKind::InputReadFailure,
            Self::Output(_) => ErrorKind::OutputWriteFailure,
            Self::Parse(_) => ErrorKind::FieldCount,
            Self::Classify(ClassifyError::NumberingSystemMismatch { .. }) => {
                ErrorKind::NumberingSystemMismatch
            }
            Self::Classify(ClassifyError::OutOfRange { .. }) => ErrorKind::OutOfRange,
            Self::Eval(EvalError::DivisionByZero) => ErrorKind::DivisionByZero,
            Self::Eval(EvalError::UnsupportedOperator(_)) => ErrorKind::UnsupportedOperator,
            Self::Eval(EvalError::Overflow) => ErrorKind::Overflow,
            Self::NonPositiveRomanResult(_) => ErrorKind::NonPositiveRomanResult,
        }
    }

    /// Возвращает позицию ошибки в исходной строке, если она известна.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Parse(pe) => pe.position(),
            Self::Classify(ce) => Some(ce.position()),
            Self::Input(_)
            | Self::EndOfInput
            | Self::Output(_)
            | Self::Eval(_)
            | Self::NonPositiveRomanResult(_) => None,
        }
    }

    /// Можно ли продолжать чтение ввода после этой ошибки.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Input(_) | Self::EndOfInput | Self::Output(_))
    }
}

/// Результат вычисления вместе с системой счисления операндов.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Система счисления, в которой выводится значение.
    pub system: NumeralSystem,
    /// Значение результата.
    pub value: i64,
}

impl Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.system {
            NumeralSystem::Arabic => write!(f, "{}", self.value),
            NumeralSystem::Roman => f.write_str(&roman::arabic_to_roman(self.value)),
        }
    }
}

/// Вычисляет строку вида `<операнд> <оператор> <операнд>`.
///
/// # Ошибки
///
/// Возвращает [`CalcError`] при неверном формате строки, неверных
/// операндах, ошибке вычисления или неположительном римском результате.
///
/// # Примеры
///
/// ```
/// use roman_calc::{ErrorKind, evaluate};
///
/// assert_eq!(evaluate("10 / 3").unwrap().value, 3);
/// assert_eq!(evaluate("5 + III").unwrap_err().kind(), ErrorKind::NumberingSystemMismatch);
/// ```
pub fn evaluate(input: &str) -> Result<Evaluation, CalcError> {
    let line = parser::parse(input)?;
    let operands = classify::resolve_operands(line.left, line.right)?;
    debug!(system = %operands.system, left = operands.left, right = operands.right, "operands resolved");

    let operator: Operator = line.operator.text.parse()?;
    let value = operator.apply(operands.left, operands.right)?;
    debug!(%operator, value, "evaluated");

    if operands.system == NumeralSystem::Roman && value < 1 {
        return Err(CalcError::NonPositiveRomanResult(value));
    }

    Ok(Evaluation {
        system: operands.system,
        value,
    })
}
