//! Разбор строки ввода в три поля: операнд, оператор, операнд.
//!
//! На этом этапе поля не интерпретируются: операнды классифицируются в
//! [`crate::classify`], оператор проверяется только при вычислении.
//!
//! # Примеры
//!
//! ```
//! use roman_calc::parser::parse;
//!
//! let line = parse("V * II").unwrap();
//! assert_eq!(line.left.text, "V");
//! assert_eq!(line.operator.text, "*");
//! assert_eq!(line.right.text, "II");
//! ```

use thiserror::Error;

use crate::token::{Token, Tokenizer};

/// Ожидаемое число полей в строке.
pub const FIELD_COUNT: usize = 3;

/// Ошибки, возникающие при разборе строки.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Полей меньше трёх.
    #[error("Строка не является математической операцией.")]
    NotAnExpression {
        /// Сколько полей найдено.
        found: usize,
    },

    /// Полей больше трёх.
    #[error("Формат математической операции не удовлетворяет заданию.")]
    TooManyFields {
        /// Позиция первого лишнего поля.
        pos: usize,
    },
}

impl ParseError {
    /// Возвращает позицию ошибки, если она известна.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::NotAnExpression { .. } => None,
            Self::TooManyFields { pos } => Some(*pos),
        }
    }
}

/// Разобранная строка: два операнда и оператор между ними.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// Первый операнд.
    pub left: Token<'a>,
    /// Оператор.
    pub operator: Token<'a>,
    /// Второй операнд.
    pub right: Token<'a>,
}

/// Разбивает строку на ровно три поля.
///
/// # Ошибки
///
/// Возвращает [`ParseError`], если полей меньше или больше трёх.
pub fn parse(input: &str) -> Result<ParsedLine<'_>, ParseError> {
    let mut tokens = Tokenizer::new(input);

    let mut fields = [Token::new("", 0); FIELD_COUNT];
    for (found, slot) in fields.iter_mut().enumerate() {
        *slot = tokens
            .next()
            .ok_or(ParseError::NotAnExpression { found })?;
    }

    if let Some(extra) = tokens.next() {
        return Err(ParseError::TooManyFields { pos: extra.pos });
    }

    let [left, operator, right] = fields;
    Ok(ParsedLine {
        left,
        operator,
        right,
    })
}
