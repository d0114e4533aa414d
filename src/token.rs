//! Разбиение строки ввода на поля, разделённые пробельными символами.
//!
//! # Пример
//!
//! ```
//! use roman_calc::token::Tokenizer;
//!
//! let fields: Vec<&str> = Tokenizer::new("III  +\tIV").map(|t| t.text).collect();
//! assert_eq!(fields, ["III", "+", "IV"]);
//! ```

/// Поле строки ввода вместе с его позицией.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token<'a> {
    /// Текст поля.
    pub text: &'a str,
    /// Позиция начала поля (в байтах от начала строки).
    pub pos: usize,
}

impl<'a> Token<'a> {
    /// Создаёт новое поле с позицией.
    pub const fn new(text: &'a str, pos: usize) -> Self {
        Self { text, pos }
    }
}

/// Итератор по полям входной строки.
///
/// Любая последовательность пробельных символов считается одним
/// разделителем.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Создаёт новый токенизатор для входной строки.
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let byte_len: usize = self
            .input
            .chars()
            .take_while(|&c| predicate(c))
            .map(char::len_utf8)
            .sum();

        let (consumed, rest) = self.input.split_at(byte_len);
        self.pos += byte_len;
        self.input = rest;
        consumed
    }

    fn skip_whitespace(&mut self) {
        self.advance_while(char::is_whitespace);
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();

        if self.input.is_empty() {
            return None;
        }

        let start_pos = self.pos;
        let text = self.advance_while(|c| !c.is_whitespace());
        Some(Token::new(text, start_pos))
    }
}
