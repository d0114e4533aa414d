//! Преобразование между римскими и арабскими числами.
//!
//! Входные операнды ограничены набором `I`..`X`, а результат может выйти за
//! пределы десяти (например, `X * X`), поэтому таблица кодирования доходит
//! до `C`.
//!
//! # Примеры
//!
//! ```
//! use roman_calc::roman::{arabic_to_roman, roman_to_arabic};
//!
//! assert_eq!(roman_to_arabic("vii"), Some(7));
//! assert_eq!(arabic_to_roman(49), "XLIX");
//! ```

/// Допустимые римские операнды и их значения.
pub const ROMAN_DIGITS: [(&str, i64); 10] = [
    ("I", 1),
    ("II", 2),
    ("III", 3),
    ("IV", 4),
    ("V", 5),
    ("VI", 6),
    ("VII", 7),
    ("VIII", 8),
    ("IX", 9),
    ("X", 10),
];

/// Пары (значение, символ) в порядке убывания значения.
///
/// Порядок важен: кодирование жадно берёт первую подходящую пару.
pub const ROMAN_ENCODING: [(i64, &str); 9] = [
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Ищет римское число в таблице операндов без учёта регистра.
///
/// Возвращает `None`, если токен не входит в набор `I`..`X`.
#[must_use]
pub fn roman_to_arabic(token: &str) -> Option<i64> {
    let upper = token.to_uppercase();
    ROMAN_DIGITS
        .iter()
        .find(|(symbol, _)| *symbol == upper)
        .map(|&(_, value)| value)
}

/// Записывает положительное число римскими цифрами.
///
/// Для `n <= 0` возвращает пустую строку: вызывающий код обязан отсечь
/// неположительные значения заранее. Верхняя граница не проверяется,
/// значения больше 100 записываются повторением `C`.
#[must_use]
pub fn arabic_to_roman(n: i64) -> String {
    let mut remaining = n;
    let mut roman = String::new();

    for &(value, symbol) in &ROMAN_ENCODING {
        while remaining >= value {
            roman.push_str(symbol);
            remaining -= value;
        }
    }

    roman
}
