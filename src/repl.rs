//! Интерактивный цикл: приглашение, чтение строки, вычисление, вывод.
//!
//! Цикл не завершает процесс сам: ошибка возвращается вызывающему коду,
//! а [`ErrorPolicy`] решает, прерывать ли чтение после ошибки в строке.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::{CalcError, evaluate};

/// Приглашение перед каждой строкой.
pub const PROMPT: &str = "Введите выражение (или 'exit' для выхода): ";
/// Сообщение при выходе по команде.
pub const FAREWELL: &str = "Выход из программы. До свидания!";

/// Реакция цикла на ошибку в строке ввода.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Сообщить об ошибке и завершить цикл с ошибкой.
    #[default]
    Halt,
    /// Сообщить об ошибке и запросить следующую строку.
    Continue,
}

/// Команда, введённая пользователем.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `exit` или `quit` в любом регистре.
    Exit,
    /// Выражение для вычисления (без окружающих пробелов).
    Evaluate(&'a str),
}

impl<'a> Command<'a> {
    /// Распознаёт команду в строке ввода.
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let input = line.trim();
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            Self::Exit
        } else {
            Self::Evaluate(input)
        }
    }
}

/// Цикл чтения и вычисления поверх произвольных потоков ввода и вывода.
pub struct Repl<R, W> {
    input: R,
    output: W,
    policy: ErrorPolicy,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// Создаёт цикл с заданной политикой ошибок.
    pub const fn new(input: R, output: W, policy: ErrorPolicy) -> Self {
        Self {
            input,
            output,
            policy,
        }
    }

    /// Возвращает поток вывода.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Запускает цикл до команды выхода или первой неустранимой ошибки.
    ///
    /// Ошибки вычисления уже выведены в поток вывода к моменту возврата;
    /// [`CalcError::Output`] не выводится, так как писать некуда.
    ///
    /// # Ошибки
    ///
    /// - [`CalcError::Input`] / [`CalcError::EndOfInput`], если строку не
    ///   удалось прочитать.
    /// - [`CalcError::Output`] при ошибке записи.
    /// - Ошибка строки при [`ErrorPolicy::Halt`].
    pub fn run(&mut self) -> Result<(), CalcError> {
        info!(policy = ?self.policy, "калькулятор запущен");
        let mut buf = Vec::new();

        loop {
            self.prompt().map_err(CalcError::Output)?;

            // Строка без завершающего перевода строки считается концом ввода
            buf.clear();
            let failure = match self.input.read_until(b'\n', &mut buf) {
                Ok(0) => Some(CalcError::EndOfInput),
                Ok(_) if !buf.ends_with(b"\n") => Some(CalcError::EndOfInput),
                Ok(_) => None,
                Err(err) => Some(CalcError::Input(err)),
            };
            if let Some(err) = failure {
                self.report("", &err).map_err(CalcError::Output)?;
                return Err(err);
            }

            // Неверные байты UTF-8 отклоняются как обычные неверные операнды
            let line = String::from_utf8_lossy(&buf);
            let input = match Command::parse(&line) {
                Command::Exit => {
                    info!("выход по команде");
                    writeln!(self.output, "{FAREWELL}").map_err(CalcError::Output)?;
                    return Ok(());
                }
                Command::Evaluate(input) => input,
            };

            match evaluate(input) {
                Ok(result) => {
                    writeln!(self.output, "Результат: {result}").map_err(CalcError::Output)?;
                }
                Err(err) => {
                    warn!(kind = ?err.kind(), input, "строка отклонена: {err}");
                    self.report(input, &err).map_err(CalcError::Output)?;
                    if self.policy == ErrorPolicy::Halt || !err.is_recoverable() {
                        return Err(err);
                    }
                }
            }

            writeln!(self.output).map_err(CalcError::Output)?;
        }
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.output, "{PROMPT}")?;
        self.output.flush()
    }

    /// Выводит ошибку с указанием позиции в исходной строке.
    fn report(&mut self, input: &str, error: &CalcError) -> io::Result<()> {
        if let Some(pos) = error.position() {
            // Показываем исходную строку и указатель на ошибку
            writeln!(self.output, "  {input}")?;
            let column = input.get(..pos).map_or(pos, |head| head.chars().count());
            writeln!(self.output, "  {}^", " ".repeat(column))?;
        }
        writeln!(self.output, "Ошибка: {error}")?;
        self.output.flush()
    }
}
