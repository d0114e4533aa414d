//! Параметры командной строки.

use clap::Parser;

use crate::repl::ErrorPolicy;

/// Калькулятор арабских (1–10) и римских (I–X) чисел.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Не завершать работу при ошибке в строке, а запросить следующую
    #[arg(short, long)]
    pub keep_going: bool,

    /// Уровень журнала по умолчанию (переопределяется RUST_LOG)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Настройки запуска, собранные из аргументов.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Реакция на ошибку в строке ввода.
    pub policy: ErrorPolicy,
    /// Директива фильтра журнала.
    pub log_level: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let policy = if args.keep_going {
            ErrorPolicy::Continue
        } else {
            ErrorPolicy::Halt
        };

        Self {
            policy,
            log_level: args.log_level,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: ErrorPolicy::default(),
            log_level: "warn".to_string(),
        }
    }
}
