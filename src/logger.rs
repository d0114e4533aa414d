//! Журнал работы калькулятора.
//!
//! Сообщения пишутся в stderr, чтобы stdout содержал только диалог с
//! пользователем. Уровень задаётся `RUST_LOG`, а без него берётся из
//! [`Config::log_level`].

use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Строит фильтр: `RUST_LOG`, иначе уровень из настроек.
fn filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Устанавливает глобальный подписчик `tracing`.
///
/// Повторная установка не считается ошибкой: останется первый подписчик.
pub fn init(config: &Config) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_ansi(false)
        .compact()
        .with_filter(filter(config));

    if Registry::default().with(layer).try_init().is_err() {
        tracing::debug!("подписчик журнала уже установлен");
    }
}
