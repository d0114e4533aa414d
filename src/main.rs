use std::io;

use clap::Parser;

use roman_calc::CalcError;
use roman_calc::config::{Args, Config};
use roman_calc::logger;
use roman_calc::repl::Repl;

fn main() {
    let config = Config::from(Args::parse());
    logger::init(&config);

    let mut repl = Repl::new(io::stdin().lock(), io::stdout().lock(), config.policy);

    match repl.run() {
        Ok(()) => {}
        // Остальные ошибки цикл уже вывел сам
        Err(e @ CalcError::Output(_)) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
        Err(_) => std::process::exit(1),
    }
}
