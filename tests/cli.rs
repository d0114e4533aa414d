//! Проверка кодов завершения собранного бинарника.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_roman_calc"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("не удалось запустить калькулятор");

    child
        .stdin
        .take()
        .expect("stdin не перехвачен")
        .write_all(stdin.as_bytes())
        .expect("не удалось записать в stdin");

    child.wait_with_output().expect("калькулятор не завершился")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn exit_command_exits_zero() {
    let output = run_with_stdin(&[], "3 + 4\nexit\n");
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Результат: 7"));
    assert!(stdout(&output).contains("До свидания!"));
}

#[test]
fn quit_is_case_insensitive() {
    let output = run_with_stdin(&[], "QuIt\n");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn validation_error_exits_one() {
    let output = run_with_stdin(&[], "5 + III\n3 + 4\nexit\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Ошибка:"));
    assert!(!stdout(&output).contains("Результат"));
}

#[test]
fn roman_non_positive_exits_one() {
    let output = run_with_stdin(&[], "IV - V\n");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn arabic_negative_exits_zero() {
    let output = run_with_stdin(&[], "1 - 5\nexit\n");
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Результат: -4"));
}

#[test]
fn end_of_input_exits_one() {
    let output = run_with_stdin(&[], "2 * 3\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Результат: 6"));
    assert!(stdout(&output).contains("Ошибка: Не удалось прочитать ввод"));
}

#[test]
fn keep_going_survives_bad_lines() {
    let output = run_with_stdin(&["--keep-going"], "5 + III\nV + V\nexit\n");
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Результат: X"));
}

#[test]
fn logs_go_to_stderr() {
    let output = run_with_stdin(&["--log-level", "debug"], "1 + 2\nexit\n");
    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout(&output).contains("evaluated"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("evaluated"));
}
