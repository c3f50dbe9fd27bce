//! Output formatting utilities.
//! 输出格式化工具。
//!
//! Status lines are colored only when the stream is a terminal, so piped
//! `--json` or report output stays plain.

use std::io::{self, IsTerminal};

fn paint(color: u8, text: &str, tty: bool) -> String {
    if tty {
        format!("\x1b[{color}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

/// Print a success message in green.
/// 以绿色打印成功信息。
pub fn success(msg: &str) {
    println!("{}", paint(32, msg, io::stdout().is_terminal()));
}

/// Print a warning message in yellow.
/// 以黄色打印警告信息。
pub fn warning(msg: &str) {
    eprintln!("{} {msg}", paint(33, "warning:", io::stderr().is_terminal()));
}

/// Print an error message in red.
/// 以红色打印错误信息。
pub fn error(msg: &str) {
    eprintln!("{} {msg}", paint(31, "error:", io::stderr().is_terminal()));
}

/// Print an info message in blue.
/// 以蓝色打印提示信息。
pub fn info(msg: &str) {
    println!("{} {msg}", paint(34, "info:", io::stdout().is_terminal()));
}
