//! Console output helpers

use console::style;

/// Banner printed at the start of a run
pub fn header(text: &str) {
    let rule = "=".repeat(60);
    println!();
    println!("{}", style(&rule).magenta().bold());
    println!("{}", style(format!("{:^60}", text)).magenta().bold());
    println!("{}", style(&rule).magenta().bold());
    println!();
}

pub fn success(text: &str) {
    println!("{} {}", style("✓").green(), text);
}

pub fn warning(text: &str) {
    println!("{} {}", style("⚠").yellow(), style(text).yellow());
}

pub fn info(text: &str) {
    println!("{} {}", style("ℹ").cyan(), text);
}

pub fn bold(text: &str) -> String {
    style(text).bold().to_string()
}
