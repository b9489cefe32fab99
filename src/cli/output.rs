//! Output formatting and progress spinners for the CLI

use std::time::Duration;

use anyhow::{Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};

/// Style shared by every spinner
pub fn spinner_style() -> Result<ProgressStyle> {
    ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg} [{elapsed}]")
        .map_err(|e| anyhow!("invalid spinner template: {e}"))
}

/// Start a ticking spinner with an already built style
pub fn start_spinner(style: ProgressStyle, message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner()
        .with_style(style)
        .with_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Create a ticking spinner for a blocking computation
pub fn create_spinner(message: &str) -> Result<ProgressBar> {
    Ok(start_spinner(spinner_style()?, message))
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(549_946), "549,946");
        assert_eq!(format_number(12_345_678), "12,345,678");
    }
}
