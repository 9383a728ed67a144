//! Terminal styling utilities for banners, cards and notices

use console::{style, Emoji};

use crate::flows::Flow;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static COMPASS: Emoji<'_, '_> = Emoji("🧭 ", "");
pub static LINK: Emoji<'_, '_> = Emoji("🔗 ", "");
pub static CLOCK: Emoji<'_, '_> = Emoji("⏱️  ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    let banner = r#"
    ┌─┐┌─┐┌┬┐┬ ┬┬ ┬┬┌─┐┌─┐
    ├─┘├─┤ │ ├─┤││││└─┐├┤
    ┴  ┴ ┴ ┴ ┴ ┴└┴┘┴└─┘└─┘
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {} {}",
        style("→").magenta().bold(),
        style("Find the career that fits, then the road to it").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the run configuration card
pub fn print_config(flow: Flow, backend_url: &str, timeout_secs: u64) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);

    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style("⚙️  Configuration").cyan().bold(),
        " ".repeat(box_width - 20)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Flow:    {:<38}│",
        COMPASS,
        truncate_string(flow.title(), 37)
    );
    println!(
        "    │  {} Backend: {:<38}│",
        LINK,
        truncate_string(backend_url, 37)
    );
    println!(
        "    │  {} Timeout: {:<38}│",
        CLOCK,
        format!("{}s", timeout_secs)
    );
    println!("    └{}┘", line);
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("All set. Go build it!").green().bold()
    );
    println!();
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let tail: String = s
            .chars()
            .rev()
            .take(max_len - 3)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("...{}", tail)
    }
}
