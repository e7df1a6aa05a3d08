//! QIC Demo Suite
//!
//! Sample workloads to feed the quality indicator circuit builder, plus the
//! console helpers used by the `demo-qic` binary.
//!
//! - **GHZ**: a CX chain, one interaction per neighbouring pair
//! - **QFT**: all-to-all controlled phases with final swaps
//! - **Brickwork**: alternating layers of CX on even and odd neighbours

pub mod workloads;

use console::style;

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}
