use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use terminal_size::{terminal_size, Height, Width};

use crate::agent::{Message, Role};

pub fn print_kore_header(model: &str, provider: &str) {
    let (width, _) = terminal_size().unwrap_or((Width(80), Height(24)));
    let line = "─".repeat(width.0 as usize);
    println!("{}", line.black().bold());

    let name = "Kore".cyan().bold();
    let version = format!("v{}", env!("CARGO_PKG_VERSION")).black().bold();
    println!("  {} {}", name, version);

    let info = format!("  {}  •  {}", model, provider).cyan();
    println!("{}", info);

    println!("{}", line.black().bold());
}

pub fn print_step(msg: &str) {
    println!("  {} {}", "•".green(), msg);
}

pub fn print_success(msg: &str) {
    println!("  {} {}", "✓".green().bold(), msg.green());
}

pub fn print_warning(msg: &str) {
    println!("  {} {}", "⚠️ ".yellow().bold(), msg.yellow());
}

pub fn print_error(msg: &str) {
    println!("  {} {}", "❌".red().bold(), msg.red());
}

pub fn print_thinking(msg: &str) {
    println!("  {} {}...", "∴".magenta(), msg);
}

/// Print one transcript line, labelled by role
pub fn print_message(agent_name: &str, message: &Message) {
    match message.role {
        Role::User => println!("\n{}: {}", "You".blue().bold(), message.content),
        Role::Assistant => println!("\n{}: {}", agent_name.green().bold(), message.content),
        Role::System | Role::Tool => {}
    }
}

/// Spinner shown while waiting on the model
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.magenta} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
