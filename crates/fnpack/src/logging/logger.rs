use colored::Colorize;

const TAG: &str = "[fnpack]";

pub fn log_section(title: &str) {
    println!("\n{}", "━".repeat(50).bright_black());
    println!("{}", title.bright_blue().bold());
    println!("{}", "━".repeat(50).bright_black());
}

pub fn log_package(message: &str) {
    println!("📦 {} {}", TAG.bright_black(), message);
}

pub fn log_link(message: &str) {
    println!("🔗 {} {}", TAG.bright_black(), message);
}

pub fn log_copy(message: &str) {
    println!("📋 {} {}", TAG.bright_black(), message);
}

pub fn log_info(message: &str) {
    println!("ℹ️ {} {}", TAG.bright_black(), message.blue());
}

pub fn log_success(message: &str) {
    println!("✅ {} {}", TAG.bright_black(), message.green());
}

pub fn log_warning(message: &str) {
    println!("⚠️ {} {}", TAG.bright_black(), message.yellow());
}

pub fn log_error(message: &str) {
    eprintln!("❌ {} {}", TAG.bright_black(), message.red());
}
