use alloy::primitives::B256;
use chrono::Local;
use colored::*;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Base URL for confirmed-transaction links. These links are the run's one
/// externally-meaningful output.
pub const ETHERSCAN_TX_BASE: &str = "https://sepolia.etherscan.io/tx/";

pub fn etherscan_tx_url(hash: B256) -> String {
    format!("{}{}", ETHERSCAN_TX_BASE, hash)
}

pub struct Logger;

impl Logger {
    fn get_logs_dir() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("logs")
    }

    fn get_log_file_name() -> PathBuf {
        let date = Local::now().format("%Y-%m-%d").to_string();
        Self::get_logs_dir().join(format!("pipeline-{}.log", date))
    }

    fn ensure_logs_dir() {
        let logs_dir = Self::get_logs_dir();
        if !logs_dir.exists() {
            let _ = fs::create_dir_all(&logs_dir);
        }
    }

    fn write_to_file(message: &str) {
        if let Err(_) = (|| -> std::io::Result<()> {
            Self::ensure_logs_dir();
            let log_file = Self::get_log_file_name();
            let timestamp = Local::now().to_rfc3339();
            let log_entry = format!("[{}] {}\n", timestamp, message);

            let mut file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)?;
            file.write_all(log_entry.as_bytes())?;
            Ok(())
        })() {
            // Silently fail to avoid infinite loops
        }
    }

    pub fn format_address(address: &str) -> String {
        if address.len() >= 10 {
            format!("{}...{}", &address[..6], &address[address.len() - 4..])
        } else {
            address.to_string()
        }
    }

    pub fn header(title: &str) {
        println!("\n{}", "━".repeat(70).cyan());
        println!("{}", format!("  {}", title).cyan().bold());
        println!("{}\n", "━".repeat(70).cyan());
        Self::write_to_file(&format!("HEADER: {}", title));
    }

    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
        Self::write_to_file(&format!("INFO: {}", message));
    }

    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
        Self::write_to_file(&format!("SUCCESS: {}", message));
    }

    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
        Self::write_to_file(&format!("WARNING: {}", message));
    }

    pub fn error(message: &str) {
        println!("{} {}", "✗".red(), message);
        Self::write_to_file(&format!("ERROR: {}", message));
    }

    /// Log the explorer link for a mined transaction.
    pub fn tx_confirmed(label: &str, hash: B256) {
        let url = etherscan_tx_url(hash);
        println!(
            "{} {}",
            "✓".green(),
            format!("{} confirmed: {}", label, url).green()
        );
        Self::write_to_file(&format!("CONFIRMED: {}: {}", label, url));
    }

    pub fn separator() {
        println!("{}", "─".repeat(70).bright_black());
    }
}
