use owo_colors::OwoColorize;

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Textgauge".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Readability and sentiment metrics for web articles\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print an indented label/value detail line
pub fn print_detail(label: &str, value: impl std::fmt::Display) {
    eprintln!("  {} {}", format!("{}:", label).dimmed(), value.to_string().bright_white());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print timing information with color coding
pub fn print_timing(label: &str, duration: std::time::Duration) {
    let secs = duration.as_secs_f64();
    if secs < 1.0 {
        eprintln!("  {} {:>8.2}ms", format!("{}:", label).dimmed(), secs * 1000.0);
    } else {
        eprintln!("  {} {}", format!("{}:", label).dimmed(), format!("{:>8.2}s", secs).bright_yellow());
    }
}

/// Print the batch summary, listing every skipped article
pub fn print_batch_summary(outcome: &textgauge_core::PipelineOutcome) {
    eprintln!("\n{}", "═".repeat(60).dimmed());
    eprintln!("{}", "Batch Summary".bold().cyan());
    eprintln!("{}", "═".repeat(60).dimmed());
    print_detail("Processed", outcome.rows.len());
    print_detail("Skipped", outcome.skipped.len());

    for skipped in &outcome.skipped {
        eprintln!(
            "  {} {} {}",
            "-".dimmed(),
            skipped.url_id.bright_white(),
            skipped.reason.to_string().dimmed()
        );
    }
    eprintln!();
}

/// Format file size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
