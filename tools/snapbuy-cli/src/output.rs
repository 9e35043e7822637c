//! Output formatting for the CLI.

use console::style;
use snapbuy_commerce::catalog::Rating;
use snapbuy_commerce::Money;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        println!("  {}", format_row(cols, widths));
    }

    /// Print a right-aligned amount line of a price summary.
    pub fn amount(&self, label: &str, amount: &str, emphasize: bool) {
        if self.json {
            return;
        }
        let line = format!("  {:<24}{:>14}", label, amount);
        if emphasize {
            println!("{}", style(line).bold());
        } else {
            println!("{}", line);
        }
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Pad columns to their widths. Text longer than its width is cut with an ellipsis.
pub fn format_row(cols: &[&str], widths: &[usize]) -> String {
    let formatted: Vec<String> = cols
        .iter()
        .zip(widths.iter())
        .map(|(col, width)| format!("{:width$}", truncate(col, *width), width = width))
        .collect();
    formatted.join("  ").trim_end().to_string()
}

/// Shorten `text` to at most `width` characters.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut short: String = text.chars().take(width.saturating_sub(1)).collect();
    short.push('…');
    short
}

/// Format a discount line, shown as a negative amount.
pub fn format_discount(discount: Money) -> String {
    if discount.is_zero() {
        discount.display()
    } else {
        format!("-{}", discount.display())
    }
}

/// Format a rating as "4.1 (259)".
pub fn format_rating(rating: &Rating) -> String {
    format!("{:.1} ({})", rating.rate, rating.count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapbuy_commerce::Currency;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Backpack", 10), "Backpack");
        assert_eq!(truncate("Foldsack Backpack", 8), "Foldsac…");
    }

    #[test]
    fn test_format_row() {
        assert_eq!(format_row(&["1", "Mug"], &[4, 6]), "1     Mug");
    }

    #[test]
    fn test_format_discount() {
        assert_eq!(format_discount(Money::new(3540, Currency::INR)), "-\u{20b9}35.40");
        assert_eq!(format_discount(Money::zero(Currency::INR)), "\u{20b9}0.00");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(&Rating::new(4.1, 259)), "4.1 (259)");
    }
}
