//! Pretty-printing for suggestion lists.
//!
//! One header line describing what the query resolved to, then one row per
//! style: label, preview, and the copyable markup. The markup column is the
//! part users select, so it goes last where a double-click-drag picks it up
//! cleanly.

use colored::Colorize;
use dstamp_core::Suggestion;

/// Width of the label column: the longest label in the set.
fn label_width(suggestions: &[Suggestion]) -> usize {
    suggestions.iter().map(|s| s.label.len()).max().unwrap_or(0)
}

/// Width of the preview column: the longest preview in the set.
fn preview_width(suggestions: &[Suggestion]) -> usize {
    suggestions.iter().map(|s| s.preview.len()).max().unwrap_or(0)
}

/// Print the resolved-moment header and the suggestion rows.
pub fn print_suggestions(description: &str, suggestions: &[Suggestion]) {
    println!("{} {}", "▶".blue(), description.green().bold());

    let labels = label_width(suggestions);
    let previews = preview_width(suggestions);
    for s in suggestions {
        // Pad before coloring: ANSI escapes would throw off the width.
        println!(
            "  {} {:<labels$}  {}  {}",
            "→".cyan(),
            s.label,
            format!("{:<previews$}", s.preview).green(),
            s.markup.yellow(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn suggestions() -> Vec<Suggestion> {
        vec![
            Suggestion {
                label: "Relative".to_string(),
                preview: "in 5 minutes".to_string(),
                markup: "<t:1754468700:R>".to_string(),
            },
            Suggestion {
                label: "Long date with day of the week".to_string(),
                preview: "Thursday, August 6, 2026 12:05 PM".to_string(),
                markup: "<t:1754468700:F>".to_string(),
            },
        ]
    }

    #[test]
    fn test_label_width_is_longest_label() {
        assert_eq!(label_width(&suggestions()), 30);
        assert_eq!(label_width(&[]), 0);
    }

    #[test]
    fn test_preview_width_is_longest_preview() {
        assert_eq!(preview_width(&suggestions()), 33);
    }
}
