use std::fmt::Write;

use console::Style;
use similar::{ChangeTag, TextDiff};

fn gutter(idx: Option<usize>) -> String {
    match idx {
        None => "    ".to_string(),
        Some(idx) => format!("{:<4}", idx + 1),
    }
}

/// Renders an inline colorized diff of what a run would change at the
/// destination. Empty when nothing would change.
#[must_use]
pub fn render(old: &str, new: &str) -> String {
    let diff = TextDiff::from_lines(old, new);
    let mut out = String::new();

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            let _ = writeln!(out, "{:-^80}", "-");
        }
        for op in group {
            for change in diff.iter_inline_changes(op) {
                let (sign, style) = match change.tag() {
                    ChangeTag::Delete => ("-", Style::new().red()),
                    ChangeTag::Insert => ("+", Style::new().green()),
                    ChangeTag::Equal => (" ", Style::new().dim()),
                };
                let _ = write!(
                    out,
                    "{}{} |{}",
                    style.apply_to(gutter(change.old_index())).dim(),
                    style.apply_to(gutter(change.new_index())).dim(),
                    style.apply_to(sign).bold(),
                );
                for (emphasized, value) in change.iter_strings_lossy() {
                    if emphasized {
                        let _ = write!(out, "{}", style.apply_to(value).underlined().on_black());
                    } else {
                        let _ = write!(out, "{}", style.apply_to(value));
                    }
                }
                if change.missing_newline() {
                    out.push('\n');
                }
            }
        }
    }

    out
}
