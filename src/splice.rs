use regex::Regex;

/// The replacement template and style block appended after the extracted
/// script block, byte-identical on every run.
pub const REPLACEMENT: &str = include_str!("../templates/admin_dashboard.vue");

pub const DEFAULT_OPEN: &str = "<script setup>";
pub const DEFAULT_CLOSE: &str = "</script>";

/// Returns a regex matching a region bounded by `open` and `close`, markers
/// included. The region may span multiple lines and the match is non-greedy,
/// so it ends at the first `close` after `open`.
pub fn region_regex(open: &str, close: &str) -> Result<Regex, regex::Error> {
    Regex::new(format!(r"(?s){}.*?{}", regex::escape(open), regex::escape(close)).as_str())
}

/// The first delimited region of `content`, or `None` if the document
/// contains no such region. Later regions are ignored.
pub fn extract_region<'a>(region: &Regex, content: &'a str) -> Option<&'a str> {
    region.find(content).map(|m| m.as_str())
}

/// Splices an extracted block with the replacement markup/style.
pub fn splice(block: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(block.len() + replacement.len());
    out.push_str(block);
    out.push_str(replacement);
    out
}
