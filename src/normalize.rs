use once_cell::sync::Lazy;
use regex::Regex;

/// A commented `console.log` call whose visible text ends with a trailing
/// comma, i.e. the call continues on the following lines.
static TRIGGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^/]*//\s*console\.log.*,$").unwrap());

/// Line already starts with `//` (ignoring leading whitespace).
static COMMENTED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*//").unwrap());

/// Result of one normalization pass.
#[derive(Debug, PartialEq, Eq)]
pub struct Normalized {
    pub lines: Vec<String>,
    /// Multi-line blocks that were found (trigger lines matched).
    pub blocks: usize,
    /// Continuation lines that received a `//` prefix.
    pub commented: usize,
}

/// Comment out the continuation lines of partially commented multi-line
/// `console.log(...)` calls.
///
/// A trigger line (commented `console.log` ending in a comma) is emitted
/// unchanged; every following line gets a `//` prefix until one containing
/// `);` closes the call, or until end of input. Lines that are already
/// commented or blank are left alone, which makes repeated runs a no-op.
///
/// Output always has exactly as many lines as the input.
pub fn normalize(lines: &[&str]) -> Normalized {
    let mut out = Vec::with_capacity(lines.len());
    let mut blocks = 0;
    let mut commented = 0;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        if TRIGGER.is_match(line) {
            blocks += 1;
            out.push(line.to_string());
            i += 1;

            // Consume the rest of the call. No nested trigger detection in
            // here: everything up to the closing `);` belongs to this block.
            while i < lines.len() {
                let next = lines[i];

                if !COMMENTED.is_match(next) && !next.trim().is_empty() {
                    out.push(format!("//{next}"));
                    commented += 1;
                } else {
                    out.push(next.to_string());
                }

                if next.contains(");") {
                    break;
                }
                i += 1;
            }
        } else {
            out.push(line.to_string());
        }

        i += 1;
    }

    Normalized {
        lines: out,
        blocks,
        commented,
    }
}
