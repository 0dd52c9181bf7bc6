//! One-shot classification of a route file's row layout.

use std::fmt;

use serde::Serialize;

use crate::config::ParserConfig;

/// The two supported row layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Two-token `<stop> <cost>` rows; data rows list stops between label and cost.
    Professor,
    /// `<label> <Stop1-Stop2-...> ... <cost>` rows with a decorated cost token.
    HyphenChain,
}

impl Layout {
    /// Return a human-readable name for this layout.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Professor => "professor",
            Self::HyphenChain => "hyphen-chain",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of scanning the pre-data section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub layout: Layout,
    /// Index of the first line the parsing pass reads.
    pub data_start: usize,
    /// Index of the sentinel line, if one was found.
    pub sentinel_line: Option<usize>,
}

/// Classify `lines` by scanning from the end of the preamble up to the sentinel.
///
/// Any scanned line that is not exactly `<token> <number>` makes the whole file
/// hyphen-chain. Without a sentinel the scan runs to the end of input and the
/// data section is empty.
pub fn detect_layout<S: AsRef<str>>(lines: &[S], config: &ParserConfig) -> Detection {
    let mut index = config.header_lines.min(lines.len());
    let mut layout = Layout::Professor;

    while index < lines.len() {
        let line = lines[index].as_ref();
        if line.starts_with(config.sentinel.as_str()) {
            break;
        }
        if layout == Layout::Professor && !is_professor_row(line) {
            log::debug!("line {} is not a two-token cost row", index + 1);
            layout = Layout::HyphenChain;
        }
        index += 1;
    }

    let sentinel_line = (index < lines.len()).then_some(index);
    if sentinel_line.is_none() {
        log::warn!(
            "sentinel '{}' not found; no data rows will be read",
            config.sentinel
        );
    }
    log::debug!("detected {} layout", layout);

    Detection {
        layout,
        data_start: index,
        sentinel_line,
    }
}

fn is_professor_row(line: &str) -> bool {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(_), Some(cost), None) => parse_plain_number(cost).is_some(),
        _ => false,
    }
}

/// Parse a finite floating-point number.
pub(crate) fn parse_plain_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}
