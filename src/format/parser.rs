//! Turns route file lines into fuel-weighted edges.

use serde::Serialize;

use crate::config::ParserConfig;
use crate::types::{EdgeRecord, RouteError, RouteResult, StopId};

use super::detect::{detect_layout, parse_plain_number, Layout};

/// Edges parsed from one route file.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedRoutes {
    /// Layout the file was classified as.
    pub layout: Layout,
    /// Edges in file order, chains expanded into adjacent pairs.
    pub edges: Vec<EdgeRecord>,
    /// Data rows dropped as malformed.
    pub skipped_rows: usize,
    /// Index of the sentinel line, if any.
    pub sentinel_line: Option<usize>,
}

/// Line parser for both supported layouts.
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    config: ParserConfig,
}

impl LineParser {
    /// Create a parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Detect the layout of `lines` and parse every data row.
    ///
    /// Malformed rows are skipped; only a file shorter than `min_lines` fails.
    pub fn parse<S: AsRef<str>>(&self, lines: &[S]) -> RouteResult<ParsedRoutes> {
        if lines.len() < self.config.min_lines {
            return Err(RouteError::MalformedHeader {
                found: lines.len(),
                required: self.config.min_lines,
            });
        }

        let detection = detect_layout(lines, &self.config);
        let mut edges = Vec::new();
        let mut skipped_rows = 0;

        for (index, line) in lines.iter().enumerate().skip(detection.data_start) {
            match self.parse_row(detection.layout, index + 1, line.as_ref()) {
                Ok(row) => edges.extend(row),
                Err(e) => {
                    log::debug!("skipping row: {}", e);
                    skipped_rows += 1;
                }
            }
        }

        log::info!(
            "parsed {} edges ({} layout, {} rows skipped)",
            edges.len(),
            detection.layout,
            skipped_rows
        );

        Ok(ParsedRoutes {
            layout: detection.layout,
            edges,
            skipped_rows,
            sentinel_line: detection.sentinel_line,
        })
    }

    /// Parse a single data row into consecutive-pair edges sharing the row's cost.
    pub fn parse_row(
        &self,
        layout: Layout,
        line: usize,
        text: &str,
    ) -> RouteResult<Vec<EdgeRecord>> {
        let malformed = |reason: String| RouteError::MalformedRow { line, reason };

        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() < 3 {
            return Err(malformed(format!(
                "{} tokens, at least 3 required",
                tokens.len()
            )));
        }
        let cost_token = tokens[tokens.len() - 1];

        let (chain, cost): (Vec<StopId>, Option<f64>) = match layout {
            Layout::HyphenChain => (
                tokens[1]
                    .split(self.config.chain_separator)
                    .filter(|name| !name.is_empty())
                    .map(StopId::from)
                    .collect(),
                parse_plain_number(&strip_cost_decoration(cost_token)),
            ),
            Layout::Professor => (
                tokens[1..tokens.len() - 1]
                    .iter()
                    .map(|&name| StopId::from(name))
                    .collect(),
                parse_plain_number(cost_token),
            ),
        };

        let cost = cost.ok_or_else(|| malformed(format!("unparseable cost '{}'", cost_token)))?;
        if chain.len() < 2 {
            return Err(malformed(format!("chain has {} stops", chain.len())));
        }

        chain
            .windows(2)
            .map(|pair| {
                EdgeRecord::new(pair[0].clone(), pair[1].clone(), cost)
                    .map_err(|e| malformed(e.to_string()))
            })
            .collect()
    }
}

/// Drop every character that is neither an ASCII digit nor a decimal point.
pub fn strip_cost_decoration(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}
