//! Reads route files from disk into a RouteGraph.

use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::ParserConfig;
use crate::graph::{GraphBuilder, RouteGraph};
use crate::types::{RouteError, RouteResult};

use super::{Layout, LineParser, ParsedRoutes};

/// Result of a lenient load: always a graph, possibly empty.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Graph built from whatever rows parsed.
    pub graph: RouteGraph,
    /// Raw input lines, empty if the file could not be read.
    pub lines: Vec<String>,
    /// Detected layout, `None` when parsing never started.
    pub layout: Option<Layout>,
    /// Index of the sentinel line, if one was found.
    pub sentinel_line: Option<usize>,
    /// Data rows dropped as malformed.
    pub skipped_rows: usize,
    /// File-level problem that was recovered from with an empty graph.
    pub notice: Option<RouteError>,
}

/// Reader for route text files.
#[derive(Debug, Clone, Default)]
pub struct RouteReader {
    parser: LineParser,
}

impl RouteReader {
    /// Create a reader with the given parser configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self {
            parser: LineParser::new(config),
        }
    }

    /// Read every line of `path`.
    pub fn read_lines(path: &Path) -> RouteResult<Vec<String>> {
        let file = std::fs::File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => RouteError::ResourceNotFound(path.to_path_buf()),
            _ => RouteError::Io(e),
        })?;
        Self::lines_from(BufReader::new(file))
    }

    fn lines_from(reader: impl BufRead) -> RouteResult<Vec<String>> {
        Ok(reader.lines().collect::<Result<Vec<_>, _>>()?)
    }

    /// Parse a route file, failing on a missing or short file.
    pub fn read_from_file(&self, path: &Path) -> RouteResult<ParsedRoutes> {
        let lines = Self::read_lines(path)?;
        self.parser.parse(&lines)
    }

    /// Parse route text from any buffered reader.
    pub fn read_from(&self, reader: impl BufRead) -> RouteResult<ParsedRoutes> {
        let lines = Self::lines_from(reader)?;
        self.parser.parse(&lines)
    }

    /// Load a route file into a graph, recovering from file-level problems.
    ///
    /// A missing, unreadable or too short file yields an empty graph and a
    /// `notice` describing what went wrong.
    pub fn load(&self, path: &Path) -> LoadOutcome {
        let lines = match Self::read_lines(path) {
            Ok(lines) => lines,
            Err(e) => {
                log::warn!("{}", e);
                return LoadOutcome::empty(Vec::new(), e);
            }
        };

        match self.parser.parse(&lines) {
            Ok(parsed) => {
                let mut builder = GraphBuilder::new();
                builder.extend(parsed.edges);
                LoadOutcome {
                    graph: builder.build(),
                    lines,
                    layout: Some(parsed.layout),
                    sentinel_line: parsed.sentinel_line,
                    skipped_rows: parsed.skipped_rows,
                    notice: None,
                }
            }
            Err(e) => {
                log::warn!("{}", e);
                LoadOutcome::empty(lines, e)
            }
        }
    }
}

impl LoadOutcome {
    fn empty(lines: Vec<String>, notice: RouteError) -> Self {
        Self {
            graph: RouteGraph::new(),
            lines,
            layout: None,
            sentinel_line: None,
            skipped_rows: 0,
            notice: Some(notice),
        }
    }
}
