//! Route text file ingestion.

pub mod detect;
pub mod parser;
pub mod reader;

pub use detect::{detect_layout, Detection, Layout};
pub use parser::{strip_cost_decoration, LineParser, ParsedRoutes};
pub use reader::{LoadOutcome, RouteReader};
