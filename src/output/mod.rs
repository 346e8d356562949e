//! Comment display
//!
//! - `config` - Output configuration types
//! - `terminal` - Colored console output
//! - `markdown` - Markdown document output
//! - `json` - JSON output

mod config;
mod json;
mod markdown;
mod terminal;

pub use config::OutputConfig;
pub use json::{HoverReport, print_json, to_json};
pub use markdown::{print_markdown, render_markdown};
pub use terminal::TerminalFormatter;
