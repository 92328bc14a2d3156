//! CLI domain: parse, route, presentation, and terminal widgets only.
//! No domain orchestration; the route table dispatches to the manifest
//! pipeline.

mod parse;
mod picker;
mod presentation;
mod progress;
mod route;

pub use parse::{Cli, Commands};
pub use presentation::{
    format_manifest_table, format_scan_json, format_scan_text, format_summary_json,
    format_summary_text,
};
pub use route::RunContext;
