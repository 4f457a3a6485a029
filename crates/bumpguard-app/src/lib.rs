//! Use case orchestration for bumpguard.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain
//! and render layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod lookup;
mod render;
mod report;

pub use check::{
    load_config, parse_dependencies_json, run_check, verdict_exit_code, CheckInput, CheckOutput,
};
pub use lookup::{format_lookup, parse_kind, run_lookup, LookupInput, LookupOutput};
pub use render::{render_annotations, render_markdown};
pub use report::{parse_report_json, runtime_error_report, serialize_report, to_renderable};
