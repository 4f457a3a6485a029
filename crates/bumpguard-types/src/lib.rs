//! Stable DTOs and IDs used across the bumpguard workspace.
//!
//! Contents:
//! - dependency coordinates and live dependency references
//! - stable string IDs for rule keys, checks and codes
//! - data types for the emitted report

#![forbid(unsafe_code)]

pub mod coordinate;
pub mod ids;
pub mod receipt;

pub use coordinate::{Coordinate, CoordinateParseError, DependencyRef, DEFAULT_SCOPE};
pub use receipt::{
    BumpguardData, BumpguardReport, Finding, ReportEnvelope, Severity, ToolMeta, Verdict,
    SCHEMA_REPORT_V1,
};
