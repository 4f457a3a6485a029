//! Pure restriction resolution (no IO).
//!
//! Input: an already-parsed rule document and the live dependencies of a project.
//! Output: the restrictions that apply to a coordinate, and the dependencies that violate
//! their `PREFIX` rule.

#![forbid(unsafe_code)]

pub mod error;
pub mod policy;
pub mod registry;
pub mod report;
pub mod restriction;
pub mod stream;

mod engine;
mod rules;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::evaluate;
pub use error::{RegistryError, RuleError};
pub use policy::{FailOn, OutOfDate, ScanPolicy, UpdatePolicy};
pub use registry::{RegistryBuilder, RuleRegistry};
pub use restriction::{QualifierSet, Restriction, RestrictionKind, VersionPrefix};
pub use stream::{UnknownStream, VersionStream};
