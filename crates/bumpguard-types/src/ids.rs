//! Stable identifiers for rule keys, checks and finding codes.
//!
//! Rule keys are the upper-case tokens accepted inside a `"group:artifact"` rule table.
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

/// Placeholder matching any group or artifact (or, as a group suffix, any group prefix).
pub const WILDCARD: &str = "*";

/// Separator between group and artifact in a rule key.
pub const COORDINATE_SEPARATOR: char = ':';

// Rule keys
pub const RULE_PREFIX: &str = "PREFIX";
pub const RULE_QUALIFIER: &str = "QUALIFIER";
pub const RULE_IGNORE: &str = "IGNORE";
pub const RULE_STREAM: &str = "STREAM";
pub const RULE_COMMENT: &str = "COMMENT";

/// Bare rule value forbidding any upgrade.
pub const VALUE_NEVER: &str = "NEVER";

// Checks
pub const CHECK_RULES_VERSION_PREFIX: &str = "rules.version_prefix";

// Codes: rules.version_prefix
pub const CODE_PREFIX_MISMATCH: &str = "prefix_mismatch";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
