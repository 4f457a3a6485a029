//! Decoding of the rule document into a [`RuleRegistry`].
//!
//! The document maps `"group:artifact"` to either a bare string (`NEVER` or a stream name) or
//! a table of rule keys (`PREFIX`, `QUALIFIER`, `IGNORE`, `STREAM`, `COMMENT`).

use crate::error::{RegistryError, RuleError};
use crate::registry::RuleRegistry;
use crate::restriction::Restriction;
use crate::stream::VersionStream;
use bumpguard_types::ids;
use bumpguard_types::Coordinate;
use serde_json::{Map, Value};
use std::str::FromStr;

/// Rule context reported when the value of a rule key has the wrong shape.
const RULE_VALUE: &str = "<value>";

/// Shape of a rule value, decided before any restriction is built.
enum RuleValue<'a> {
    Bare(&'a str),
    Table(&'a Map<String, Value>),
}

impl<'a> TryFrom<&'a Value> for RuleValue<'a> {
    type Error = RuleError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(RuleValue::Bare(s)),
            Value::Object(table) => Ok(RuleValue::Table(table)),
            other => Err(invalid_type("string or object", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RuleKey {
    Prefix,
    Qualifier,
    Ignore,
    Stream,
    Comment,
}

impl FromStr for RuleKey {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ids::RULE_PREFIX => Ok(RuleKey::Prefix),
            ids::RULE_QUALIFIER => Ok(RuleKey::Qualifier),
            ids::RULE_IGNORE => Ok(RuleKey::Ignore),
            ids::RULE_STREAM => Ok(RuleKey::Stream),
            ids::RULE_COMMENT => Ok(RuleKey::Comment),
            _ => Err(RuleError::UnknownRuleKind),
        }
    }
}

impl RuleRegistry {
    /// Build the registry from a rule document.
    ///
    /// Keys are processed in document order. The first invalid entry aborts the build.
    pub fn from_document(rules: &Map<String, Value>) -> Result<Self, RegistryError> {
        let mut builder = RuleRegistry::builder();

        for (key, value) in rules {
            let coordinate = Coordinate::from_str(key)
                .map_err(|_| RegistryError::MalformedKey { key: key.clone() })?;

            for restriction in decode_rule(key, value)? {
                builder.push(&coordinate, restriction);
            }
        }

        let registry = builder.build();
        tracing::debug!(
            keys = rules.len(),
            rules = registry.len(),
            "built restriction registry"
        );
        Ok(registry)
    }
}

fn decode_rule(key: &str, value: &Value) -> Result<Vec<Restriction>, RegistryError> {
    let value =
        RuleValue::try_from(value).map_err(|e| RegistryError::rule(key, RULE_VALUE, e))?;

    match value {
        RuleValue::Bare(ids::VALUE_NEVER) => Ok(vec![Restriction::Never]),
        RuleValue::Bare(stream) => {
            let stream = VersionStream::from_str(stream)
                .map_err(|e| RegistryError::rule(key, ids::RULE_STREAM, e))?;
            Ok(vec![Restriction::VersionStream(stream)])
        }
        RuleValue::Table(table) => decode_table(key, table),
    }
}

fn decode_table(
    key: &str,
    table: &Map<String, Value>,
) -> Result<Vec<Restriction>, RegistryError> {
    if table.contains_key(ids::RULE_PREFIX) && table.contains_key(ids::RULE_STREAM) {
        return Err(RegistryError::ConflictingRestriction {
            coordinate: key.to_string(),
        });
    }

    let mut out = Vec::with_capacity(table.len());
    for (rule, value) in table {
        let restriction =
            decode_entry(rule, value).map_err(|e| RegistryError::rule(key, rule, e))?;
        out.extend(restriction);
    }
    Ok(out)
}

fn decode_entry(rule: &str, value: &Value) -> Result<Option<Restriction>, RuleError> {
    let restriction = match rule.parse::<RuleKey>()? {
        RuleKey::Prefix => Restriction::prefix(expect_str(value)?),
        RuleKey::Qualifier => Restriction::qualifier(string_or_list(value)?),
        RuleKey::Ignore => Restriction::ignore(string_or_list(value)?),
        RuleKey::Stream => Restriction::VersionStream(expect_str(value)?.parse()?),
        RuleKey::Comment => return Ok(None),
    };
    Ok(Some(restriction))
}

fn expect_str(value: &Value) -> Result<&str, RuleError> {
    value
        .as_str()
        .ok_or_else(|| invalid_type("string", value))
}

fn string_or_list(value: &Value) -> Result<Vec<&str>, RuleError> {
    const EXPECTED: &str = "string or list of strings";
    match value {
        Value::String(s) => Ok(vec![s.as_str()]),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().ok_or_else(|| invalid_type(EXPECTED, item)))
            .collect(),
        other => Err(invalid_type(EXPECTED, other)),
    }
}

fn invalid_type(expected: &'static str, found: &Value) -> RuleError {
    RuleError::InvalidValueType {
        expected,
        found: json_type_name(found),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
