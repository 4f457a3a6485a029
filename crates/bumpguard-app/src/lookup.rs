//! The `lookup` use case: which restrictions apply to one coordinate.

use crate::check::load_config;
use anyhow::Context;
use bumpguard_domain::{Restriction, RestrictionKind};
use bumpguard_settings::{ConfigFormat, Overrides};
use bumpguard_types::Coordinate;

#[derive(Clone, Debug)]
pub struct LookupInput<'a> {
    pub config_text: &'a str,
    pub config_format: ConfigFormat,
    /// `group:artifact` of the dependency to look up.
    pub coordinate: &'a str,
    /// Only return the first restriction of this kind.
    pub kind: Option<RestrictionKind>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupOutput {
    pub coordinate: Coordinate,
    pub restrictions: Vec<Restriction>,
}

pub fn run_lookup(input: LookupInput<'_>) -> anyhow::Result<LookupOutput> {
    let coordinate: Coordinate = input.coordinate.parse()?;
    let resolved = load_config(input.config_text, input.config_format, Overrides::default())?;
    let policy = &resolved.policy;

    let restrictions = match input.kind {
        Some(kind) => policy
            .restriction_for(&coordinate.group, &coordinate.artifact, kind)
            .cloned()
            .into_iter()
            .collect(),
        None => policy
            .restrictions_for(&coordinate.group, &coordinate.artifact)
            .to_vec(),
    };

    Ok(LookupOutput {
        coordinate,
        restrictions,
    })
}

/// Parse a restriction kind as accepted on the command line.
pub fn parse_kind(v: &str) -> anyhow::Result<RestrictionKind> {
    RestrictionKind::ALL
        .into_iter()
        .find(|kind| kind.as_str().eq_ignore_ascii_case(v))
        .with_context(|| {
            let known: Vec<_> = RestrictionKind::ALL.iter().map(|k| k.as_str()).collect();
            format!("unknown restriction kind: {v} (expected {})", known.join("|"))
        })
}

pub fn format_lookup(output: &LookupOutput) -> String {
    let mut out = String::new();
    if output.restrictions.is_empty() {
        out.push_str(&format!("{}: unrestricted\n", output.coordinate));
        return out;
    }

    out.push_str(&format!("{}:\n", output.coordinate));
    for restriction in &output.restrictions {
        out.push_str(&format!("  - {}\n", restriction));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"{
        "rules": {
            "com.x:y": "NEVER",
            "org.jboss:*": { "PREFIX": "7.", "QUALIFIER": ["Final", "SP"] }
        }
    }"#;

    fn lookup(coordinate: &str, kind: Option<RestrictionKind>) -> anyhow::Result<LookupOutput> {
        run_lookup(LookupInput {
            config_text: CONFIG,
            config_format: ConfigFormat::Json,
            coordinate,
            kind,
        })
    }

    #[test]
    fn lists_all_restrictions_in_declaration_order() {
        let out = lookup("org.jboss:core", None).expect("lookup");
        assert_eq!(
            out.restrictions,
            vec![
                Restriction::prefix("7."),
                Restriction::qualifier(["Final", "SP"])
            ]
        );
        assert_eq!(
            format_lookup(&out),
            "org.jboss:core:\n  - prefix '7.'\n  - qualifier [Final, SP]\n"
        );
    }

    #[test]
    fn kind_filter_returns_at_most_one() {
        let out = lookup("com.x:y", Some(RestrictionKind::Never)).expect("lookup");
        assert_eq!(out.restrictions, vec![Restriction::Never]);

        let out = lookup("com.x:z", Some(RestrictionKind::Never)).expect("lookup");
        assert!(out.restrictions.is_empty());
        assert_eq!(format_lookup(&out), "com.x:z: unrestricted\n");
    }

    #[test]
    fn rejects_bad_coordinates() {
        assert!(lookup("no-separator", None).is_err());
    }

    #[test]
    fn parses_kinds_case_insensitively() {
        assert_eq!(parse_kind("PREFIX").expect("kind"), RestrictionKind::VersionPrefix);
        assert_eq!(parse_kind("never").expect("kind"), RestrictionKind::Never);
        assert!(parse_kind("latest").is_err());
    }
}
