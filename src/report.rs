//! What a bind call did, field by field.

use std::fmt;

use serde::Serialize;

use crate::types::Source;

/// How a single bound field ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldOutcome {
    /// The field was unset and a source supplied its value.
    Resolved(Source),
    /// The field already held a value; it was not touched.
    Kept,
    /// The field was unset and no source matched; it stays unset.
    Unresolved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub field: &'static str,
    pub outcome: FieldOutcome,
}

/// Returned by a successful bind. Fields without binding metadata are not listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BindReport {
    /// Bound fields in declaration order.
    pub fields: Vec<FieldReport>,
    /// Flags this call added to the registry (already-known names excluded).
    pub registered: Vec<String>,
}

impl BindReport {
    pub fn outcome(&self, field: &str) -> Option<FieldOutcome> {
        self.fields
            .iter()
            .find(|r| r.field == field)
            .map(|r| r.outcome)
    }

    /// The source that set `field`, if one did during this call.
    pub fn source(&self, field: &str) -> Option<Source> {
        match self.outcome(field)? {
            FieldOutcome::Resolved(source) => Some(source),
            FieldOutcome::Kept | FieldOutcome::Unresolved => None,
        }
    }
}

impl fmt::Display for BindReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, report) in self.fields.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match report.outcome {
                FieldOutcome::Resolved(source) => write!(f, "{} = <{source}>", report.field)?,
                FieldOutcome::Kept => write!(f, "{} = <kept>", report.field)?,
                FieldOutcome::Unresolved => write!(f, "{} = <not set>", report.field)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BindReport {
        BindReport {
            fields: vec![
                FieldReport {
                    field: "host",
                    outcome: FieldOutcome::Resolved(Source::Environment),
                },
                FieldReport {
                    field: "port",
                    outcome: FieldOutcome::Kept,
                },
                FieldReport {
                    field: "token",
                    outcome: FieldOutcome::Unresolved,
                },
            ],
            registered: vec!["port".into()],
        }
    }

    #[test]
    fn source_only_for_resolved_fields() {
        let report = sample();
        assert_eq!(report.source("host"), Some(Source::Environment));
        assert_eq!(report.source("port"), None);
        assert_eq!(report.source("missing"), None);
        assert_eq!(report.outcome("token"), Some(FieldOutcome::Unresolved));
    }

    #[test]
    fn display_lists_each_field() {
        assert_eq!(
            sample().to_string(),
            "host = <environment>\nport = <kept>\ntoken = <not set>"
        );
    }

    #[test]
    fn empty_report_displays_nothing() {
        assert_eq!(BindReport::default().to_string(), "");
    }

    #[test]
    fn serializes_outcomes() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["fields"][0]["outcome"]["resolved"], "environment");
        assert_eq!(json["fields"][1]["outcome"], "kept");
        assert_eq!(json["registered"][0], "port");
    }
}
