//! Precedence resolution: pick one textual value for a field.
//!
//! Operates on a [`FieldBinding`] plus pre-supplied arguments and environment,
//! with no I/O, so the full chain is testable with synthetic inputs. Sources
//! are tried in order and the first hit wins:
//!
//! 1. Command-line argument (`arg_name`), non-empty values only, scanned up to
//!    the first positional with `known` naming the other value-taking flags
//! 2. Environment variable (`env_name`), present even if empty
//! 3. Literal default (`default_value`), even if empty

use std::collections::HashSet;

use crate::args::lookup_argument;
use crate::env::EnvSource;
use crate::types::{FieldBinding, Source};

/// A resolved value and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub text: String,
    pub source: Source,
}

/// Resolve a field's text through argument → environment → default.
///
/// Returns `None` when no source supplies a value; the field is then left
/// untouched.
pub fn resolve<S: AsRef<str>>(
    binding: &FieldBinding,
    args: &[S],
    known: &HashSet<String>,
    env: &dyn EnvSource,
) -> Option<Resolved> {
    if let Some(name) = &binding.arg_name
        && let Some(text) = lookup_argument(args, name, known)
    {
        return Some(Resolved {
            text,
            source: Source::Argument,
        });
    }

    if let Some(name) = &binding.env_name
        && let Some(text) = env.lookup(name)
    {
        return Some(Resolved {
            text,
            source: Source::Environment,
        });
    }

    binding.default_value.as_ref().map(|text| Resolved {
        text: text.clone(),
        source: Source::Default,
    })
}
