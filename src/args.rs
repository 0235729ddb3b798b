//! Peek at the raw argument vector for a single flag.
//!
//! The binder reads argument values before the flag is registered, so the
//! scan cannot rely on the registry alone. It takes the set of flag names
//! known so far instead. Accepted forms, with one or two dashes:
//!
//! - `-name value` / `--name value`
//! - `-name=value` / `--name=value`
//!
//! Scanning stops at the first positional argument or a bare `--`, as
//! [`FlagRegistry::parse`](crate::FlagRegistry::parse) does. A known flag
//! without an inline value takes the next token as its value, so that token
//! is never read as a flag. Unknown flags take no value. When the flag
//! appears more than once the last occurrence wins.

use std::collections::HashSet;

/// Split a token into `(flag_name, inline_value)` if it looks like a flag.
///
/// Returns `None` for positionals, a lone `-`, and the `--` terminator.
pub(crate) fn split_flag(token: &str) -> Option<(&str, Option<&str>)> {
    let body = token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'))?;
    if body.is_empty() || body.starts_with('-') || body.starts_with('=') {
        return None;
    }
    match body.split_once('=') {
        Some((name, value)) => Some((name, Some(value))),
        None => Some((body, None)),
    }
}

/// Find the value given to flag `name`, if any.
///
/// `known` lists the other flag names whose separate value must be skipped.
/// An empty value is reported as absent, so `--name=` never resolves a field.
pub fn lookup_argument<S: AsRef<str>>(
    args: &[S],
    name: &str,
    known: &HashSet<String>,
) -> Option<String> {
    let mut found: Option<String> = None;
    let mut tokens = args.iter().map(S::as_ref);

    while let Some(token) = tokens.next() {
        let Some((flag, inline)) = split_flag(token) else {
            break;
        };
        if flag != name {
            if inline.is_none() && known.contains(flag) {
                tokens.next();
            }
            continue;
        }
        let value = match inline {
            Some(v) => Some(v.to_string()),
            None => tokens.next().map(str::to_string),
        };
        if let Some(v) = value {
            found = Some(v);
        }
    }

    found.filter(|v| !v.is_empty())
}
