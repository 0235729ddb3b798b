//! The flag registry: the catalog of recognized command-line flags.
//!
//! The binder registers one flag per argument-bound field so that the app can
//! parse its arguments and print a usage listing. Registration is additive and
//! idempotent by name: the first registration of a name sticks, later ones are
//! ignored.
//!
//! The registry is an ordinary owned value. Create one at startup, pass it by
//! `&mut` into every bind call, then use it for [`parse`](FlagRegistry::parse)
//! and [`usage`](FlagRegistry::usage).

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt::Write as _;

use serde::Serialize;

use crate::args::split_flag;
use crate::error::BindError;
use crate::types::FlagKind;

/// A flag known to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredFlag {
    pub name: String,
    /// Default value in display form (`""` / `"0"` when none was declared).
    pub default: String,
    pub description: String,
    pub kind: FlagKind,
    /// Largest accepted value for uint flags, from the bound field's type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct FlagRegistry {
    flags: Vec<RegisteredFlag>,
    index: HashMap<String, usize>,
}

impl FlagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredFlag> {
        self.index.get(name).map(|&i| &self.flags[i])
    }

    /// Register a string flag. Returns `false` if the name was already taken.
    pub fn register_string(&mut self, name: &str, default: &str, description: &str) -> bool {
        self.register(RegisteredFlag {
            name: name.to_string(),
            default: default.to_string(),
            description: description.to_string(),
            kind: FlagKind::String,
            max: None,
        })
    }

    /// Register an unsigned integer flag accepting any `u64`. Returns `false`
    /// if the name was already taken. Flags registered by the binder carry
    /// the bound field's own maximum instead.
    pub fn register_uint(&mut self, name: &str, default: u64, description: &str) -> bool {
        self.register(RegisteredFlag {
            name: name.to_string(),
            default: default.to_string(),
            description: description.to_string(),
            kind: FlagKind::Uint,
            max: Some(u64::MAX),
        })
    }

    pub(crate) fn register(&mut self, flag: RegisteredFlag) -> bool {
        if self.exists(&flag.name) {
            return false;
        }
        tracing::debug!(flag = %flag.name, kind = %flag.kind, "registered flag");
        self.index.insert(flag.name.clone(), self.flags.len());
        self.flags.push(flag);
        true
    }

    /// Registered flags in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredFlag> {
        self.flags.iter()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Parse arguments (program name excluded) against the registered flags.
    ///
    /// Parsing stops at the first positional argument or at `--`; everything
    /// after is returned as [`ParsedFlags::remaining`]. `-h`/`-help` (unless
    /// registered) stop parsing and set [`ParsedFlags::help_requested`].
    /// Unknown flags, flags missing their value, malformed uint values and uint
    /// values above the flag's [`max`](RegisteredFlag::max) are errors.
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> Result<ParsedFlags, BindError> {
        let mut parsed = ParsedFlags {
            values: self
                .flags
                .iter()
                .map(|f| (f.name.clone(), f.default.clone()))
                .collect(),
            ..ParsedFlags::default()
        };

        let mut tokens = args.iter().map(S::as_ref);
        while let Some(token) = tokens.next() {
            if token == "--" {
                parsed.remaining.extend(tokens.map(str::to_string));
                break;
            }
            let Some((name, inline)) = split_flag(token) else {
                if token.starts_with("---") || token.starts_with("-=") {
                    return Err(BindError::UnknownFlag(token.trim_start_matches('-').into()));
                }
                parsed.remaining.push(token.to_string());
                parsed.remaining.extend(tokens.map(str::to_string));
                break;
            };

            let Some(flag) = self.get(name) else {
                if name == "h" || name == "help" {
                    parsed.help_requested = true;
                    break;
                }
                return Err(BindError::UnknownFlag(name.to_string()));
            };

            let value = match inline {
                Some(v) => v.to_string(),
                None => tokens
                    .next()
                    .map(str::to_string)
                    .ok_or_else(|| BindError::MissingValue(name.to_string()))?,
            };

            let value = match flag.kind {
                FlagKind::String => value,
                FlagKind::Uint => {
                    let n = value.parse::<u64>().map_err(|source| BindError::Conversion {
                        field: name.to_string(),
                        value: value.clone(),
                        source,
                    })?;
                    if let Some(max) = flag.max
                        && n > max
                    {
                        return Err(BindError::OutOfRange {
                            field: name.to_string(),
                            value,
                            max,
                        });
                    }
                    n.to_string()
                }
            };

            parsed.explicit.insert(name.to_string());
            parsed.values.insert(name.to_string(), value);
        }

        Ok(parsed)
    }

    /// Usage listing, one entry per flag, sorted by name.
    ///
    /// ```text
    ///   -port uint
    ///     	Port to listen on. (default 8080)
    /// ```
    pub fn usage(&self) -> String {
        let mut sorted: Vec<&RegisteredFlag> = self.flags.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));

        let mut out = String::new();
        for flag in sorted {
            let _ = write!(out, "  -{} {}\n    \t", flag.name, flag.kind);
            out.push_str(&flag.description.replace('\n', "\n    \t"));
            if flag.default != flag.kind.zero_display() {
                match flag.kind {
                    FlagKind::String => {
                        let _ = write!(out, " (default {:?})", flag.default);
                    }
                    FlagKind::Uint => {
                        let _ = write!(out, " (default {})", flag.default);
                    }
                }
            }
            out.push('\n');
        }
        out
    }
}

/// Result of [`FlagRegistry::parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFlags {
    values: BTreeMap<String, String>,
    explicit: BTreeSet<String>,
    remaining: Vec<String>,
    help_requested: bool,
}

impl ParsedFlags {
    /// The flag's value: parsed if given, otherwise its registered default.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// True if the flag was given on the command line.
    pub fn is_set(&self, name: &str) -> bool {
        self.explicit.contains(name)
    }

    /// Arguments left after flag parsing stopped.
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    pub fn help_requested(&self) -> bool {
        self.help_requested
    }
}
