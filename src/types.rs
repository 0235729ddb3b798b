use std::fmt;

use serde::Serialize;

/// Binding metadata for a single field: which sources may feed it.
///
/// Every attribute is optional and independent of the others. An `arg_name`
/// alone is enough to get the field registered as a command-line flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldBinding {
    /// Command-line flag name, without leading dashes.
    pub arg_name: Option<String>,
    /// Environment variable name.
    pub env_name: Option<String>,
    /// Literal fallback, converted like any other resolved text.
    pub default_value: Option<String>,
    /// Help text shown next to the flag.
    pub description: Option<String>,
}

impl FieldBinding {
    /// True when no source and no description is declared.
    pub fn is_empty(&self) -> bool {
        self.arg_name.is_none()
            && self.env_name.is_none()
            && self.default_value.is_none()
            && self.description.is_none()
    }

    /// Help text for the flag: the description, suffixed with the env
    /// variable it overrides when one is bound.
    pub fn flag_description(&self) -> String {
        let mut text = self.description.clone().unwrap_or_default();
        if let Some(env) = &self.env_name {
            text.push_str(&format!(" (Overrides ENV variable '{env}')"));
        }
        text
    }
}

/// The value kind of a registered flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagKind {
    String,
    Uint,
}

impl FlagKind {
    /// Display form of the kind's zero value.
    pub fn zero_display(self) -> &'static str {
        match self {
            FlagKind::String => "",
            FlagKind::Uint => "0",
        }
    }
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagKind::String => write!(f, "string"),
            FlagKind::Uint => write!(f, "uint"),
        }
    }
}

/// Which source supplied a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Argument,
    Environment,
    Default,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Argument => write!(f, "argument"),
            Source::Environment => write!(f, "environment"),
            Source::Default => write!(f, "default"),
        }
    }
}
