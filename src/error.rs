use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum BindError {
    #[error("Invalid bind target: {reason}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(bindfig::invalid_target),
            help("every entry returned by Bindable::fields() needs a unique, non-empty name")
        )
    )]
    InvalidTarget { reason: String },

    #[error("Unsupported type for field '{field}': {type_name}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(bindfig::unsupported_field_type),
            help("bound fields must be String, an unsigned integer, or an Option of either")
        )
    )]
    UnsupportedFieldType {
        field: String,
        type_name: &'static str,
    },

    #[error("Invalid value '{value}' for '{field}': {source}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(bindfig::conversion),
            help("unsigned integer fields accept base-10 digits only")
        )
    )]
    Conversion {
        field: String,
        value: String,
        source: ParseIntError,
    },

    #[error("Invalid value '{value}' for '{field}': exceeds maximum {max}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(bindfig::out_of_range),
            help("the flag's maximum comes from the unsigned type of the bound field")
        )
    )]
    OutOfRange {
        field: String,
        value: String,
        max: u64,
    },

    #[error("Flag provided but not defined: -{0}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(bindfig::unknown_flag)))]
    UnknownFlag(String),

    #[error("Flag needs an argument: -{0}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(bindfig::missing_value)))]
    MissingValue(String),
}
