//! Binding tables: how a record exposes its fields to the binder.
//!
//! A record implements [`Bindable`] by listing its fields, each borrowed
//! mutably and decorated with its [`FieldBinding`]. The binder downcasts each
//! borrowed value to one of the supported types at bind time:
//!
//! | Rust type | Flag kind |
//! |-----------|-----------|
//! | `String`, `Option<String>` | string |
//! | `u8`..`u64`, `usize`, and their `Option`s | uint |
//!
//! Fields of any other type may appear in the table as long as they carry no
//! binding metadata; they are skipped untouched.

use std::any::Any;
use std::num::ParseIntError;

use crate::error::BindError;
use crate::types::{FieldBinding, FlagKind};

/// A record whose fields can be populated by the binder.
///
/// ```ignore
/// struct ServerConfig {
///     host: String,
///     port: Option<u16>,
/// }
///
/// impl Bindable for ServerConfig {
///     fn fields(&mut self) -> Vec<Field<'_>> {
///         vec![
///             Field::new("host", &mut self.host)
///                 .env("SERVER_HOST")
///                 .default_value("localhost"),
///             Field::new("port", &mut self.port)
///                 .arg("port")
///                 .env("SERVER_PORT")
///                 .description("Port to listen on."),
///         ]
///     }
/// }
/// ```
pub trait Bindable {
    /// The binding table, in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;
}

/// One entry of a binding table: a mutable borrow of a field plus its metadata.
pub struct Field<'a> {
    name: &'static str,
    type_name: &'static str,
    value: &'a mut dyn Any,
    binding: FieldBinding,
}

impl<'a> Field<'a> {
    pub fn new<T: Any>(name: &'static str, value: &'a mut T) -> Self {
        Self {
            name,
            type_name: std::any::type_name::<T>(),
            value,
            binding: FieldBinding::default(),
        }
    }

    /// Bind the field to a command-line flag (`-name value` / `--name=value`).
    pub fn arg(mut self, name: impl Into<String>) -> Self {
        self.binding.arg_name = Some(name.into());
        self
    }

    /// Bind the field to an environment variable.
    pub fn env(mut self, name: impl Into<String>) -> Self {
        self.binding.env_name = Some(name.into());
        self
    }

    /// Literal fallback used when neither argument nor env var supplies a value.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.binding.default_value = Some(value.into());
        self
    }

    /// Help text for the registered flag.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.binding.description = Some(text.into());
        self
    }

    /// Replace the whole binding at once.
    pub fn with_binding(mut self, binding: FieldBinding) -> Self {
        self.binding = binding;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn binding(&self) -> &FieldBinding {
        &self.binding
    }

    /// Typed view of the borrowed value, or `UnsupportedFieldType`.
    pub(crate) fn slot(&mut self) -> Result<&mut dyn FieldSlot, BindError> {
        let name = self.name;
        let type_name = self.type_name;
        downcast_slot(&mut *self.value).ok_or_else(|| BindError::UnsupportedFieldType {
            field: name.to_string(),
            type_name,
        })
    }
}

/// Operations the binder needs on a supported field type.
pub(crate) trait FieldSlot {
    fn kind(&self) -> FlagKind;

    /// True when the value equals the type's semantic zero.
    fn is_unset(&self) -> bool;

    /// Convert `text` and store it.
    fn assign(&mut self, text: &str) -> Result<(), ParseIntError>;

    /// Convert `text` to the field type and back to display form.
    fn normalize(&self, text: &str) -> Result<String, ParseIntError>;

    /// Largest value the type holds, for uint kinds.
    fn max(&self) -> Option<u64> {
        None
    }
}

impl FieldSlot for String {
    fn kind(&self) -> FlagKind {
        FlagKind::String
    }

    fn is_unset(&self) -> bool {
        self.is_empty()
    }

    fn assign(&mut self, text: &str) -> Result<(), ParseIntError> {
        *self = text.to_string();
        Ok(())
    }

    fn normalize(&self, text: &str) -> Result<String, ParseIntError> {
        Ok(text.to_string())
    }
}

impl FieldSlot for Option<String> {
    fn kind(&self) -> FlagKind {
        FlagKind::String
    }

    fn is_unset(&self) -> bool {
        self.is_none()
    }

    fn assign(&mut self, text: &str) -> Result<(), ParseIntError> {
        *self = Some(text.to_string());
        Ok(())
    }

    fn normalize(&self, text: &str) -> Result<String, ParseIntError> {
        Ok(text.to_string())
    }
}

macro_rules! uint_slots {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FieldSlot for $ty {
                fn kind(&self) -> FlagKind {
                    FlagKind::Uint
                }

                fn is_unset(&self) -> bool {
                    *self == 0
                }

                fn assign(&mut self, text: &str) -> Result<(), ParseIntError> {
                    *self = text.parse()?;
                    Ok(())
                }

                fn normalize(&self, text: &str) -> Result<String, ParseIntError> {
                    Ok(text.parse::<$ty>()?.to_string())
                }

                fn max(&self) -> Option<u64> {
                    u64::try_from(<$ty>::MAX).ok()
                }
            }

            impl FieldSlot for Option<$ty> {
                fn kind(&self) -> FlagKind {
                    FlagKind::Uint
                }

                fn is_unset(&self) -> bool {
                    self.is_none()
                }

                fn assign(&mut self, text: &str) -> Result<(), ParseIntError> {
                    *self = Some(text.parse()?);
                    Ok(())
                }

                fn normalize(&self, text: &str) -> Result<String, ParseIntError> {
                    Ok(text.parse::<$ty>()?.to_string())
                }

                fn max(&self) -> Option<u64> {
                    u64::try_from(<$ty>::MAX).ok()
                }
            }
        )+
    };
}

uint_slots!(u8, u16, u32, u64, usize);

macro_rules! try_slot {
    ($value:expr; $($ty:ty),+ $(,)?) => {
        $(
            if $value.is::<$ty>() {
                return $value
                    .downcast_mut::<$ty>()
                    .map(|v| v as &mut dyn FieldSlot);
            }
        )+
    };
}

fn downcast_slot(value: &mut dyn Any) -> Option<&mut dyn FieldSlot> {
    try_slot!(value;
        String, Option<String>,
        u8, u16, u32, u64, usize,
        Option<u8>, Option<u16>, Option<u32>, Option<u64>, Option<usize>,
    );
    None
}
