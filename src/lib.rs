//! Declarative binding of command-line flags, environment variables and
//! literal defaults into config structs.
//!
//! Bindfig fills the fields of a config record from three ranked sources,
//! driven by per-field metadata. Describe each field once, then bind:
//!
//! ```ignore
//! let mut registry = FlagRegistry::new();
//! let mut config = ServerConfig::default();
//! bindfig::bind(&mut config, &mut registry)?;
//! ```
//!
//! That single call fills every unset field from `--flag` arguments, env
//! vars, or declared defaults, and registers each argument-bound field as a
//! flag so the app can print a usage listing.
//!
//! # Binding tables
//!
//! A record opts in by implementing [`Bindable`], listing its fields with
//! their metadata:
//!
//! ```ignore
//! impl Bindable for ServerConfig {
//!     fn fields(&mut self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::new("host", &mut self.host)
//!                 .env("SERVER_HOST")
//!                 .default_value("localhost"),
//!             Field::new("port", &mut self.port)
//!                 .arg("port")
//!                 .env("SERVER_PORT")
//!                 .default_value("8080")
//!                 .description("Port to listen on."),
//!         ]
//!     }
//! }
//! ```
//!
//! The four metadata keys are independent: `arg`, `env`, `default_value` and
//! `description` may appear in any combination. Supported field types are
//! `String`, the unsigned integers (`u8`..`u64`, `usize`), and `Option`s of
//! those. Fields of other types may sit in the table only if they carry no
//! metadata; binding one that does fails with
//! [`BindError::UnsupportedFieldType`].
//!
//! # Source precedence
//!
//! ```text
//! Literal default       .default_value("...")
//!        ↑ overridden by
//! Environment variable  .env("NAME"), present even if empty
//!        ↑ overridden by
//! Argument              .arg("name"): -name v, --name v, -name=v, --name=v
//! ```
//!
//! An argument given with an empty value (`--name=`) counts as absent and
//! falls through to the environment. The argument scan follows the same rules
//! as [`FlagRegistry::parse`]: it stops at the first positional or `--`, and
//! the token after a value-taking flag is that flag's value, never a flag.
//!
//! # Existing values win
//!
//! A field is only resolved when it holds its type's zero value: an empty
//! `String`, `0`, or `None`. Anything else is kept as is. The flip side is
//! that a field deliberately set to `0` or `""` before binding cannot be
//! told apart from an unset one and will be filled. Use an `Option` field
//! when the zero value is meaningful: `Some(0)` counts as set.
//!
//! # Flag registration
//!
//! Every field with an `arg` is registered in the [`FlagRegistry`], whether
//! or not the field was resolved. The flag gets
//!
//! - the field's kind (`string` or `uint`),
//! - the declared default, normalized through the field type (`"007"` shows
//!   as `7`), or the zero value, and
//! - the description, suffixed with ` (Overrides ENV variable 'NAME')` when
//!   an env var is bound too.
//!
//! Registration is idempotent by name: binding a second record that reuses
//! a flag name leaves the first registration untouched. The registry is an
//! ordinary value, created once at startup and passed by `&mut`; use
//! [`FlagRegistry::usage`] or, with the `clap` feature,
//! [`FlagRegistry::command`] to show help.
//!
//! # Error handling
//!
//! Binding returns [`BindError`]. Nothing is retried: the first invalid table,
//! unsupported type or unparsable number aborts the call. Config binding runs
//! at startup, so the usual response is to print the error and exit. With
//! the `rich-errors` feature the error also implements `miette::Diagnostic`.

pub mod error;
pub mod types;

mod args;
mod binder;
#[cfg(feature = "clap")]
mod cli;
mod env;
mod field;
mod registry;
mod report;
mod resolve;

#[cfg(test)]
mod fixtures;

pub use args::lookup_argument;
pub use binder::{Binder, bind};
pub use env::{EnvSource, ProcessEnv};
pub use error::BindError;
pub use field::{Bindable, Field};
pub use registry::{FlagRegistry, ParsedFlags, RegisteredFlag};
pub use report::{BindReport, FieldOutcome, FieldReport};
pub use resolve::{Resolved, resolve};
pub use types::{FieldBinding, FlagKind, Source};
