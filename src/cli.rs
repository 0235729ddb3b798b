//! Clap adapter for bindfig.
//!
//! This module is the **optional integration layer** between the registry and
//! the [clap](https://docs.rs/clap) CLI parser. It is compiled only when the
//! `clap` Cargo feature is enabled (on by default).
//!
//! [`FlagRegistry::command()`] turns every registered flag into a long
//! `--name` argument carrying its description and default, so an app that
//! already uses clap gets help output and validation for bound fields:
//!
//! ```ignore
//! let mut registry = FlagRegistry::new();
//! bindfig::bind(&mut config, &mut registry)?;
//! let matches = registry.command("myapp").get_matches();
//! ```
//!
//! Only the double-dash form is understood by clap. The binder's own argument
//! scan also accepts `-name value`.

use clap::{Arg, ArgAction, Command, value_parser};

use crate::registry::{FlagRegistry, RegisteredFlag};
use crate::types::FlagKind;

impl FlagRegistry {
    /// Build a clap [`Command`] with one argument per registered flag.
    pub fn command(&self, name: &str) -> Command {
        self.iter()
            .fold(Command::new(name.to_string()), |cmd, flag| cmd.arg(to_arg(flag)))
    }
}

fn to_arg(flag: &RegisteredFlag) -> Arg {
    let arg = Arg::new(flag.name.clone())
        .long(flag.name.clone())
        .action(ArgAction::Set)
        .help(flag.description.trim_start().to_string());

    let arg = if flag.default.is_empty() {
        arg
    } else {
        arg.default_value(flag.default.clone())
    };

    match flag.kind {
        FlagKind::String => arg.value_name("STRING"),
        FlagKind::Uint => arg
            .value_name("UINT")
            .value_parser(value_parser!(u64).range(..=flag.max.unwrap_or(u64::MAX))),
    }
}
