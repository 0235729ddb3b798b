use std::collections::HashSet;

use crate::env::{EnvSource, ProcessEnv};
use crate::error::BindError;
use crate::field::{Bindable, Field};
use crate::registry::{FlagRegistry, RegisteredFlag};
use crate::report::{BindReport, FieldOutcome, FieldReport};
use crate::resolve::resolve;

/// Populates [`Bindable`] records from arguments, environment and defaults.
///
/// Borrows the [`FlagRegistry`] for its whole lifetime; every argument-bound
/// field is registered there. Arguments and environment default to the real
/// process ones and can be swapped for synthetic data:
///
/// ```ignore
/// let mut registry = FlagRegistry::new();
/// let mut config = ServerConfig::default();
/// Binder::new(&mut registry)
///     .args(["--port=9000"])
///     .env(HashMap::from([("SERVER_HOST".to_string(), "0.0.0.0".to_string())]))
///     .bind(&mut config)?;
/// ```
pub struct Binder<'r> {
    registry: &'r mut FlagRegistry,
    args: Vec<String>,
    env: Box<dyn EnvSource + 'r>,
}

impl<'r> Binder<'r> {
    pub fn new(registry: &'r mut FlagRegistry) -> Self {
        Self {
            registry,
            args: std::env::args_os()
                .skip(1)
                .map(|a| a.to_string_lossy().into_owned())
                .collect(),
            env: Box::new(ProcessEnv),
        }
    }

    /// Replace the argument vector (program name excluded).
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the environment source.
    pub fn env(mut self, env: impl EnvSource + 'r) -> Self {
        self.env = Box::new(env);
        self
    }

    pub fn registry(&self) -> &FlagRegistry {
        &*self.registry
    }

    /// Bind every field of `record`.
    ///
    /// For each field carrying binding metadata, in declaration order:
    ///
    /// 1. If the field already holds a non-zero value it is kept as is.
    /// 2. Otherwise the first of argument, env var, default that supplies a
    ///    value is converted and written into the field.
    /// 3. If the field has an `arg_name` not yet in the registry, a flag is
    ///    registered for it, whether or not step 2 ran.
    ///
    /// Any error aborts the call; fields visited before the error keep
    /// whatever was written to them.
    pub fn bind<B: Bindable + ?Sized>(&mut self, record: &mut B) -> Result<BindReport, BindError> {
        let mut fields = record.fields();
        check_table(&fields)?;
        let known = self.known_flags(&fields);

        let mut report = BindReport::default();
        for field in &mut fields {
            if field.binding().is_empty() {
                continue;
            }
            let outcome = self.bind_field(field, &known, &mut report)?;
            report.fields.push(FieldReport {
                field: field.name(),
                outcome,
            });
        }
        Ok(report)
    }

    /// Flag names that take a value: already registered plus those this record declares.
    fn known_flags(&self, fields: &[Field<'_>]) -> HashSet<String> {
        self.registry
            .iter()
            .map(|flag| flag.name.clone())
            .chain(fields.iter().filter_map(|f| f.binding().arg_name.clone()))
            .collect()
    }

    fn bind_field(
        &mut self,
        field: &mut Field<'_>,
        known: &HashSet<String>,
        report: &mut BindReport,
    ) -> Result<FieldOutcome, BindError> {
        let name = field.name();
        let binding = field.binding().clone();
        let slot = field.slot()?;

        let outcome = if !slot.is_unset() {
            tracing::trace!(field = name, "keeping preset value");
            FieldOutcome::Kept
        } else {
            match resolve(&binding, self.args.as_slice(), known, &*self.env) {
                Some(resolved) => {
                    slot.assign(&resolved.text)
                        .map_err(|source| BindError::Conversion {
                            field: name.to_string(),
                            value: resolved.text.clone(),
                            source,
                        })?;
                    tracing::debug!(field = name, source = %resolved.source, "resolved field");
                    FieldOutcome::Resolved(resolved.source)
                }
                None => {
                    tracing::trace!(field = name, "no source matched");
                    FieldOutcome::Unresolved
                }
            }
        };

        if let Some(arg_name) = &binding.arg_name
            && !self.registry.exists(arg_name)
        {
            let kind = slot.kind();
            let default = match &binding.default_value {
                Some(text) => slot.normalize(text).map_err(|source| BindError::Conversion {
                    field: name.to_string(),
                    value: text.clone(),
                    source,
                })?,
                None => kind.zero_display().to_string(),
            };
            self.registry.register(RegisteredFlag {
                name: arg_name.clone(),
                default,
                description: binding.flag_description(),
                kind,
                max: slot.max(),
            });
            report.registered.push(arg_name.clone());
        }

        Ok(outcome)
    }
}

/// Reject tables that cannot describe a record: empty or repeated field names.
fn check_table(fields: &[Field<'_>]) -> Result<(), BindError> {
    let mut seen = HashSet::new();
    for field in fields {
        if field.name().is_empty() {
            return Err(BindError::InvalidTarget {
                reason: "field with an empty name".into(),
            });
        }
        if !seen.insert(field.name()) {
            return Err(BindError::InvalidTarget {
                reason: format!("field '{}' listed more than once", field.name()),
            });
        }
    }
    Ok(())
}

/// Bind `record` using the process arguments and environment.
pub fn bind<B: Bindable + ?Sized>(
    record: &mut B,
    registry: &mut FlagRegistry,
) -> Result<BindReport, BindError> {
    Binder::new(registry).bind(record)
}
