//! Environment-variable settings binding.
//!
//! A settings type describes its bindable fields by implementing
//! [`Settings`]; the binder fills the fields from an environment snapshot.
//! Two operations make up the public surface: [`read`] allocates and
//! populates a fresh instance, [`inject`] populates an existing instance in
//! place. Field names map to variable names through the documented
//! convention in [`env_var_name`] (`java_home` → `JAVA_HOME`).
//!
//! Variables that are unset leave the corresponding field at its current
//! value; that is not an error. Both operations are synchronous, touch
//! nothing but the instance they were given, and are safe to call
//! concurrently on independent instances. Concurrent `inject` calls on the
//! *same* instance are the caller's responsibility to serialize.
//!
//! ```
//! use svckit::env::{Binder, Field, MapEnv, Settings};
//! use svckit::errors::BindError;
//!
//! #[derive(Debug, Default)]
//! struct DemoSettings {
//!     java_home: String,
//! }
//!
//! impl Settings for DemoSettings {
//!     fn construct() -> Result<Self, BindError> {
//!         Ok(Self::default())
//!     }
//!
//!     fn fields() -> Vec<Field<Self>> {
//!         vec![Field::new("java_home", |s, v: String| s.java_home = v)]
//!     }
//! }
//!
//! let env = MapEnv::new().with("JAVA_HOME", "/usr/lib/jvm/default");
//! let settings: DemoSettings = Binder::new(env).read()?;
//! assert_eq!(settings.java_home, "/usr/lib/jvm/default");
//! # Ok::<(), BindError>(())
//! ```

mod convert;
mod name;
mod source;

pub use convert::FromEnvValue;
pub use name::env_var_name;
pub use source::{EnvSource, MapEnv, SystemEnv};

use std::path::PathBuf;

use tracing::debug;

use crate::errors::{BindError, ConvertError, EnvFileError};

type BindFn<S> = Box<dyn Fn(&mut S, &str) -> Result<(), ConvertError> + Send + Sync>;

enum FieldKind<S> {
    Convert(BindFn<S>),
    Unsupported { type_name: &'static str },
}

/// One registered field of a settings shape: its name plus the conversion
/// that assigns a value into the instance.
pub struct Field<S> {
    name: &'static str,
    kind: FieldKind<S>,
}

impl<S> Field<S> {
    /// Registers a field of a supported type.
    ///
    /// `name` is the field's own name (`snake_case` or `lowerCamelCase`);
    /// the environment variable name is derived from it via
    /// [`env_var_name`]. `assign` writes the converted value into the
    /// instance.
    pub fn new<T, F>(name: &'static str, assign: F) -> Self
    where
        T: FromEnvValue + 'static,
        F: Fn(&mut S, T) + Send + Sync + 'static,
    {
        Self {
            name,
            kind: FieldKind::Convert(Box::new(move |settings, raw| {
                let value = T::from_env_value(raw)?;
                assign(settings, value);
                Ok(())
            })),
        }
    }

    /// Registers a field whose declared type has no conversion rule.
    ///
    /// Binding a shape containing such a field fails with
    /// [`BindError::UnsupportedType`], present variable or not, so the
    /// shape bug is caught early instead of being silently skipped.
    pub fn unsupported(name: &'static str, type_name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Unsupported { type_name },
        }
    }

    /// The field name as registered.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// A settings shape whose fields can be populated from the environment.
///
/// Implementors list their bindable fields explicitly; the binder walks the
/// list in registration order (field bindings are independent, so the order
/// is not observable in the result).
pub trait Settings: Sized {
    /// Allocates an instance with default-initialized fields.
    ///
    /// Normally `Ok(Self::default())`. A shape that cannot be
    /// default-instantiated reports why via [`BindError::Construction`].
    fn construct() -> Result<Self, BindError>;

    /// The field registrations, one per bindable field.
    fn fields() -> Vec<Field<Self>>;
}

/// Populates [`Settings`] shapes from an environment snapshot.
#[derive(Debug, Clone)]
pub struct Binder<E> {
    env: E,
}

impl Binder<SystemEnv> {
    /// A binder over the real process environment.
    pub fn from_system() -> Self {
        Self::new(SystemEnv)
    }
}

impl<E: EnvSource> Binder<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Allocates a fresh instance with default field values and populates
    /// it, as if by [`Binder::inject`].
    pub fn read<S: Settings>(&self) -> Result<S, BindError> {
        let mut settings = S::construct()?;
        self.inject(&mut settings)?;
        Ok(settings)
    }

    /// Populates an existing instance in place.
    ///
    /// For each registered field, the matching variable is looked up; if
    /// present, its value is converted and assigned, and if absent the
    /// field keeps its current value. The first failure aborts the call:
    /// the failing field keeps its prior value, fields processed before it
    /// keep their newly bound values.
    pub fn inject<S: Settings>(&self, settings: &mut S) -> Result<(), BindError> {
        for field in S::fields() {
            let var = env_var_name(field.name);
            match field.kind {
                FieldKind::Unsupported { type_name } => {
                    return Err(BindError::UnsupportedType {
                        field: field.name,
                        type_name,
                    });
                }
                FieldKind::Convert(bind) => match self.env.var(&var) {
                    Some(raw) => {
                        bind(settings, &raw).map_err(|source| BindError::Conversion {
                            field: field.name,
                            var: var.clone(),
                            source,
                        })?;
                    }
                    None => {
                        debug!("{var} not set, leaving `{}` at its current value", field.name);
                    }
                },
            }
        }
        Ok(())
    }
}

/// Reads a settings instance from the process environment.
pub fn read<S: Settings>() -> Result<S, BindError> {
    Binder::from_system().read()
}

/// Populates an existing settings instance from the process environment.
pub fn inject<S: Settings>(settings: &mut S) -> Result<(), BindError> {
    Binder::from_system().inject(settings)
}

/// Loads a `.env` file from the current directory or any parent into the
/// process environment.
///
/// Returns the path of the file that was loaded, or `None` when there is no
/// `.env` file to load. Variables already set in the environment win over
/// file entries.
pub fn load_dotenv() -> Result<Option<PathBuf>, EnvFileError> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(err.into()),
    }
}
