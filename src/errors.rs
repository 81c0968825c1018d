use thiserror::Error;

/// Errors that can occur while binding environment variables into a settings
/// shape.
///
/// Missing environment variables are deliberately *not* represented here: an
/// unset variable leaves the corresponding field untouched and is not an
/// error. All three variants are surfaced to the caller immediately; nothing
/// is retried or recovered internally, since the process environment is
/// static for the lifetime of the process.
#[derive(Debug, Error)]
pub enum BindError {
    /// The settings shape could not be allocated with default values.
    ///
    /// Only relevant to `read`; `inject` operates on an instance the caller
    /// has already constructed.
    #[error("failed to construct settings: {0}")]
    Construction(String),

    /// An environment variable was present but its value could not be
    /// converted to the field's declared type.
    #[error("cannot bind field `{field}` from {var}: {source}")]
    Conversion {
        /// Name of the field as registered in the settings descriptor.
        field: &'static str,
        /// Name of the environment variable that was looked up.
        var: String,
        /// The underlying conversion failure.
        #[source]
        source: ConvertError,
    },

    /// A field was registered whose declared type has no conversion rule.
    ///
    /// Raised whether or not the matching environment variable is set, so
    /// that shape bugs are caught the first time the descriptor is bound
    /// rather than whenever the variable happens to appear.
    #[error("field `{field}` has unsupported type `{type_name}`")]
    UnsupportedType {
        /// Name of the field as registered in the settings descriptor.
        field: &'static str,
        /// Human-readable name of the offending type.
        type_name: &'static str,
    },
}

/// A string value that could not be converted to the requested field type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert {value:?} to {expected}")]
pub struct ConvertError {
    /// Description of the expected type, e.g. `"an integer (u16)"`.
    pub expected: &'static str,
    /// The raw environment value that failed to convert.
    pub value: String,
}

/// A `.env` file was found but could not be loaded.
///
/// A *missing* `.env` file is not an error; see [`crate::env::load_dotenv`].
#[derive(Debug, Error)]
#[error("failed to load .env file: {0}")]
pub struct EnvFileError(#[from] dotenvy::Error);

/// The global tracing subscriber could not be installed, typically because
/// another subscriber was set first.
#[derive(Debug, Error)]
#[error("failed to install tracing subscriber: {0}")]
pub struct LoggingError(#[from] tracing_subscriber::util::TryInitError);

/// A string failed organization-number validation (nine digits with a valid
/// mod-11 check digit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid organization number")]
pub struct InvalidOrgNumber;

/// A string failed national-identity-number validation (eleven digits with a
/// plausible birth date and two valid mod-11 check digits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid national identity number")]
pub struct InvalidNationalId;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_error_display_names_field_and_var() {
        let err = BindError::Conversion {
            field: "count",
            var: "COUNT".to_string(),
            source: ConvertError {
                expected: "an integer (u32)",
                value: "notanumber".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "cannot bind field `count` from COUNT: cannot convert \"notanumber\" to an integer (u32)"
        );
    }

    #[test]
    fn test_unsupported_type_display() {
        let err = BindError::UnsupportedType {
            field: "nested",
            type_name: "NestedSettings",
        };
        assert_eq!(
            err.to_string(),
            "field `nested` has unsupported type `NestedSettings`"
        );
    }

    #[test]
    fn test_construction_display() {
        let err = BindError::Construction("no default for handle".to_string());
        assert_eq!(
            err.to_string(),
            "failed to construct settings: no default for handle"
        );
    }
}
