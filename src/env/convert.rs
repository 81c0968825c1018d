//! String-to-field-type conversion rules.

use crate::errors::ConvertError;

/// A field type that can be produced from the string value of an
/// environment variable.
///
/// Implementations exist for text (`String`, pass-through), the primitive
/// integers and floats (parsed after trimming surrounding whitespace),
/// `bool` (conventional truthy/falsy forms), and `Option<T>` of any of
/// these. A field whose type has no implementation must be registered with
/// [`crate::env::Field::unsupported`] so the binder can report it instead of
/// silently skipping it.
pub trait FromEnvValue: Sized {
    /// Human-readable description of the target type, used in conversion
    /// error messages.
    const EXPECTED: &'static str;

    /// Converts the raw environment value into the field type.
    fn from_env_value(raw: &str) -> Result<Self, ConvertError>;
}

impl FromEnvValue for String {
    const EXPECTED: &'static str = "text";

    fn from_env_value(raw: &str) -> Result<Self, ConvertError> {
        Ok(raw.to_string())
    }
}

/// Accepts `1`/`true`/`yes`/`on` and `0`/`false`/`no`/`off`, ignoring case
/// and surrounding whitespace.
impl FromEnvValue for bool {
    const EXPECTED: &'static str = "a boolean (true/false, yes/no, on/off, 1/0)";

    fn from_env_value(raw: &str) -> Result<Self, ConvertError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConvertError {
                expected: Self::EXPECTED,
                value: raw.to_string(),
            }),
        }
    }
}

macro_rules! numeric_from_env_value {
    ($kind:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl FromEnvValue for $ty {
                const EXPECTED: &'static str =
                    concat!($kind, " (", stringify!($ty), ")");

                fn from_env_value(raw: &str) -> Result<Self, ConvertError> {
                    raw.trim().parse().map_err(|_| ConvertError {
                        expected: Self::EXPECTED,
                        value: raw.to_string(),
                    })
                }
            }
        )+
    };
}

numeric_from_env_value!("an integer" => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
numeric_from_env_value!("a number" => f32, f64);

/// A present variable binds `Some`; binding never produces `None`, since an
/// absent variable leaves the field untouched altogether.
impl<T: FromEnvValue> FromEnvValue for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_env_value(raw: &str) -> Result<Self, ConvertError> {
        T::from_env_value(raw).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_passes_through_verbatim() {
        assert_eq!(
            String::from_env_value(" /usr/lib/jvm/default ").unwrap(),
            " /usr/lib/jvm/default "
        );
    }

    #[test]
    fn test_integers_parse_with_whitespace_trimmed() {
        assert_eq!(u16::from_env_value("8080").unwrap(), 8080);
        assert_eq!(i32::from_env_value(" -42 ").unwrap(), -42);
    }

    #[test]
    fn test_non_numeric_integer_fails() {
        let err = u32::from_env_value("notanumber").unwrap_err();
        assert_eq!(err.expected, "an integer (u32)");
        assert_eq!(err.value, "notanumber");
    }

    #[test]
    fn test_out_of_range_integer_fails() {
        assert!(u8::from_env_value("256").is_err());
    }

    #[test]
    fn test_floats_parse() {
        assert_eq!(f64::from_env_value("2.5").unwrap(), 2.5);
    }

    #[test]
    fn test_truthy_and_falsy_forms() {
        for raw in ["1", "true", "TRUE", "yes", "On", " true "] {
            assert!(bool::from_env_value(raw).unwrap(), "{raw:?}");
        }
        for raw in ["0", "false", "No", "OFF"] {
            assert!(!bool::from_env_value(raw).unwrap(), "{raw:?}");
        }
    }

    #[test]
    fn test_unconventional_boolean_fails() {
        assert!(bool::from_env_value("ja").is_err());
        assert!(bool::from_env_value("").is_err());
    }

    #[test]
    fn test_option_wraps_the_inner_conversion() {
        assert_eq!(
            Option::<u16>::from_env_value("8080").unwrap(),
            Some(8080)
        );
        assert!(Option::<u16>::from_env_value("notanumber").is_err());
    }
}
