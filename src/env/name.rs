//! Field-name to environment-variable-name convention.
//!
//! The convention is part of the public binding contract: it is the wire
//! format between a settings descriptor and the operating environment.

/// Derives the environment variable name for a field name.
///
/// The field name is split into words and rejoined as
/// `SCREAMING_SNAKE_CASE`:
///
/// - an underscore separates words; runs of underscores collapse to one,
/// - an upper-case letter following a lower-case letter or digit starts a
///   new word,
/// - within a run of upper-case letters, the last capital starts a new word
///   when a lower-case letter follows it,
/// - digits stay attached to the word they appear in.
///
/// `snake_case` and `lowerCamelCase` spellings of the same name therefore
/// map to the same variable, and a name that is already in
/// `SCREAMING_SNAKE_CASE` maps to itself.
///
/// ```
/// use svckit::env::env_var_name;
///
/// assert_eq!(env_var_name("java_home"), "JAVA_HOME");
/// assert_eq!(env_var_name("javaHome"), "JAVA_HOME");
/// assert_eq!(env_var_name("apiURLValue"), "API_URL_VALUE");
/// assert_eq!(env_var_name("s3Bucket"), "S3_BUCKET");
/// ```
pub fn env_var_name(field: &str) -> String {
    let chars: Vec<char> = field.chars().collect();
    let mut out = String::with_capacity(field.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            if !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }

        if c.is_uppercase() {
            let starts_word = match i.checked_sub(1).map(|j| chars[j]) {
                Some(prev) if prev.is_lowercase() || prev.is_ascii_digit() => true,
                // Last capital of an acronym run belongs to the next word.
                Some(prev) if prev.is_uppercase() => {
                    chars.get(i + 1).is_some_and(|next| next.is_lowercase())
                }
                _ => false,
            };
            if starts_word && !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
        }

        out.extend(c.to_uppercase());
    }

    out
}
