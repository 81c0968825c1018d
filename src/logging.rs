//! Tracing setup and call-context helpers.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use tracing::info_span;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::errors::LoggingError;

/// Installs the global tracing subscriber: formatted output with an
/// `EnvFilter` taken from `RUST_LOG`, defaulting to `info`.
///
/// Call once at process startup. Fails if a global subscriber is already
/// installed.
pub fn setup() -> Result<(), LoggingError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .try_init()?;
    Ok(())
}

/// Generates a fresh call id of the form `CallId_<random>_<millis>`.
pub fn new_call_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    format!("CallId_{}_{}", rand::rng().random::<u32>(), millis)
}

/// Generates a fresh call id as a UUIDv4 string.
pub fn new_call_id_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Runs `f` inside a tracing span carrying a newly generated call id.
///
/// Every event emitted from within the closure is annotated with the
/// `call_id` field; the id is also passed to the closure for use in
/// outgoing requests.
pub fn with_call_id<T>(f: impl FnOnce(&str) -> T) -> T {
    let call_id = new_call_id();
    let span = info_span!("call", call_id = %call_id);
    span.in_scope(|| f(&call_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_ids_have_the_expected_shape() {
        let id = new_call_id();
        assert!(id.starts_with("CallId_"));
        assert_eq!(id.split('_').count(), 3);
    }

    #[test]
    fn test_call_ids_are_unique() {
        assert_ne!(new_call_id(), new_call_id());
    }

    #[test]
    fn test_uuid_call_ids_parse_as_uuids() {
        let id = new_call_id_uuid();
        assert!(uuid::Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_with_call_id_passes_the_id_to_the_closure() {
        let seen = with_call_id(|id| id.to_string());
        assert!(seen.starts_with("CallId_"));
    }
}
