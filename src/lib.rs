//! Service utilities: environment settings binding, an in-memory TTL
//! cache, call-id logging helpers, and validated identifier wrappers.
//!
//! The centerpiece is the [`env`] module: declare which fields of a
//! settings struct come from the environment, then [`env::read`] a fresh
//! instance or [`env::inject`] into an existing one. See the module docs
//! for the full binding contract.

pub mod cache;
pub mod date;
pub mod env;
pub mod errors;
pub mod logging;
pub mod wrapper;

pub use env::{inject, read, Binder, EnvSource, Field, FromEnvValue, MapEnv, Settings, SystemEnv};
pub use errors::{BindError, ConvertError};
