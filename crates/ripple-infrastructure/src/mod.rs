//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns supporting the application and domain
//! layers. Provider implementations live in `ripple-providers` and are
//! reached through the linkme registries.
//!
//! ## Module Categories
//!
//! ### Configuration & Wiring
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered configuration (defaults, TOML, environment) |
//! | [`di`] | Provider resolution and application context bootstrap |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Errors
//! | Module | Description |
//! |--------|-------------|
//! | [`error_ext`] | Context extension trait for foreign errors |

// Force linkme registration of all providers
extern crate ripple_providers;

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
pub use di::{AppContext, EmbeddingSeed, init_app};
pub use error_ext::ErrorContext;
