//! # ddeck-core - Core Domain Types
//!
//! Foundation crate for DesignDeck. Provides the design data model,
//! derived statistics, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`design`)
//! - [`Design`] - One submitted specification plus its generated artifact
//! - [`DesignSpec`] - The user-supplied inputs for a new design
//! - [`DesignPayload`] - The loosely structured generated payload
//! - [`DiagramSpec`], [`ApiSpec`], [`ComponentSpec`] - Payload descriptors
//! - [`ArchStyle`], [`Complexity`] - Input enums
//!
//! ### Statistics (`stats`)
//! - [`DesignStats`] - Pure-function aggregate counts over the history
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum carrying the request taxonomy
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use ddeck_core::prelude::*;
//! ```

pub mod design;
pub mod error;
pub mod logging;
pub mod stats;

/// Prelude for common imports used throughout all DesignDeck crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use design::{
    ApiSpec, ArchStyle, Complexity, ComponentSpec, Design, DesignPayload, DesignSpec, DiagramSpec,
    MAX_PROMPT_CHARS,
};
pub use error::{Error, Result, ResultExt};
pub use stats::{DesignStats, RECENT_WINDOW_DAYS};
