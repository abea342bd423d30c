//! # ddeck-client - Design Service Gateway
//!
//! Issues the create/list/get design operations over HTTP and
//! normalizes every transport failure into the `ddeck-core` error
//! taxonomy. Also owns the session credential context.
//!
//! The [`DesignApi`] trait is the seam the application crate consumes;
//! [`HttpGateway`] is the production implementation, and the
//! `test-helpers` feature provides a scripted stub for tests.

pub mod api;
pub mod gateway;
pub mod session;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use api::{DesignApi, LocalDesignApi};
pub use gateway::HttpGateway;
pub use session::SessionContext;
