//! The gateway trait seam
//!
//! The application crate is generic over this trait so the whole
//! submit/refresh/fetch flow can run against a scripted stub in tests.

use ddeck_core::{Design, DesignSpec, Result};

/// Operations the design service exposes to this client.
///
/// Implementations normalize every transport failure into the
/// [`ddeck_core::Error`] request taxonomy before returning; callers
/// never see a transport-specific error shape.
#[trait_variant::make(DesignApi: Send)]
pub trait LocalDesignApi {
    /// Submit a new design request.
    ///
    /// Fails with `Error::Validation` before any network activity when
    /// the trimmed prompt is empty. The returned design may be a stub
    /// without a payload; callers must be prepared to re-fetch by id.
    async fn submit(&self, spec: &DesignSpec) -> Result<Design>;

    /// Fetch the full current listing. Replace semantics: the caller
    /// swaps its whole history for this response.
    async fn list(&self) -> Result<Vec<Design>>;

    /// Fetch a single design by id. Fails with `Error::NotFound` when
    /// the id is unknown to the service.
    async fn fetch_one(&self, id: &str) -> Result<Design>;
}
