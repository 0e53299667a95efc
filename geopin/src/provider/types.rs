//! Provider types and traits

use tokio::sync::mpsc;

use crate::accuracy::AccuracyLevel;
use crate::position::PositionRecord;

/// Errors that can occur during provider operations.
///
/// All variants except [`ProviderError::PropertyFetch`] are fatal for the
/// session: there is no retry policy for any provider call. `PropertyFetch`
/// is recoverable; the single affected update is dropped and logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The location service cannot be reached.
    #[error("location service unreachable: {0}")]
    Unavailable(String),

    /// The provider rejected the session creation request.
    #[error("provider rejected session creation: {0}")]
    SessionCreation(String),

    /// The provider refused the requested configuration (e.g. permission
    /// denied for the requested accuracy).
    #[error("provider rejected configuration: {0}")]
    ConfigurationRejected(String),

    /// The provider does not support update notifications on this session.
    #[error("provider does not support update notifications: {0}")]
    SubscriptionFailed(String),

    /// A per-update property round trip failed; the update is dropped.
    #[error("failed to fetch location properties: {0}")]
    PropertyFetch(String),
}

/// Trait for system location providers.
///
/// Implementors negotiate location sessions with a system service and stream
/// position updates back over a channel. The trait is the seam between the
/// session lifecycle machinery and the IPC protocol; tests substitute a
/// scripted implementation.
#[allow(async_fn_in_trait)]
pub trait LocationProvider {
    /// Opaque session handle issued by the provider.
    type Handle;

    /// Request a new session, identified to the provider by `desktop_id`.
    ///
    /// Fails with [`ProviderError::Unavailable`] if the service cannot be
    /// reached and [`ProviderError::SessionCreation`] on provider-side
    /// rejection.
    async fn create_session(&self, desktop_id: &str) -> Result<Self::Handle, ProviderError>;

    /// Set the requested accuracy on the session.
    ///
    /// Fails with [`ProviderError::ConfigurationRejected`] if the provider
    /// refuses.
    async fn configure(
        &self,
        handle: &Self::Handle,
        level: AccuracyLevel,
    ) -> Result<(), ProviderError>;

    /// Begin streaming position updates.
    async fn start(&self, handle: &Self::Handle) -> Result<(), ProviderError>;

    /// End streaming. Idempotent: stopping an already-stopped session is a
    /// no-op, not an error.
    async fn stop(&self, handle: &Self::Handle) -> Result<(), ProviderError>;

    /// Subscribe to update notifications on the session.
    ///
    /// Each notification is resolved to a [`PositionRecord`] via a
    /// synchronous property round trip to the provider; a failed round trip
    /// drops that single update with a warning rather than surfacing an
    /// error. Fails with [`ProviderError::SubscriptionFailed`] if the
    /// provider does not support notifications on this handle.
    async fn subscribe(
        &self,
        handle: &Self::Handle,
    ) -> Result<mpsc::Receiver<PositionRecord>, ProviderError>;
}
