//! Session controller: lifecycle state machine and event loop.

use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::state::SessionState;
use crate::accuracy::AccuracyLevel;
use crate::config::SessionConfig;
use crate::dispatch::UpdateDispatcher;
use crate::provider::{LocationProvider, ProviderError};
use crate::render::Renderer;

/// Errors surfaced while bringing a session up.
///
/// All variants are fatal: the session moves directly to `Closed` and a new
/// controller must be created to try again. Per-update property fetch
/// failures never surface here; they are dropped inside the provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StartupError {
    /// `begin` was called on a controller that already ran a session.
    #[error("session already used; sessions are single-shot per controller")]
    SessionExhausted,

    /// `run` was called before a successful `begin`.
    #[error("session not configured; call begin first")]
    NotConfigured,

    /// The provider refused to create a session.
    #[error("session creation failed: {0}")]
    Create(#[source] ProviderError),

    /// The provider refused the requested accuracy.
    #[error("configuration rejected: {0}")]
    Configure(#[source] ProviderError),

    /// The provider does not deliver update notifications.
    #[error("subscription failed: {0}")]
    Subscribe(#[source] ProviderError),

    /// The provider failed to start streaming.
    #[error("failed to start session: {0}")]
    Start(#[source] ProviderError),
}

/// Why an active session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The countdown timer fired.
    TimedOut,
    /// An external stop request arrived (signal handler, renderer close).
    Requested,
    /// The provider's update stream ended on its own.
    StreamEnded,
}

/// Cloneable handle that requests a session stop.
///
/// Safe to call from any thread and re-entrantly from inside an in-flight
/// update dispatch; repeated calls are no-ops.
#[derive(Debug, Clone)]
pub struct StopHandle {
    token: CancellationToken,
}

impl StopHandle {
    /// Request that the session stop. Idempotent.
    pub fn request_stop(&self) {
        self.token.cancel();
    }
}

/// One negotiated session with the provider.
#[derive(Debug)]
struct Session<H> {
    handle: H,
    desktop_id: String,
    accuracy: AccuracyLevel,
}

/// Owns the session lifecycle: `Idle -> Configuring -> Active -> Stopping ->
/// Closed`.
///
/// The controller is single-shot: once the state machine reaches `Closed`
/// (the only terminal state) a brand-new controller is required for another
/// session, which keeps the at-most-one-active-session invariant trivially
/// true.
///
/// The event loop is cooperative and single-threaded: timer expiry, stop
/// requests and provider notifications are all dispatched on the calling
/// runtime, ordered by event arrival.
pub struct SessionController<P: LocationProvider> {
    provider: P,
    config: SessionConfig,
    state: SessionState,
    session: Option<Session<P::Handle>>,
    stop: CancellationToken,
}

impl<P: LocationProvider> SessionController<P> {
    /// Create a controller for one session against `provider`.
    pub fn new(provider: P, config: SessionConfig) -> Self {
        Self {
            provider,
            config,
            state: SessionState::Idle,
            session: None,
            stop: CancellationToken::new(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the session is currently streaming updates.
    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// A cloneable handle for requesting a stop from elsewhere (signal
    /// handlers, renderer close callbacks).
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            token: self.stop.clone(),
        }
    }

    /// Request that the session stop.
    ///
    /// May be called from any state; a no-op once the session is already
    /// stopping or closed.
    pub fn request_stop(&self) {
        self.stop.cancel();
    }

    /// Negotiate the session: create it and configure the requested
    /// accuracy. `Idle -> Configuring`.
    ///
    /// On any failure the state moves directly to `Closed` and the session
    /// is never started.
    pub async fn begin(&mut self) -> Result<(), StartupError> {
        if self.state != SessionState::Idle {
            return Err(StartupError::SessionExhausted);
        }
        self.state = SessionState::Configuring;

        let handle = match self.provider.create_session(&self.config.desktop_id).await {
            Ok(handle) => handle,
            Err(e) => {
                self.state = SessionState::Closed;
                return Err(StartupError::Create(e));
            }
        };
        debug!(desktop_id = %self.config.desktop_id, "session created");

        if let Err(e) = self.provider.configure(&handle, self.config.accuracy).await {
            self.state = SessionState::Closed;
            return Err(StartupError::Configure(e));
        }
        debug!(accuracy = %self.config.accuracy, "session configured");

        self.session = Some(Session {
            handle,
            desktop_id: self.config.desktop_id.clone(),
            accuracy: self.config.accuracy,
        });
        Ok(())
    }

    /// Start streaming and run the session event loop until it closes.
    ///
    /// `Configuring -> Active` on a successful provider start, at which
    /// point a single countdown timer is armed. The loop then selects over
    /// update receipt, timer expiry and the stop token; whichever fires
    /// first drives `Active -> Stopping -> Closed`. The timer fires at most
    /// once per session.
    ///
    /// Returns the [`StopReason`] on a clean close.
    pub async fn run<R: Renderer>(
        &mut self,
        dispatcher: &mut UpdateDispatcher<R>,
    ) -> Result<StopReason, StartupError> {
        if self.state != SessionState::Configuring {
            return Err(StartupError::NotConfigured);
        }
        let session = self.session.take().ok_or(StartupError::NotConfigured)?;

        let mut updates = match self.provider.subscribe(&session.handle).await {
            Ok(rx) => rx,
            Err(e) => {
                self.state = SessionState::Closed;
                return Err(StartupError::Subscribe(e));
            }
        };

        if let Err(e) = self.provider.start(&session.handle).await {
            self.state = SessionState::Closed;
            return Err(StartupError::Start(e));
        }
        self.state = SessionState::Active;

        // Single countdown timer; absolute deadline, armed exactly once.
        let deadline = Instant::now() + self.config.timeout;
        let stop = self.stop.clone();
        info!(
            desktop_id = %session.desktop_id,
            accuracy = %session.accuracy,
            timeout_secs = self.config.timeout.as_secs_f64(),
            "session active"
        );

        let reason = loop {
            tokio::select! {
                () = stop.cancelled() => break StopReason::Requested,
                () = time::sleep_until(deadline) => break StopReason::TimedOut,
                update = updates.recv() => match update {
                    Some(record) => dispatcher.dispatch(&record),
                    None => break StopReason::StreamEnded,
                },
            }
        };

        self.state = SessionState::Stopping;
        debug!(?reason, "stopping session");
        if let Err(e) = self.provider.stop(&session.handle).await {
            // Shutdown is best-effort; the session still closes.
            warn!(error = %e, "provider stop failed during shutdown");
        }
        self.state = SessionState::Closed;
        info!(?reason, delivered = dispatcher.delivered(), "session closed");
        Ok(reason)
    }
}
