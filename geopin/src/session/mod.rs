//! Session lifecycle management
//!
//! A session is one negotiated request for location data with a provider,
//! bounded in accuracy and lifetime. This module owns the lifecycle state
//! machine (`Idle -> Configuring -> Active -> Stopping -> Closed`), the
//! countdown timer that bounds session lifetime, and the event loop that
//! feeds position updates to the dispatcher.
//!
//! ```ignore
//! use geopin::session::{SessionController, StopReason};
//!
//! let mut controller = SessionController::new(provider, config);
//! let stop = controller.stop_handle();
//!
//! controller.begin().await?;                      // Idle -> Configuring
//! let reason = controller.run(&mut dispatcher).await?; // ... -> Closed
//! assert!(matches!(reason, StopReason::TimedOut | StopReason::Requested | StopReason::StreamEnded));
//! ```

mod controller;
mod state;

pub use controller::{SessionController, StartupError, StopHandle, StopReason};
pub use state::SessionState;
