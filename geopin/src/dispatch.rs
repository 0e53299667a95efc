//! Update dispatch: forwards resolved positions to the renderer.

use tracing::{debug, warn};

use crate::position::PositionRecord;
use crate::render::Renderer;

/// Forwards each resolved position to the Renderer capability.
///
/// Dispatch is pure forwarding plus bookkeeping: updates are delivered in
/// receipt order with no deduplication or coalescing, and the dispatcher
/// blocks only for as long as the renderer's own `render` call takes. If the
/// renderer runs a blocking sub-loop (a legitimate variant), subsequent
/// updates are only processed once it yields control back; that is a
/// documented limitation of such renderers, not something masked here.
pub struct UpdateDispatcher<R: Renderer> {
    renderer: R,
    delivered: u64,
}

impl<R: Renderer> UpdateDispatcher<R> {
    /// Create a dispatcher forwarding to `renderer`.
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            delivered: 0,
        }
    }

    /// Forward one position record to the renderer.
    ///
    /// A renderer failure is logged and swallowed; the session stays up.
    pub fn dispatch(&mut self, record: &PositionRecord) {
        debug!(position = %record, "dispatching update");
        match self
            .renderer
            .render(record.latitude, record.longitude, record.accuracy)
        {
            Ok(()) => self.delivered += 1,
            Err(e) => warn!(error = %e, position = %record, "renderer failed"),
        }
    }

    /// Number of records the renderer has handled successfully.
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    /// Consume the dispatcher, returning the renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
