//! GeoClue2 location provider over the D-Bus system bus.
//!
//! Protocol shape (all under the `org.freedesktop.GeoClue2` service):
//!
//! - **Manager** object: `CreateClient()` returns a fresh client object path.
//! - **Client** object: `Start()`/`Stop()` methods, writable `DesktopId` and
//!   `RequestedAccuracyLevel` properties, and a `LocationUpdated(old, new)`
//!   signal carrying the previous and new location object paths.
//! - **Location** object: read-only `Latitude`, `Longitude` and `Accuracy`
//!   properties, fetched once per update notification.
//!
//! GeoClue refuses `Start()` unless `DesktopId` is set first, so session
//! creation sets it immediately after `CreateClient`.

use futures_util::StreamExt;
use tokio::sync::mpsc;
use tracing::{debug, warn};
use zbus::zvariant::{ObjectPath, OwnedObjectPath};
use zbus::{proxy, Connection};

use super::types::{LocationProvider, ProviderError};
use crate::accuracy::AccuracyLevel;
use crate::position::PositionRecord;

/// Buffer size for the update channel between the signal pump and the
/// session event loop.
const UPDATE_CHANNEL_CAPACITY: usize = 16;

#[proxy(
    interface = "org.freedesktop.GeoClue2.Manager",
    default_service = "org.freedesktop.GeoClue2",
    default_path = "/org/freedesktop/GeoClue2/Manager"
)]
trait Manager {
    /// Create a new client session object and return its path.
    fn create_client(&self) -> zbus::Result<OwnedObjectPath>;
}

#[proxy(
    interface = "org.freedesktop.GeoClue2.Client",
    default_service = "org.freedesktop.GeoClue2"
)]
trait Client {
    fn start(&self) -> zbus::Result<()>;

    fn stop(&self) -> zbus::Result<()>;

    #[zbus(property)]
    fn desktop_id(&self) -> zbus::Result<String>;

    #[zbus(property)]
    fn set_desktop_id(&self, desktop_id: &str) -> zbus::Result<()>;

    #[zbus(property)]
    fn requested_accuracy_level(&self) -> zbus::Result<u32>;

    #[zbus(property)]
    fn set_requested_accuracy_level(&self, level: u32) -> zbus::Result<()>;

    #[zbus(signal)]
    fn location_updated(
        &self,
        old_location: ObjectPath<'_>,
        new_location: ObjectPath<'_>,
    ) -> zbus::Result<()>;
}

#[proxy(
    interface = "org.freedesktop.GeoClue2.Location",
    default_service = "org.freedesktop.GeoClue2"
)]
trait Location {
    #[zbus(property)]
    fn latitude(&self) -> zbus::Result<f64>;

    #[zbus(property)]
    fn longitude(&self) -> zbus::Result<f64>;

    #[zbus(property)]
    fn accuracy(&self) -> zbus::Result<f64>;
}

/// An active GeoClue2 client session.
///
/// Wraps the client proxy for the object path the Manager allocated. Owned
/// exclusively by the session controller; dropped when the session closes.
pub struct GeoClueSession {
    client: ClientProxy<'static>,
}

impl GeoClueSession {
    /// Object path of the underlying client object.
    pub fn path(&self) -> &ObjectPath<'static> {
        self.client.inner().path()
    }
}

impl std::fmt::Debug for GeoClueSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeoClueSession")
            .field("path", &self.path().as_str())
            .finish()
    }
}

/// Location provider backed by the GeoClue2 D-Bus service.
///
/// Holds the single process-wide system bus connection as explicitly owned
/// context; construct it once at startup with [`GeoClueProvider::connect`]
/// and pass it into the session controller.
#[derive(Debug, Clone)]
pub struct GeoClueProvider {
    connection: Connection,
}

impl GeoClueProvider {
    /// Connect to the D-Bus system bus.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Unavailable`] if the system bus cannot be
    /// reached.
    pub async fn connect() -> Result<Self, ProviderError> {
        let connection = Connection::system()
            .await
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;
        Ok(Self { connection })
    }
}

impl LocationProvider for GeoClueProvider {
    type Handle = GeoClueSession;

    async fn create_session(&self, desktop_id: &str) -> Result<GeoClueSession, ProviderError> {
        let manager = ManagerProxy::new(&self.connection)
            .await
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;

        let path = manager
            .create_client()
            .await
            .map_err(|e| ProviderError::SessionCreation(e.to_string()))?;

        debug!(path = %path, "GeoClue client created");

        let client = ClientProxy::builder(&self.connection)
            .path(path)
            .map_err(|e| ProviderError::SessionCreation(e.to_string()))?
            .build()
            .await
            .map_err(|e| ProviderError::SessionCreation(e.to_string()))?;

        client
            .set_desktop_id(desktop_id)
            .await
            .map_err(|e| ProviderError::SessionCreation(e.to_string()))?;

        Ok(GeoClueSession { client })
    }

    async fn configure(
        &self,
        handle: &GeoClueSession,
        level: AccuracyLevel,
    ) -> Result<(), ProviderError> {
        handle
            .client
            .set_requested_accuracy_level(level.ordinal())
            .await
            .map_err(|e| ProviderError::ConfigurationRejected(e.to_string()))
    }

    async fn start(&self, handle: &GeoClueSession) -> Result<(), ProviderError> {
        handle
            .client
            .start()
            .await
            .map_err(|e| ProviderError::Unavailable(e.to_string()))
    }

    async fn stop(&self, handle: &GeoClueSession) -> Result<(), ProviderError> {
        // GeoClue treats Stop on a stopped client as a no-op, which keeps
        // this call idempotent on our side as well.
        handle
            .client
            .stop()
            .await
            .map_err(|e| ProviderError::Unavailable(e.to_string()))
    }

    async fn subscribe(
        &self,
        handle: &GeoClueSession,
    ) -> Result<mpsc::Receiver<PositionRecord>, ProviderError> {
        let mut signals = handle
            .client
            .receive_location_updated()
            .await
            .map_err(|e| ProviderError::SubscriptionFailed(e.to_string()))?;

        let (tx, rx) = mpsc::channel(UPDATE_CHANNEL_CAPACITY);
        let connection = self.connection.clone();

        tokio::spawn(async move {
            loop {
                let signal = tokio::select! {
                    maybe = signals.next() => match maybe {
                        Some(signal) => signal,
                        None => break,
                    },
                    // The session event loop dropped its receiver; tear the
                    // pump down so the bus connection clone does not outlive
                    // the session.
                    () = tx.closed() => break,
                };

                let args = match signal.args() {
                    Ok(args) => args,
                    Err(e) => {
                        warn!(error = %e, "dropping malformed LocationUpdated signal");
                        continue;
                    }
                };

                // One synchronous round trip per notification to resolve the
                // new location object's properties.
                match resolve_location(&connection, args.new_location()).await {
                    Ok(record) if !record.in_bounds() => {
                        warn!(position = %record, "dropping update with out-of-range coordinates");
                    }
                    Ok(record) => {
                        debug!(position = %record, "location update resolved");
                        if tx.send(record).await.is_err() {
                            // Session event loop is gone; stop pumping.
                            break;
                        }
                    }
                    Err(e) => {
                        // Recoverable: drop this update, keep the session.
                        warn!(error = %e, "dropping update after property fetch failure");
                    }
                }
            }
            debug!("LocationUpdated signal pump stopped");
        });

        Ok(rx)
    }
}

/// Resolve a location object path to a concrete position record.
async fn resolve_location(
    connection: &Connection,
    path: &ObjectPath<'_>,
) -> Result<PositionRecord, ProviderError> {
    let path: OwnedObjectPath = path.clone().into();
    let location = LocationProxy::builder(connection)
        .path(path)
        .map_err(|e| ProviderError::PropertyFetch(e.to_string()))?
        .build()
        .await
        .map_err(|e| ProviderError::PropertyFetch(e.to_string()))?;

    let latitude = location
        .latitude()
        .await
        .map_err(|e| ProviderError::PropertyFetch(e.to_string()))?;
    let longitude = location
        .longitude()
        .await
        .map_err(|e| ProviderError::PropertyFetch(e.to_string()))?;
    let accuracy = location
        .accuracy()
        .await
        .map_err(|e| ProviderError::PropertyFetch(e.to_string()))?;

    Ok(PositionRecord::new(latitude, longitude, accuracy))
}
