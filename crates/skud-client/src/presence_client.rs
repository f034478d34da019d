//! The presence client state machine.
//!
//! ```text
//! REGISTER --register--> MAIN --change_status--> CONFIRM
//!     ^                   ^  \                      |
//!     |                   |   `------go_back--------'
//!     `-- unknown identity on initialize
//! ```
//!
//! Every public operation catches its own errors and turns them into a
//! notification; the returned `Screen` is the screen after the operation.
//! An operation triggered from a screen that does not offer it is ignored.

use crate::geolocation::{FixedPosition, GeolocationProvider, Geolocator, PositionOptions};
use crate::identity::{IdentityStore, StoredIdentity};
use crate::in_flight::InFlightGuard;
use crate::notification::{Notification, Notifier};
use crate::screen::{MainView, Screen};
use crate::{ApiClient, ClientError, ClientResult};

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::{debug, info, warn};
use skud_config::{Config, FetchFailurePolicy};
use skud_core::{Coordinates, FullName, PresenceStatus, StatusDisplay};
use tokio::sync::{Mutex, watch};

/// Behaviour knobs that are not part of any collaborator
#[derive(Debug, Clone, Copy)]
pub struct ClientSettings {
    pub notification_duration: Duration,
    pub on_fetch_failure: FetchFailurePolicy,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            notification_duration: Duration::from_secs(3),
            on_fetch_failure: FetchFailurePolicy::Register,
        }
    }
}

impl From<&Config> for ClientSettings {
    fn from(config: &Config) -> Self {
        Self {
            notification_duration: config.notification.duration(),
            on_fetch_failure: config.startup.on_fetch_failure,
        }
    }
}

pub struct PresenceClient {
    api: ApiClient,
    identity: Arc<dyn IdentityStore>,
    geolocator: Geolocator,
    notifier: Notifier,
    on_fetch_failure: FetchFailurePolicy,
    screen: Mutex<Screen>,
    in_flight: AtomicBool,
    cancel_tx: watch::Sender<u64>,
}

impl PresenceClient {
    pub fn new(
        api: ApiClient,
        identity: Arc<dyn IdentityStore>,
        geolocator: Geolocator,
        settings: ClientSettings,
    ) -> Self {
        let (cancel_tx, _) = watch::channel(0);
        Self {
            api,
            identity,
            geolocator,
            notifier: Notifier::new(settings.notification_duration),
            on_fetch_failure: settings.on_fetch_failure,
            screen: Mutex::new(Screen::Register),
            in_flight: AtomicBool::new(false),
            cancel_tx,
        }
    }

    /// Wire up a client from configuration.
    ///
    /// A fixed position from the config takes precedence over `provider`;
    /// with geolocation disabled no provider is consulted at all.
    pub fn from_config(
        config: &Config,
        identity: Arc<dyn IdentityStore>,
        provider: Arc<dyn GeolocationProvider>,
    ) -> ClientResult<Self> {
        let api = ApiClient::from_config(&config.api)?;

        let geolocator = if !config.geolocation.enabled {
            Geolocator::disabled()
        } else {
            let provider = match config.geolocation.fixed_position() {
                Some((latitude, longitude)) => Arc::new(FixedPosition::new(Coordinates::new(
                    latitude, longitude,
                ))) as Arc<dyn GeolocationProvider>,
                None => provider,
            };
            Geolocator::new(provider, PositionOptions::from(&config.geolocation))
        };

        Ok(Self::new(
            api,
            identity,
            geolocator,
            ClientSettings::from(config),
        ))
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub async fn screen(&self) -> Screen {
        self.screen.lock().await.clone()
    }

    /// The visible notification, if it has not expired yet
    pub fn notification(&self) -> Option<Notification> {
        self.notifier.current()
    }

    /// True while an operation is waiting on the network or geolocation
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Abort the wait of the in-flight operation, if any.
    ///
    /// The operation ends with a "cancelled" notification and leaves the
    /// screen as it was. A request already received by the server may still
    /// take effect there.
    pub fn cancel(&self) {
        self.cancel_tx.send_modify(|generation| *generation += 1);
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Decide the first screen from the persisted identity.
    pub async fn initialize(&self) -> Screen {
        let Some(_guard) = self.begin("initialize", |_| true).await else {
            return self.screen().await;
        };

        let stored = match self.identity.load() {
            Ok(stored) => stored,
            Err(e) => {
                self.fail(&e.into());
                return self.transition(Screen::Register).await;
            }
        };

        let Some(stored) = stored else {
            info!("No identity on this device, showing registration");
            return self.transition(Screen::Register).await;
        };

        match self.cancellable(self.api.get_status(&stored.user_id)).await {
            Ok(snapshot) => {
                self.transition(Screen::Main(MainView::from_snapshot(&snapshot)))
                    .await
            }
            Err(e) if e.is_unknown_identity() => {
                warn!("Server does not know {}, clearing identity", stored.user_id);
                if let Err(clear_err) = self.identity.clear() {
                    self.fail(&clear_err.into());
                }
                self.transition(Screen::Register).await
            }
            Err(e) if e.is_cancelled() => {
                self.fail(&e);
                self.screen().await
            }
            Err(e) => {
                self.fail(&e);
                match self.on_fetch_failure {
                    FetchFailurePolicy::Register => self.transition(Screen::Register).await,
                    FetchFailurePolicy::Offline => {
                        self.transition(Screen::Main(MainView::offline(stored.full_name)))
                            .await
                    }
                }
            }
        }
    }

    /// Register a resident and remember the issued identity.
    ///
    /// Names shorter than two characters after trimming are rejected
    /// without a network call.
    pub async fn register(&self, full_name: &str) -> Screen {
        let Some(_guard) = self
            .begin("register", |screen| matches!(screen, Screen::Register))
            .await
        else {
            return self.screen().await;
        };

        match self.try_register(full_name).await {
            Ok(screen) => self.transition(screen).await,
            Err(e) => {
                self.fail(&e);
                self.screen().await
            }
        }
    }

    /// Submit a new status, with a position fix when one can be had.
    pub async fn change_status(&self, status: PresenceStatus) -> Screen {
        let Some(_guard) = self
            .begin("change_status", |screen| {
                screen.main_view().is_some_and(|view| view.offers(status))
            })
            .await
        else {
            return self.screen().await;
        };

        match self.try_change_status(status).await {
            Ok(screen) => self.transition(screen).await,
            Err(e) => self.recover(e).await,
        }
    }

    /// Re-sync with the server and show the main screen.
    pub async fn go_back(&self) -> Screen {
        let Some(_guard) = self
            .begin("go_back", |screen| match screen {
                Screen::Confirm(_) => true,
                Screen::Main(view) => view.is_offline(),
                Screen::Register => false,
            })
            .await
        else {
            return self.screen().await;
        };

        match self.try_go_back().await {
            Ok(screen) => self.transition(screen).await,
            Err(e) => self.recover(e).await,
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn try_register(&self, input: &str) -> ClientResult<Screen> {
        let full_name = FullName::parse(input)?;

        let registration = self.cancellable(self.api.register(&full_name)).await?;
        info!("Registered {} as {}", registration.full_name, registration.user_id);

        let stored = StoredIdentity::new(
            registration.user_id.clone(),
            Some(registration.full_name.clone()),
        );
        self.identity.save(&stored)?;

        Ok(Screen::Main(MainView::from_snapshot(&registration.into())))
    }

    async fn try_change_status(&self, status: PresenceStatus) -> ClientResult<Screen> {
        let stored = self.require_identity()?;

        let coordinates = self
            .cancellable(async { Ok(self.geolocator.locate().await) })
            .await?;

        let snapshot = self
            .cancellable(self.api.update_status(&stored.user_id, status, coordinates))
            .await?;
        info!(
            "Status of {} is now {} (position attached: {})",
            stored.user_id,
            snapshot.status,
            coordinates.is_some()
        );

        Ok(Screen::Confirm(StatusDisplay::acknowledgement_for(
            &snapshot.status,
        )))
    }

    async fn try_go_back(&self) -> ClientResult<Screen> {
        let stored = self.require_identity()?;
        let snapshot = self.cancellable(self.api.get_status(&stored.user_id)).await?;
        Ok(Screen::Main(MainView::from_snapshot(&snapshot)))
    }

    fn require_identity(&self) -> ClientResult<StoredIdentity> {
        self.identity
            .load()?
            .ok_or_else(ClientError::not_registered)
    }

    /// Notify, then stay put, except that a missing identity sends the
    /// resident back to registration.
    async fn recover(&self, error: ClientError) -> Screen {
        self.fail(&error);
        if matches!(error, ClientError::NotRegistered { .. }) {
            return self.transition(Screen::Register).await;
        }
        self.screen().await
    }

    /// Claim the in-flight flag if `permitted` accepts the current screen.
    ///
    /// Either refusal is silent apart from a debug log.
    async fn begin(
        &self,
        operation: &str,
        permitted: impl FnOnce(&Screen) -> bool,
    ) -> Option<InFlightGuard<'_>> {
        let Some(guard) = InFlightGuard::try_acquire(&self.in_flight) else {
            debug!("Ignoring {operation}: another operation is in flight");
            return None;
        };

        let screen = self.screen.lock().await;
        if !permitted(&screen) {
            debug!("Ignoring {operation}: not offered on the {} screen", screen.kind());
            return None;
        }
        Some(guard)
    }

    /// Race `operation` against `cancel()`.
    async fn cancellable<T, F>(&self, operation: F) -> ClientResult<T>
    where
        F: Future<Output = ClientResult<T>>,
    {
        let mut cancel_rx = self.cancel_tx.subscribe();
        tokio::select! {
            result = operation => result,
            _ = cancel_rx.changed() => Err(ClientError::cancelled()),
        }
    }

    async fn transition(&self, next: Screen) -> Screen {
        let mut screen = self.screen.lock().await;
        if screen.kind() != next.kind() {
            debug!("Screen {} -> {}", screen.kind(), next.kind());
        }
        *screen = next.clone();
        next
    }

    fn fail(&self, error: &ClientError) {
        warn!("{error}");
        if let ClientError::Identity { source } = error {
            warn!("{}", source.recovery_hint());
        }
        self.notifier.show(error.user_message());
    }
}
