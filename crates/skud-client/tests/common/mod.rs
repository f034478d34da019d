#![allow(dead_code)]

use skud_client::{
    ApiClient, ClientSettings, GeolocationError, GeolocationProvider, Geolocator,
    IdentityStore, MemoryIdentityStore, PositionOptions, PresenceClient, StoredIdentity,
};
use skud_config::FetchFailurePolicy;
use skud_core::{Coordinates, UserId};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const USER_ID: &str = "u1";

/// Geolocation provider that never answers.
pub struct HangingProvider;

#[async_trait]
impl GeolocationProvider for HangingProvider {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinates, GeolocationError> {
        std::future::pending().await
    }
}

pub fn stored(id: &str) -> StoredIdentity {
    StoredIdentity::new(UserId::new(id).unwrap(), Some("Ann Lee".into()))
}

pub fn fast_options() -> PositionOptions {
    PositionOptions {
        high_accuracy: true,
        timeout: Duration::from_millis(50),
        maximum_age: Duration::from_secs(60),
    }
}

pub fn client_with(
    server: &MockServer,
    identity: Arc<dyn IdentityStore>,
    geolocator: Geolocator,
    on_fetch_failure: FetchFailurePolicy,
) -> PresenceClient {
    let api = ApiClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
    PresenceClient::new(
        api,
        identity,
        geolocator,
        ClientSettings {
            notification_duration: Duration::from_secs(3),
            on_fetch_failure,
        },
    )
}

pub fn client(server: &MockServer, identity: Arc<dyn IdentityStore>) -> PresenceClient {
    client_with(
        server,
        identity,
        Geolocator::disabled(),
        FetchFailurePolicy::Register,
    )
}

pub fn empty_store() -> Arc<MemoryIdentityStore> {
    Arc::new(MemoryIdentityStore::new())
}

pub fn registered_store(id: &str) -> Arc<MemoryIdentityStore> {
    Arc::new(MemoryIdentityStore::with_identity(stored(id)))
}

pub fn status_body(full_name: &str, status: &str) -> Value {
    json!({
        "user_id": USER_ID,
        "full_name": full_name,
        "status": status,
        "last_update": "2026-10-15T08:00:00"
    })
}

pub async fn mount_status(server: &MockServer, id: &str, full_name: &str, status: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/status/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_body(full_name, status)))
        .mount(server)
        .await;
}

pub async fn mount_unknown_identity(server: &MockServer, id: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/status/{id}")))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Пользователь не найден"})),
        )
        .mount(server)
        .await;
}

/// Answer the next status fetch only; later fetches fall through to
/// mocks mounted after this one.
pub async fn mount_status_once(server: &MockServer, id: &str, full_name: &str, status: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/status/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_body(full_name, status)))
        .up_to_n_times(1)
        .mount(server)
        .await;
}
