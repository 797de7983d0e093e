//! Client side of the guest store.

use api::types::{GuestRecord, GuestRsvp};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("failed to store RSVP: {0}")]
    Insert(String),
    #[error("failed to load RSVPs: {0}")]
    List(String),
}

/// The two remote operations the site needs.
#[async_trait(?Send)]
pub trait GuestStore {
    async fn insert_guest(&self, rsvp: GuestRsvp) -> Result<Uuid, StoreError>;
    async fn list_guests(&self) -> Result<Vec<GuestRecord>, StoreError>;
}

/// Talks to the server functions of the `api` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerGuestStore;

#[async_trait(?Send)]
impl GuestStore for ServerGuestStore {
    async fn insert_guest(&self, rsvp: GuestRsvp) -> Result<Uuid, StoreError> {
        api::submit_rsvp(rsvp).await.map_err(|e| {
            tracing::warn!("store.insert_guest: {e}");
            StoreError::Insert(e.to_string())
        })
    }

    async fn list_guests(&self) -> Result<Vec<GuestRecord>, StoreError> {
        api::list_guests().await.map_err(|e| {
            tracing::warn!("store.list_guests: {e}");
            StoreError::List(e.to_string())
        })
    }
}
