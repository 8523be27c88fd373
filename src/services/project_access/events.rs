//! Event subscription functionality for the project access service

use super::service::ProjectAccessService;
use super::types::AccessEvent;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tracing::warn;

/// Scoped subscription to membership change events
///
/// Dropping the subscription unsubscribes.
#[derive(Debug)]
pub struct AccessSubscription {
    receiver: broadcast::Receiver<AccessEvent>,
}

impl AccessSubscription {
    /// Wait for the next event
    ///
    /// Returns `None` once the service and all its clones are gone. Events
    /// missed because the subscriber fell behind are skipped.
    pub async fn recv(&mut self) -> Option<AccessEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Access event subscriber lagged, skipped {} events", skipped);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Take the next event if one is already queued
    pub fn try_recv(&mut self) -> Option<AccessEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!("Access event subscriber lagged, skipped {} events", skipped);
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
            }
        }
    }
}

impl ProjectAccessService {
    /// Subscribe to membership change events
    pub fn subscribe(&self) -> AccessSubscription {
        AccessSubscription {
            receiver: self.event_sender.subscribe(),
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.event_sender.receiver_count()
    }
}
