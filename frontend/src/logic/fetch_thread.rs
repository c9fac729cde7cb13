//! One-shot fetch workers.

use crate::events::LogicEvent;
use crate::infrastructure::{FetchError, UserSource};
use crate::models::{PhoneFilter, UserRecord};
use logging::Logger;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

/// Runs one fetch on a fresh thread and reports the outcome on `evt_tx`.
pub(super) fn spawn_fetch(
    request_id: u64,
    filter: PhoneFilter,
    source: Arc<dyn UserSource>,
    evt_tx: Sender<LogicEvent>,
    logger: Logger,
) {
    let worker_tx = evt_tx.clone();
    let worker_logger = logger.clone();

    let spawned = thread::Builder::new()
        .name(format!("fetch-{}", request_id))
        .spawn(move || {
            let event = match load_users(source.as_ref(), &filter) {
                Ok(users) => {
                    worker_logger.info(&format!(
                        "[FETCH] #{} returned {} user(s)",
                        request_id,
                        users.len()
                    ));
                    LogicEvent::UsersLoaded { request_id, users }
                }
                Err(error) => {
                    worker_logger.error(&format!("[FETCH] #{} failed: {}", request_id, error));
                    LogicEvent::UsersLoadFailed { request_id, error }
                }
            };

            // UI gone: nothing left to update.
            let _ = worker_tx.send(event);
        });

    if let Err(e) = spawned {
        logger.error(&format!(
            "[FETCH] Could not spawn worker for #{}: {}",
            request_id, e
        ));
        let _ = evt_tx.send(LogicEvent::UsersLoadFailed {
            request_id,
            error: FetchError::Http {
                status: None,
                message: format!("worker thread unavailable: {}", e),
            },
        });
    }
}

/// Fetches the full list and applies the filter captured at request time.
pub(super) fn load_users(
    source: &dyn UserSource,
    filter: &PhoneFilter,
) -> Result<Vec<UserRecord>, FetchError> {
    let users = source.fetch_users()?;
    Ok(filter.apply(users))
}
