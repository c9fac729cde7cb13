//! Logic thread coordinator
//!
//! Receives [`LogicCommand`]s from the UI thread and answers with
//! [`LogicEvent`]s. Each fetch runs on its own worker thread, so several
//! requests can be in flight at once and their results arrive in completion
//! order, not issue order.

mod fetch_thread;

use crate::events::{LogicCommand, LogicEvent};
use crate::infrastructure::UserSource;
use fetch_thread::spawn_fetch;
use logging::Logger;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};

/// Main function of the logic thread.
/// Returns once the UI drops its command sender.
pub fn run_logic_thread(
    cmd_rx: Receiver<LogicCommand>,
    evt_tx: Sender<LogicEvent>,
    source: Arc<dyn UserSource>,
    logger: Logger,
) {
    logger.info("[LOGIC] Logic thread started");

    for command in cmd_rx {
        match command {
            LogicCommand::FetchUsers { request_id, filter } => {
                logger.debug(&format!(
                    "[LOGIC] FetchUsers #{} (filter: {}, prefix: {})",
                    request_id, filter.enabled, filter.prefix
                ));
                spawn_fetch(
                    request_id,
                    filter,
                    Arc::clone(&source),
                    evt_tx.clone(),
                    logger.clone(),
                );
            }
        }
    }

    logger.info("[LOGIC] Command channel closed, logic thread exiting");
}
