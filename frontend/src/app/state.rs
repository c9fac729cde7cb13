//! Application State
//!
//! Defines the main application state and the MVU loop.
//!
//! # MVU Loop
//!
//! The `eframe::App::update()` implementation follows this flow:
//! 1. Apply fetch results from the logic thread (non-blocking)
//! 2. Render the page (returns at most one UI command)
//! 3. Handle the UI command (state mutation, maybe a new fetch)

use crate::config::AppConfig;
use crate::events::{LogicCommand, LogicEvent};
use crate::infrastructure::{HexlabsClient, UserSource};
use crate::pages::{GridLayout, UserListView};
use logging::Logger;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::Duration;

/// Repaint interval while a fetch is outstanding
const PENDING_REPAINT: Duration = Duration::from_millis(100);

/// Main application state - MVU Controller
pub struct App {
    // Logger
    pub(super) logger: Logger,

    // UI State
    pub(super) view: UserListView,
    pub(super) layout: GridLayout,

    // Fetch bookkeeping
    pub(super) next_request_id: u64,
    pub(super) in_flight: usize,

    // Logic Thread Communication
    pub(super) logic_cmd_tx: Sender<LogicCommand>,
    pub(super) logic_evt_rx: Receiver<LogicEvent>,
}

impl App {
    /// Creates the app from the on-disk configuration and the real
    /// Hexlabs client. Exits the process if the logger or the HTTP client
    /// cannot be created.
    pub fn new(config: AppConfig) -> Self {
        let logger = match Logger::builder(&config.log_path)
            .level(config.log_level)
            .component("Frontend")
            .console_output(config.log_to_console)
            .build()
        {
            Ok(logger) => logger,
            Err(e) => {
                eprintln!("Failed to initialize logger: {}", e);
                std::process::exit(1);
            }
        };

        logger.info("[APP] Initializing application...");
        logger.info(&format!(
            "[APP] Configuration loaded - api: {}, phone prefix: {}, log_level: {}",
            config.api_base_url, config.phone_prefix, config.log_level
        ));

        let client = match HexlabsClient::new(&config) {
            Ok(client) => client,
            Err(e) => {
                logger.error(&format!("[APP] Failed to create HTTP client: {}", e));
                eprintln!("Failed to create HTTP client: {}", e);
                std::process::exit(1);
            }
        };
        logger.info(&format!("[APP] Users endpoint: {}", client.users_url()));

        Self::with_source(&config, logger, Arc::new(client))
    }

    /// Creates the app around any user source and performs the initial load
    pub fn with_source(config: &AppConfig, logger: Logger, source: Arc<dyn UserSource>) -> Self {
        let (logic_cmd_tx, logic_cmd_rx) = channel();
        let (logic_evt_tx, logic_evt_rx) = channel();

        logger.info("[APP] Starting logic thread...");
        let logic_logger = logger.for_component("Logic");
        std::thread::spawn(move || {
            crate::logic::run_logic_thread(logic_cmd_rx, logic_evt_tx, source, logic_logger);
        });

        let mut app = Self {
            logger,
            view: UserListView::new(config.phone_prefix.clone()),
            layout: GridLayout::default(),
            next_request_id: 0,
            in_flight: 0,
            logic_cmd_tx,
            logic_evt_rx,
        };

        // Initial mount
        app.request_users();

        app.logger.info("[APP] Application initialized successfully");
        app
    }

    /// Applies every event already waiting on the channel
    fn drain_logic_events(&mut self) {
        while let Ok(event) = self.logic_evt_rx.try_recv() {
            self.handle_logic_event(event);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --- MVU UPDATE LOOP ---

        // 1. Apply fetch results
        self.drain_logic_events();

        // 2. Keep polling while requests are outstanding
        if self.in_flight > 0 {
            ctx.request_repaint_after(PENDING_REPAINT);
        }

        // 3. Render the view and collect a UI command
        let (ui_command, layout) = self.view.show(ctx);
        if layout != self.layout {
            self.logger.debug(&format!(
                "[UI] Grid now {} card(s) in {} column(s)",
                layout.cards, layout.columns
            ));
            self.layout = layout;
        }

        // 4. Process UI command (if any)
        if let Some(command) = ui_command {
            self.handle_ui_command(command);
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if self.in_flight > 0 {
            self.logger.info(&format!(
                "[APP] Exiting with {} fetch(es) still in flight",
                self.in_flight
            ));
        }
        self.logger.info("[APP] Application shutting down, goodbye!");
    }
}
