//! Application Module - MVU Controller
//!
//! Coordinates the view (pages) and the background logic thread.
//!
//! # Structure
//!
//! - `state.rs`: application state and the eframe update loop
//! - `ui_handler.rs`: applies UI commands (sort, filter toggle)
//! - `logic_handler.rs`: applies fetch results from the logic thread
//!
//! # Communication Flow
//!
//! ```text
//! View (pages) --> UiCommand --> ui_handler --> State mutation
//!                                          \--> LogicCommand --> Logic thread
//!
//! Logic thread --> LogicEvent --> logic_handler --> State update (user list)
//! ```

mod logic_handler;
mod state;
mod ui_handler;

pub use state::App;
