//! Reusable egui widgets
//!
//! Builder-style components: configure with chained setters, draw with
//! `show(ui)`.

mod button;
mod empty_state;
mod user_avatar;
mod user_card;
mod user_grid;

pub use button::{Button, ButtonVariant};
pub use empty_state::EmptyState;
pub use user_avatar::UserAvatar;
pub use user_card::UserCard;
pub use user_grid::{UserGrid, grid_columns};
