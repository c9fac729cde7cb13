/// Commands initiated by the UI (View -> Controller)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    /// Reorder the current list by first name (no fetch)
    SortByFirstName,
    /// Flip the phone filter and fetch again
    ToggleFilterByPhone,
}
