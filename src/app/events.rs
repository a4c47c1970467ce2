#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Next,
    Previous,
    ToggleFavorite(usize),
    Quit,
}
