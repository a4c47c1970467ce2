#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub navigations: u64,
    pub quit_requested: bool,
}
