pub mod app_shell;
pub mod textures;
pub mod transition;
