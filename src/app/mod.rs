pub mod controller;
pub mod events;
pub mod navigation;
pub mod state;
