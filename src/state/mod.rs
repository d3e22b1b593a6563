// State management module
// Holds the shared storage handle passed to every request handler

pub mod app_state;

pub use app_state::AppState;
