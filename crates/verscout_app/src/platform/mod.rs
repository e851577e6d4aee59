mod app;
mod effects;
pub mod logging;
mod preferences;
mod ui;

pub use app::run_app;
