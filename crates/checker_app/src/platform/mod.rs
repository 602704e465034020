mod app;
mod effects;
mod host;
mod logging;
mod persistence;

pub use app::run_app;
