pub mod app;
pub mod data;
pub mod model;
pub mod progress;
pub mod store;
pub mod ui;
pub mod view_models;

pub use app::IceTrialsApp;
