pub mod alarm;
pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod notify;
pub mod projection;
pub mod schedule;
pub mod state;
pub mod stats;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{JsonFileGateway, MemoryGateway, PersistenceGateway};
pub use store::RecordStore;
