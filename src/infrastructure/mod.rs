// src/infrastructure/mod.rs
pub mod config;
pub mod http;
pub mod storage;

pub use config::Config;
pub use http::HttpRemoteStore;
pub use storage::{FileStore, MemoryStore};
