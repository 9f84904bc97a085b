// src/infrastructure/mod.rs
pub mod config;
pub mod seed;

pub use config::Config;
pub use seed::seed_demo;
