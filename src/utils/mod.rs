//! Configuration utilities

pub mod config;

pub use config::{GpsSettings, ObjectConfig, SceneConfig};
