//! HTTP handlers

pub mod entities;
pub mod health;

pub use health::health;
