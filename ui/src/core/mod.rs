//! Platform-facing building blocks shared by the translator.

pub mod config;
pub mod platform;
pub mod storage;
pub mod timing;
