//! Platform-agnostic plumbing shared by the questionnaire and results modules.

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod platform;
pub mod session;
pub mod storage;
