//! Framework-light building blocks shared by views: persistence, platform glue, theme, consent.

pub mod consent;
pub mod platform;
pub mod storage;
pub mod theme;
