//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod charts;
pub mod details;
pub mod footer;
pub mod header;
pub mod kpis;
pub mod logs;
pub mod sessions;
