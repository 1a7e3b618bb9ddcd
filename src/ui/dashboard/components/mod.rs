//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod decision;
pub mod footer;
pub mod header;
pub mod logs;
pub mod portfolio;
pub mod status;
