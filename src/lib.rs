//! Splatoon 3 companion: rotation schedule viewer and a local
//! win/loss tracker ranked by weapon, sub weapon and special.

pub mod analysis;
pub mod api;
pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod records;
