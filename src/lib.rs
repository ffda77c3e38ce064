//! `schedshot` - `Planning Center` schedule to image generator.
//!
//! Fetches upcoming service plans from `Planning Center` Online, filters
//! team members by position, renders the schedule into an HTML table, and
//! rasterizes it into an image file via `wkhtmltoimage`.

// Re-export public modules for use in integration tests and as a library
pub mod config;
pub mod error;
pub mod export;
pub mod planning_center;
pub mod render;
pub mod schedule;
