//! Customer behaviour analytics on synthetic data.
//!
//! The [`data`] module is UI-free: generation, statistics, cleaning and
//! export. [`state`] wires one [`data::CustomerDataset`] to the views in
//! [`ui`], and [`app`] hosts them in an eframe window.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod state;
pub mod ui;
