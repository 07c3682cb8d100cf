//! # hospitality-panel
//!
//! Command-line client for the Anokha hospitality back office: registrant
//! accommodation status, gate and hostel scan logs, unclaimed bed
//! allotments, hostel inventory and campus analytics.
//!
//! Every list screen downloads its full collection once and hands it to a
//! [`hospitality_seeker::ViewCoordinator`], which does search, filtering,
//! facets and pagination locally.
//!
//! The crate is split along the same seams as the screens:
//!
//! - [`api`]: HTTP client and response envelopes
//! - [`source`] and [`session`]: the traits screens depend on, plus the stored cookie
//! - [`screens`]: per-screen filter schemas and table columns
//! - [`views`] and [`render`]: result types and their text or structured output
//! - [`cli`]: argument parsing and command dispatch

pub mod api;
pub mod browse;
pub mod cli;
pub mod config;
pub mod error;
pub mod hostel_form;
pub mod logging;
pub mod models;
pub mod render;
pub mod screens;
pub mod serve;
pub mod session;
pub mod source;
pub mod views;

pub use error::{PanelError, Result};
