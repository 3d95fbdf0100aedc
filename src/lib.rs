// src/lib.rs

//! Podcast Catalog Library
//!
//! Loads episode and guest documents once and recomputes sorted,
//! filtered, searched and paginated card views on every interaction.

pub mod controller;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod source;
pub mod utils;
