//! NewsRack - A categorized RSS feed aggregator
//!
//! This crate fetches RSS feeds for a set of topical categories, routing
//! each request through a list of relay endpoints with ordered fallback,
//! and normalizes the entries into plain article records sorted by
//! recency. Display concerns live in [`render`]; everything else is the
//! pipeline.

pub mod article;
pub mod config;
pub mod extract;
pub mod fetcher;
pub mod placeholder;
pub mod render;
