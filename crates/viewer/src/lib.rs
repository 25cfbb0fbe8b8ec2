//! Pawsome catalog viewer.
//!
//! Fetches the dog list and the featured subset from the API, keeps a
//! client-side breed filter over them, and renders the catalog as text.
//! When the API cannot be reached the viewer substitutes a fixed sample
//! set so the catalog stays explorable.

pub mod catalog;
pub mod client;
pub mod model;
pub mod render;
pub mod sample;
