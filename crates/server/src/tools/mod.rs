//! MCP tool implementations.
//!
//! This module contains all tools exposed by the vidcat server.

pub mod search_videos;

pub use search_videos::{SearchVideosParams, search_videos_impl};
