//! Vimeo API module.
//!
//! This module provides:
//! - HTTP client for the Vimeo REST API
//! - The paging source seam the harvester walks
//! - API response types

pub mod client;
pub mod paging;
pub mod types;

pub use client::VimeoApi;
pub use paging::PagingSource;
pub use types::{Paging, RawVideo, UserInfo, VideosPage};
