//! Image retrieval over HTTP.
//!
//! The fetcher is a thin boundary around `reqwest` and the `image`
//! decoder: one GET with a browser-like User-Agent, a status check, and a
//! decode. Everything downstream operates on the returned pixel grid.

mod client;

pub use client::{FetchError, ImageClient, USER_AGENT};
