//! HTTP helpers for the server's JSON API.

pub mod summary;
