//! # Blog Shared
//!
//! Wire types shared between the server and its clients.
//! Kept free of domain dependencies so clients can use it on its own.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
