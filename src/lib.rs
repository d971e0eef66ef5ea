//! Wicket - Minimal HTTP/1.x Server
//!
//! Core library for connection handling and request processing.

pub mod config;
pub mod handler;
pub mod http;
pub mod server;
