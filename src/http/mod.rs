//! HTTP protocol implementation.
//!
//! This module implements an HTTP/1.x server core serving one request per
//! connection.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The connection worker implementing the request-response state machine
//! - **`parser`**: Parses the request head from the buffered byte stream
//! - **`headers`**: Insertion-ordered header map shared by requests and responses
//! - **`request`**: HTTP request representation, methods, and versions
//! - **`response`**: HTTP response representation with status and body variants
//! - **`writer`**: Serializes responses and streams file bodies to the client
//!
//! # Connection State Machine
//!
//! Each accepted connection goes through a linear state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Buffer bytes until the request head is complete
//!        └──────┬──────┘
//!               │ Request parsed (parse failure → Writing with a 500)
//!               ▼
//!        ┌──────────────────┐
//!        │    Running       │ ← Handler chain, early exit on `false`
//!        └──────┬───────────┘
//!               │ Response final (handler failure → 500)
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response, best-effort
//!        └──────┬───────────┘
//!               │ Always
//!               ▼
//!            Closed
//! ```
//!
//! There is no keep-alive: after writing, the connection always closes.

pub mod connection;
pub mod headers;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
