//! Server bootstrap: the accept loop handing connections to workers.

pub mod listener;
