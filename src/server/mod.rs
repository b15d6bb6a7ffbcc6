//! TCP plumbing: binding, accepting and handing streams to connections.

pub mod listener;
