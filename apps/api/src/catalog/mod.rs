// Immutable reference tables. Built once at startup, shared via AppState,
// never written by request traffic.

pub mod resources;
pub mod roles;
