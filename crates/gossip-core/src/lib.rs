//! Gossip core: everything the front end decides, nothing it talks to.
//!
//! The session controller owns conversation state and calls out through
//! the port traits in [`ports`]; browser implementations live in
//! `gossip-platform`.

pub mod aggregate;
pub mod controller;
pub mod event_bus;
pub mod ports;
