//! Presentation layer for Gossip search.
//!
//! Panels are free functions over borrowed view data; they return what the
//! user did and leave acting on it to the app.

pub mod panels;
pub mod state;
pub mod theme;
