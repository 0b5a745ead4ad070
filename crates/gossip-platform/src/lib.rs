//! Browser adapters for the Gossip front end.
//!
//! Both endpoints are reached through `fetch()` via gloo-net. The response
//! decoders are plain functions so they can be tested without a network.

pub mod catalog;
pub mod http;
pub mod query;

pub use catalog::HttpCatalogClient;
pub use query::HttpQueryProxy;
