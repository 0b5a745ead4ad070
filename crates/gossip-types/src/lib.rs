pub mod article;
pub mod message;
pub mod event;
pub mod config;
pub mod error;
pub mod session;


pub use error::GossipError;
pub type Result<T> = std::result::Result<T, GossipError>;
