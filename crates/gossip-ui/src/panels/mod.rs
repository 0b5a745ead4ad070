pub mod articles;
pub mod chat;
pub mod header;
pub mod search;
pub mod sources;
