//! Trait definitions shared by the isocrypt scheme crates

pub mod key_exchange;
pub mod serialize;

pub use key_exchange::KeyExchange;
pub use serialize::{Serialize, SerializeSecret};
