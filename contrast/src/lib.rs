pub use board::*;
pub use engine::*;
pub use errors::*;
pub use movement::*;
pub use protocol_types::*;
pub use tiles::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod engine;
mod errors;
mod movement;
mod protocol_types;
mod tiles;
