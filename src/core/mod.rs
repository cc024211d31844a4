pub mod board;
pub mod r#move;
pub mod piece;
pub mod serialization;
pub mod setup;
pub mod types;

pub use board::Board;
pub use piece::{Piece, Rank};
pub use r#move::Move;
pub use setup::{setup_from_strings, standard_setup};
pub use types::{PlayerId, Position};
