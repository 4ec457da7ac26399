//! Board document parsing.

mod board;

pub use board::{load_board, BoardDocument, Pad, PadAttribute, Via, ViaType};
