pub mod bitboard;
pub mod disc;
pub mod placement;
pub mod player;
pub mod position;

pub use bitboard::*;
pub use disc::*;
pub use placement::*;
pub use player::*;
pub use position::*;
