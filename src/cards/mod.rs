pub mod board;
pub use board::*;

pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod flop;
pub use flop::*;

pub mod hole;
pub use hole::*;

pub mod isomorphism;
pub use isomorphism::*;

pub mod permutation;
pub use permutation::*;

pub mod rank;
pub use rank::*;

pub mod street;
pub use street::*;

pub mod suit;
pub use suit::*;

pub mod texture;
pub use texture::*;
