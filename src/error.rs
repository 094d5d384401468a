use crate::cards::card::Card;

/// A rank or suit symbol outside the legal 13 / 4,
/// or a token that is not a single rank-suit pair.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidCard {
    #[error("invalid rank symbol: {0:?}")]
    Rank(char),
    #[error("invalid suit symbol: {0:?}")]
    Suit(char),
    #[error("invalid card token: {0:?} (expected 2 symbols)")]
    Token(String),
    #[error("{kind} index out of range: {index}")]
    Index { kind: &'static str, index: u8 },
}

/// A flop must hold exactly three pairwise-distinct cards.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidFlop {
    #[error("flop needs exactly 3 cards, got {0}")]
    Count(usize),
    #[error("duplicate card on flop: {0}")]
    Duplicate(Card),
    #[error("packed flop key uses its high byte: {0:#010x}")]
    Packed(u32),
}

/// Turn and river must be new cards, and there are only two of them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidBoard {
    #[error("card already on board: {0}")]
    Duplicate(Card),
    #[error("board already holds 5 cards")]
    Full,
}

/// Hole cards are exactly two distinct cards.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidHole {
    #[error("hole needs exactly 2 cards, got {0}")]
    Count(usize),
    #[error("duplicate hole card: {0}")]
    Duplicate(Card),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Card(#[from] InvalidCard),
    #[error(transparent)]
    Flop(#[from] InvalidFlop),
    #[error(transparent)]
    Board(#[from] InvalidBoard),
    #[error(transparent)]
    Hole(#[from] InvalidHole),
}
