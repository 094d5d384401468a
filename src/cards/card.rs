use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;
use crate::error::InvalidCard;

/// An immutable playing card.
///
/// Besides its `(Rank, Suit)` pair, a card stores its numeric rank, filled in
/// once at construction. Cards are read far more often than they are built,
/// so every accessor is a plain field read.
///
/// # Ordering
///
/// Cards order by numeric rank. Two cards of equal rank fall back on the
/// arbitrary suit order so that `Ord` stays consistent with `Eq`.
///
/// # Representations
///
/// - `u8`: index `0..52` as `rank_index * 4 + suit`, sorted by rank then suit
/// - `u64`: a single set bit at the `u8` index
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "(Rank, Suit)", into = "(Rank, Suit)"))]
pub struct Card {
    rank: Rank,
    suit: Suit,
    numeric_rank: u8,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            numeric_rank: rank.numeric(),
        }
    }
    pub const fn rank(&self) -> Rank {
        self.rank
    }
    pub const fn suit(&self) -> Suit {
        self.suit
    }
    /// 2 through 14.
    pub const fn numeric_rank(&self) -> u8 {
        self.numeric_rank
    }
    /// Same rank, new suit.
    pub const fn with_suit(&self, suit: Suit) -> Self {
        Self { suit, ..*self }
    }
    /// The 52 cards, ordered by rank then suit. Built at compile time.
    pub fn deck() -> &'static [Card; 52] {
        &DECK
    }
}

static DECK: [Card; 52] = {
    let ranks = Rank::all();
    let suits = Suit::all();
    let mut deck = [Card::new(Rank::Two, Suit::C); 52];
    let mut i = 0;
    while i < 52 {
        deck[i] = Card::new(ranks[i / 4], suits[i % 4]);
        i += 1;
    }
    deck
};

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self::new(rank, suit)
    }
}
impl From<Card> for (Rank, Suit) {
    fn from(card: Card) -> Self {
        (card.rank, card.suit)
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0..52
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.rank.index() * 4 + u8::from(c.suit)
    }
}
impl TryFrom<u8> for Card {
    type Error = InvalidCard;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        DECK.get(n as usize)
            .copied()
            .ok_or(InvalidCard::Index { kind: "card", index: n })
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// symbol pair, e.g. ('A', 'h')
impl TryFrom<(char, char)> for Card {
    type Error = InvalidCard;
    fn try_from((rank, suit): (char, char)) -> Result<Self, Self::Error> {
        Ok(Self::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
    }
}

/// two-symbol token, e.g. "Ah"
impl TryFrom<&str> for Card {
    type Error = InvalidCard;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut symbols = s.trim().chars();
        match (symbols.next(), symbols.next(), symbols.next()) {
            (Some(rank), Some(suit), None) => Self::try_from((rank, suit)),
            _ => Err(InvalidCard::Token(s.to_string())),
        }
    }
}

impl std::str::FromStr for Card {
    type Err = InvalidCard;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        use rand::prelude::IndexedRandom;
        let ref mut rng = rand::rng();
        *DECK.choose(rng).expect("deck is never empty")
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
