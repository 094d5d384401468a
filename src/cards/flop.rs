use super::card::Card;
use super::deck::Deck;
use super::permutation::Permutation;
use super::texture::Texture;
use crate::Arbitrary;
use crate::error::Error;
use crate::error::InvalidFlop;

/// The first three community cards.
///
/// Always exactly three pairwise-distinct cards. Cards sharing a rank in
/// different suits are fine; the same rank and suit twice is not. The order
/// in which the cards were received is preserved, both for display and
/// because [`Isomorphism::canonicalize`] scans cards in that order.
///
/// [`Isomorphism::canonicalize`]: super::isomorphism::Isomorphism::canonicalize
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[Card; 3]", into = "[Card; 3]"))]
pub struct Flop([Card; 3]);

impl Flop {
    pub const fn cards(&self) -> [Card; 3] {
        self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.0.iter().copied()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    pub fn texture(&self) -> Texture {
        Texture::from(self)
    }
    /// Same cards, ascending by rank. Paired ranks keep their received order.
    pub fn sorted(&self) -> Self {
        let mut cards = self.0;
        cards.sort_by_key(Card::numeric_rank);
        Self(cards)
    }
    /// Same cards, rearranged by position indices.
    pub(crate) fn reorder(&self, order: [usize; 3]) -> Self {
        Self(order.map(|i| self.0[i]))
    }
    /// Build from cards already known to be distinct,
    /// e.g. the image of a valid flop under a suit bijection.
    pub(crate) fn assemble(cards: [Card; 3]) -> Self {
        debug_assert!(Self::duplicate(&cards).is_none());
        Self(cards)
    }
    /// Every flop as an unordered set, in deck order: 22,100 of them.
    pub fn exhaust() -> impl Iterator<Item = Self> {
        let deck = Card::deck();
        (0..52).flat_map(move |i| {
            (i + 1..52).flat_map(move |j| {
                (j + 1..52).map(move |k| Self([deck[i], deck[j], deck[k]]))
            })
        })
    }
    /// Every distinct relabeling of this flop's suits, in permutation order.
    /// 4 for monotone, 12 for two-tone, 24 for rainbow.
    pub fn isomorphs(&self) -> Vec<Self> {
        let mut isomorphs = Vec::with_capacity(crate::N_PERMUTATIONS);
        for image in Permutation::exhaust().iter().map(|p| p.flop(self)) {
            if !isomorphs.contains(&image) {
                isomorphs.push(image);
            }
        }
        isomorphs
    }
    fn duplicate(cards: &[Card]) -> Option<Card> {
        cards
            .iter()
            .enumerate()
            .find(|&(i, card)| cards[..i].contains(card))
            .map(|(_, card)| *card)
    }
}

/// fallible from exactly three cards
impl TryFrom<[Card; 3]> for Flop {
    type Error = InvalidFlop;
    fn try_from(cards: [Card; 3]) -> Result<Self, Self::Error> {
        match Self::duplicate(&cards) {
            Some(card) => Err(InvalidFlop::Duplicate(card)),
            None => Ok(Self(cards)),
        }
    }
}
impl TryFrom<&[Card]> for Flop {
    type Error = InvalidFlop;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        <[Card; 3]>::try_from(cards)
            .map_err(|_| InvalidFlop::Count(cards.len()))
            .and_then(|cards| Self::try_from(cards))
    }
}
impl TryFrom<Vec<Card>> for Flop {
    type Error = InvalidFlop;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::try_from(cards.as_slice())
    }
}
impl From<Flop> for [Card; 3] {
    fn from(flop: Flop) -> Self {
        flop.0
    }
}

/// whitespace-separated tokens, e.g. "Ah Kd Ts"
impl TryFrom<&str> for Flop {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = s
            .split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, _>>()?;
        Ok(Self::try_from(cards)?)
    }
}

/// u32 packing
/// one card index per byte, first card in the highest used byte
/// [Ah, Kd, Ts]
/// 00000000 00110010 00101101 00100011
impl From<Flop> for u32 {
    fn from(flop: Flop) -> u32 {
        flop.iter()
            .map(u8::from)
            .fold(0u32, |acc, card| acc << 8 | card as u32)
    }
}
impl TryFrom<u32> for Flop {
    type Error = Error;
    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        if bits >> 24 != 0 {
            return Err(InvalidFlop::Packed(bits).into());
        }
        let cards = [bits >> 16, bits >> 8, bits]
            .map(|byte| Card::try_from(byte as u8))
            .into_iter()
            .collect::<Result<Vec<Card>, _>>()?;
        Ok(Self::try_from(cards)?)
    }
}

impl Arbitrary for Flop {
    fn random() -> Self {
        Deck::new().flop()
    }
}

impl std::fmt::Display for Flop {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{} {} {}", a, b, c)
    }
}
