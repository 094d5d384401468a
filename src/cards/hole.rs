use super::card::Card;
use crate::error::Error;
use crate::error::InvalidHole;

/// A player's two private hole cards.
///
/// Hole cards live in the same suit space as the board, so moving a board
/// into canonical form moves the holding along with it through
/// [`Permutation::hole`].
///
/// [`Permutation::hole`]: super::permutation::Permutation::hole
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hole([Card; 2]);

impl Hole {
    pub const fn cards(&self) -> [Card; 2] {
        self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.0.iter().copied()
    }
    pub(crate) fn assemble(a: Card, b: Card) -> Self {
        debug_assert!(a != b);
        Self([a, b])
    }
}

impl TryFrom<(Card, Card)> for Hole {
    type Error = InvalidHole;
    fn try_from((a, b): (Card, Card)) -> Result<Self, Self::Error> {
        match a == b {
            true => Err(InvalidHole::Duplicate(a)),
            false => Ok(Self([a, b])),
        }
    }
}

/// whitespace-separated tokens, e.g. "Ah Kd"
impl TryFrom<&str> for Hole {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = s
            .split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, _>>()?;
        match cards.as_slice() {
            [a, b] => Ok(Self::try_from((*a, *b))?),
            _ => Err(InvalidHole::Count(cards.len()).into()),
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.0[0], self.0[1])
    }
}
