use super::card::Card;
use super::flop::Flop;
use super::street::Street;
use crate::error::Error;
use crate::error::InvalidBoard;
use crate::error::InvalidFlop;

/// The community cards visible to all players: a flop, then turn and river.
///
/// Boards are values. Dealing returns a new board and leaves the old one
/// untouched, so a board held alongside a [`Permutation`] derived from its
/// flop stays consistent with it.
///
/// [`Permutation`]: super::permutation::Permutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    flop: Flop,
    turn: Option<Card>,
    river: Option<Card>,
}

impl Board {
    pub const fn flop(&self) -> Flop {
        self.flop
    }
    pub const fn turn(&self) -> Option<Card> {
        self.turn
    }
    pub const fn river(&self) -> Option<Card> {
        self.river
    }
    /// Infers the current street from board size.
    pub const fn street(&self) -> Street {
        match (self.turn, self.river) {
            (None, _) => Street::Flop,
            (Some(_), None) => Street::Turn,
            (Some(_), Some(_)) => Street::Rive,
        }
    }
    /// Flop cards in received order, then turn, then river.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.flop.iter().chain(self.turn).chain(self.river)
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.iter().any(|c| c == *card)
    }
    /// Reveal the next street's card.
    pub fn deal(&self, card: Card) -> Result<Self, InvalidBoard> {
        if self.contains(&card) {
            return Err(InvalidBoard::Duplicate(card));
        }
        match self.street() {
            Street::Flop => Ok(Self {
                turn: Some(card),
                ..*self
            }),
            Street::Turn => Ok(Self {
                river: Some(card),
                ..*self
            }),
            Street::Rive => Err(InvalidBoard::Full),
        }
    }
    /// Build from parts already known to be distinct,
    /// e.g. the image of a valid board under a suit bijection.
    pub(crate) fn assemble(flop: Flop, turn: Option<Card>, river: Option<Card>) -> Self {
        debug_assert!(turn.is_some() || river.is_none());
        Self { flop, turn, river }
    }
}

impl From<Flop> for Board {
    fn from(flop: Flop) -> Self {
        Self {
            flop,
            turn: None,
            river: None,
        }
    }
}

/// three to five whitespace-separated tokens, e.g. "Ah Kd Ts 2c"
impl TryFrom<&str> for Board {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = s
            .split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, _>>()?;
        if cards.len() < 3 {
            return Err(InvalidFlop::Count(cards.len()).into());
        }
        if cards.len() > 5 {
            return Err(InvalidBoard::Full.into());
        }
        let flop = Flop::try_from(&cards[..3])?;
        cards[3..]
            .iter()
            .try_fold(Self::from(flop), |board, card| board.deal(*card))
            .map_err(Error::from)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.iter()
                .map(|c| c.to_string())
                .collect::<Vec<String>>()
                .join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    #[test]
    fn deal_streets() {
        let flop = Board::try_from("Ah Kd Ts").unwrap();
        assert_eq!(flop.street(), Street::Flop);
        let turn = flop.deal(card("2c")).unwrap();
        assert_eq!(turn.street(), Street::Turn);
        assert_eq!(turn.turn(), Some(card("2c")));
        let river = turn.deal(card("9h")).unwrap();
        assert_eq!(river.street(), Street::Rive);
        assert_eq!(river.to_string(), "Ah Kd Ts 2c 9h");
        assert_eq!(flop.street(), Street::Flop);
    }

    #[test]
    fn deal_duplicate() {
        let board = Board::try_from("Ah Kd Ts").unwrap();
        assert_eq!(board.deal(card("Kd")), Err(InvalidBoard::Duplicate(card("Kd"))));
    }

    #[test]
    fn deal_full() {
        let board = Board::try_from("Ah Kd Ts 2c 9h").unwrap();
        assert_eq!(board.deal(card("3c")), Err(InvalidBoard::Full));
    }

    #[test]
    fn parse_counts() {
        assert_eq!(
            Board::try_from("Ah Kd"),
            Err(Error::Flop(InvalidFlop::Count(2)))
        );
        assert_eq!(
            Board::try_from("Ah Kd Ts 2c 9h 3c"),
            Err(Error::Board(InvalidBoard::Full))
        );
        assert_eq!(
            Board::try_from("Ah Kd Ts Ts"),
            Err(Error::Board(InvalidBoard::Duplicate(card("Ts"))))
        );
    }
}
