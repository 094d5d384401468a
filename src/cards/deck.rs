use super::board::Board;
use super::card::Card;
use super::flop::Flop;
use super::hole::Hole;
use rand::Rng;

/// The cards not yet dealt. Random selection via ::draw().
#[derive(Debug, Clone)]
pub struct Deck(Vec<Card>);

impl Deck {
    pub fn new() -> Self {
        Self(Card::deck().to_vec())
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }

    /// remove a specific card from the deck
    pub fn remove(&mut self, card: Card) {
        self.0.retain(|c| *c != card);
    }

    /// remove a random card from the deck
    pub fn draw(&mut self) -> Option<Card> {
        match self.0.len() {
            0 => None,
            n => Some(self.0.swap_remove(rand::rng().random_range(0..n))),
        }
    }

    /// deal three random cards as a Flop.
    /// panics with fewer than three cards left
    pub fn flop(&mut self) -> Flop {
        let cards = [self.deal(), self.deal(), self.deal()];
        Flop::assemble(cards)
    }

    /// deal two random cards as a Hole
    pub fn hole(&mut self) -> Hole {
        Hole::assemble(self.deal(), self.deal())
    }

    fn deal(&mut self) -> Card {
        self.draw().expect("deck has cards left to deal")
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// what remains after the board is dealt
impl From<&Board> for Deck {
    fn from(board: &Board) -> Self {
        let mut deck = Self::new();
        board.iter().for_each(|card| deck.remove(card));
        deck
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        self.draw()
    }
}
