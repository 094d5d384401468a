use super::board::Board;
use super::card::Card;
use super::flop::Flop;
use super::hole::Hole;
use super::suit::Suit;
use crate::Arbitrary;

/// an array of 4 unique Suits represents
/// any of the 4! = 24 elements in the Suit permutation group.
/// by assuming a "canonical" order of suits (C < D < H < S),
/// we use [Suit; 4] to map C -> P[0], D -> P[1], H -> P[2], S -> P[3].
///
/// A Permutation is always a total bijection. It is a plain value:
/// nothing that reads through it, turn and river cards included, can
/// change where any suit goes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Permutation([Suit; 4]);

/// labels suits by first appearance on the flop.
///
/// scanning cards in received order, the first suit seen becomes C,
/// the next new suit D, a third new suit H. suits absent from the flop
/// are free: in ascending suit order they take the unused labels in
/// ascending label order, so the mapping is total before any turn or
/// river card is seen.
impl From<&Flop> for Permutation {
    fn from(flop: &Flop) -> Self {
        let mut image = [None; 4];
        let mut label = 0u8;
        let flop = flop.iter().map(|card| card.suit());
        let free = Suit::all().into_iter();
        for suit in flop.chain(free) {
            if image[suit as usize].is_none() {
                image[suit as usize] = Some(Suit::all()[label as usize]);
                label += 1;
            }
        }
        Self(image.map(|suit| suit.expect("every suit labeled")))
    }
}

impl Permutation {
    /// get the image of a Suit under a Permutation
    pub const fn map(&self, suit: Suit) -> Suit {
        self.0[suit as usize]
    }
    /// same rank, suit sent through the mapping
    pub const fn apply(&self, card: &Card) -> Card {
        card.with_suit(self.map(card.suit()))
    }
    /// the mapping that undoes this one
    pub fn invert(&self) -> Self {
        let mut inverse = Suit::all();
        Suit::all()
            .into_iter()
            .for_each(|suit| inverse[self.map(suit) as usize] = suit);
        Self(inverse)
    }
    /// carry a flop's mapping onto a turn or river card.
    /// a suit the flop never showed still goes where the free-suit
    /// labeling sent it, and the mapping itself is left as it was.
    pub const fn extend(&self, card: &Card) -> Card {
        self.apply(card)
    }
    /// the image of a Flop, card by card, order kept
    pub fn flop(&self, flop: &Flop) -> Flop {
        Flop::assemble(flop.cards().map(|card| self.apply(&card)))
    }
    pub fn hole(&self, hole: &Hole) -> Hole {
        let [a, b] = hole.cards();
        Hole::assemble(self.apply(&a), self.apply(&b))
    }
    /// the image of a Board: the flop as a whole, later streets by extension
    pub fn board(&self, board: &Board) -> Board {
        Board::assemble(
            self.flop(&board.flop()),
            board.turn().map(|card| self.extend(&card)),
            board.river().map(|card| self.extend(&card)),
        )
    }
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    pub const fn identity() -> Self {
        Self(Suit::all())
    }
    pub const fn exhaust() -> [Self; 24] {
        [
            Self([Suit::C, Suit::D, Suit::H, Suit::S]),
            Self([Suit::C, Suit::D, Suit::S, Suit::H]),
            Self([Suit::C, Suit::H, Suit::D, Suit::S]),
            Self([Suit::C, Suit::H, Suit::S, Suit::D]),
            Self([Suit::C, Suit::S, Suit::D, Suit::H]),
            Self([Suit::C, Suit::S, Suit::H, Suit::D]),
            Self([Suit::D, Suit::C, Suit::H, Suit::S]),
            Self([Suit::D, Suit::C, Suit::S, Suit::H]),
            Self([Suit::D, Suit::H, Suit::C, Suit::S]),
            Self([Suit::D, Suit::H, Suit::S, Suit::C]),
            Self([Suit::D, Suit::S, Suit::C, Suit::H]),
            Self([Suit::D, Suit::S, Suit::H, Suit::C]),
            Self([Suit::H, Suit::C, Suit::D, Suit::S]),
            Self([Suit::H, Suit::C, Suit::S, Suit::D]),
            Self([Suit::H, Suit::D, Suit::C, Suit::S]),
            Self([Suit::H, Suit::D, Suit::S, Suit::C]),
            Self([Suit::H, Suit::S, Suit::C, Suit::D]),
            Self([Suit::H, Suit::S, Suit::D, Suit::C]),
            Self([Suit::S, Suit::C, Suit::D, Suit::H]),
            Self([Suit::S, Suit::C, Suit::H, Suit::D]),
            Self([Suit::S, Suit::D, Suit::C, Suit::H]),
            Self([Suit::S, Suit::D, Suit::H, Suit::C]),
            Self([Suit::S, Suit::H, Suit::C, Suit::D]),
            Self([Suit::S, Suit::H, Suit::D, Suit::C]),
        ]
    }
}

/// u8 isomorphism
/// two bits per image, C's image in the lowest pair
/// [D, H, S, C]
/// 00 11 10 01
impl From<Permutation> for u8 {
    fn from(p: Permutation) -> u8 {
        p.0.iter()
            .rev()
            .fold(0u8, |acc, suit| acc << 2 | u8::from(*suit))
    }
}
/// fails with the offending byte if it does not encode a bijection
impl TryFrom<u8> for Permutation {
    type Error = u8;
    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        let image = [0, 2, 4, 6].map(|shift| Suit::all()[(bits >> shift & 0b11) as usize]);
        let seen = image.iter().fold(0u8, |acc, suit| acc | 1 << *suit as u8);
        match seen {
            0b1111 => Ok(Self(image)),
            _ => Err(bits),
        }
    }
}

impl Arbitrary for Permutation {
    fn random() -> Self {
        use rand::prelude::IndexedRandom;
        let ref mut rng = rand::rng();
        *Self::exhaust().choose(rng).expect("24 permutations")
    }
}

impl std::fmt::Display for Permutation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let arrows = Suit::all()
            .iter()
            .map(|s| format!("{}->{}", s, self.map(*s)))
            .collect::<Vec<String>>();
        write!(f, "{}", arrows.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    #[test]
    fn map_identity() {
        let identity = Permutation::identity();
        assert!(identity.map(Suit::C) == Suit::C);
        assert!(identity.map(Suit::D) == Suit::D);
        assert!(identity.map(Suit::H) == Suit::H);
        assert!(identity.map(Suit::S) == Suit::S);
    }

    #[test]
    fn map_arbitrary() {
        let permutation = Permutation([Suit::H, Suit::S, Suit::C, Suit::D]);
        assert!(permutation.map(Suit::C) == Suit::H);
        assert!(permutation.map(Suit::D) == Suit::S);
        assert!(permutation.map(Suit::H) == Suit::C);
        assert!(permutation.map(Suit::S) == Suit::D);
    }

    #[test]
    fn apply_keeps_rank() {
        let permutation = Permutation([Suit::S, Suit::C, Suit::D, Suit::H]);
        assert_eq!(permutation.apply(&card("Ac")), card("As"));
        assert_eq!(permutation.apply(&card("Kd")), card("Kc"));
        assert_eq!(permutation.apply(&card("Qh")).numeric_rank(), 12);
    }

    #[test]
    fn invert_arbitrary() {
        let permutation = Permutation([Suit::D, Suit::H, Suit::S, Suit::C]);
        let inverse = Permutation([Suit::S, Suit::C, Suit::D, Suit::H]);
        assert_eq!(permutation.invert(), inverse);
    }

    #[test]
    fn invert_undoes() {
        for permutation in Permutation::exhaust() {
            let inverse = permutation.invert();
            assert_eq!(inverse.invert(), permutation);
            for card in Card::deck() {
                assert_eq!(inverse.apply(&permutation.apply(card)), *card);
            }
        }
    }

    #[test]
    fn exhaust_unique() {
        let ref hand = Flop::try_from("Ac Kd Qh").unwrap();
        let mut unique = std::collections::HashSet::new();
        let n = Permutation::exhaust()
            .into_iter()
            .inspect(|p| assert!(unique.insert(*p)))
            .map(|p| p.flop(hand))
            .count();
        assert!(n == 24);
        assert!(Permutation::exhaust()[0].is_identity());
    }

    #[test]
    fn first_appearance_rainbow() {
        let flop = Flop::try_from("Ah Kd Qs").unwrap();
        let permutation = Permutation::from(&flop);
        assert_eq!(permutation, Permutation([Suit::S, Suit::D, Suit::C, Suit::H]));
    }

    #[test]
    fn first_appearance_monotone() {
        let flop = Flop::try_from("Ah Kh Qh").unwrap();
        let permutation = Permutation::from(&flop);
        assert_eq!(permutation, Permutation([Suit::D, Suit::H, Suit::C, Suit::S]));
    }

    #[test]
    fn extend_free_suit() {
        let flop = Flop::try_from("Ah Kh Qs").unwrap();
        let permutation = Permutation::from(&flop);
        let turn = card("2c");
        let first = permutation.extend(&turn);
        let again = permutation.extend(&turn);
        assert_eq!(first, card("2h"));
        assert_eq!(first, again);
        assert_eq!(permutation, Permutation::from(&flop));
    }

    #[test]
    fn image_board() {
        let board = Board::try_from("Ah Kh Qs 2c 3d").unwrap();
        let permutation = Permutation::from(&board.flop());
        let image = permutation.board(&board);
        assert_eq!(image.to_string(), "Ac Kc Qd 2h 3s");
        assert_eq!(permutation.invert().board(&image), board);
    }

    #[test]
    fn image_hole() {
        let permutation = Permutation([Suit::D, Suit::H, Suit::S, Suit::C]);
        let hole = Hole::try_from("Ah 7c").unwrap();
        assert_eq!(permutation.hole(&hole), Hole::try_from("As 7d").unwrap());
    }

    #[test]
    fn bijective_u8() {
        for permutation in Permutation::exhaust() {
            assert_eq!(Ok(permutation), Permutation::try_from(u8::from(permutation)));
        }
        assert_eq!(u8::from(Permutation([Suit::D, Suit::H, Suit::S, Suit::C])), 0b00_11_10_01);
    }

    #[test]
    fn rejects_non_bijection() {
        let valid = (0..=u8::MAX)
            .filter(|bits| Permutation::try_from(*bits).is_ok())
            .count();
        assert_eq!(valid, crate::N_PERMUTATIONS);
        assert_eq!(Permutation::try_from(0u8), Err(0));
    }

    #[test]
    fn display() {
        let permutation = Permutation([Suit::D, Suit::H, Suit::S, Suit::C]);
        assert_eq!(permutation.to_string(), "c->d d->h h->s s->c");
    }
}
