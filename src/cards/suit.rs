use crate::error::InvalidCard;

/// Card suit: clubs, diamonds, hearts, spades.
///
/// Suits are strategically interchangeable, only the pattern of suit
/// matches on a board matters. The ordering (C < D < H < S) carries no
/// poker meaning; it fixes the sequence in which canonical labels are
/// handed out, so `C` is always the first label, `D` the second, etc.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    /// All four suits in canonical label order.
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
    pub const fn symbol(&self) -> char {
        match self {
            Suit::C => 'c',
            Suit::D => 'd',
            Suit::H => 'h',
            Suit::S => 's',
        }
    }
    /// Unicode suit symbol for display.
    pub const fn glyph(&self) -> char {
        match self {
            Suit::C => '♣',
            Suit::D => '♦',
            Suit::H => '♥',
            Suit::S => '♠',
        }
    }
}

/// u8 isomorphism
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}
impl TryFrom<u8> for Suit {
    type Error = InvalidCard;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0..=3 => Ok(Self::all()[n as usize]),
            _ => Err(InvalidCard::Index { kind: "suit", index: n }),
        }
    }
}

/// symbol isomorphism
impl TryFrom<char> for Suit {
    type Error = InvalidCard;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'c' | '♣' => Ok(Suit::C),
            'd' | '♦' => Ok(Suit::D),
            'h' | '♥' => Ok(Suit::H),
            's' | '♠' => Ok(Suit::S),
            _ => Err(InvalidCard::Suit(c)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for suit in Suit::all() {
            assert!(suit == Suit::try_from(u8::from(suit)).unwrap());
        }
    }

    #[test]
    fn bijective_symbol() {
        for suit in Suit::all() {
            assert!(suit == Suit::try_from(suit.symbol()).unwrap());
            assert!(suit == Suit::try_from(suit.glyph()).unwrap());
        }
    }

    #[test]
    fn invalid_symbol() {
        assert_eq!(Suit::try_from('x'), Err(InvalidCard::Suit('x')));
        assert_eq!(Suit::try_from('S'), Err(InvalidCard::Suit('S')));
        assert_eq!(Suit::try_from(4u8), Err(InvalidCard::Index { kind: "suit", index: 4 }));
    }
}
