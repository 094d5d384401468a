use crate::error::InvalidCard;

/// Card rank, two through ace.
///
/// The discriminant is the numeric rank (2..=14), so the value used
/// for comparisons is fixed by the variant itself and never recomputed.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    #[default]
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// All thirteen ranks, ascending.
    pub const fn all() -> [Rank; 13] {
        [
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ]
    }
    /// 2 through 14, T=10 ... A=14.
    pub const fn numeric(&self) -> u8 {
        *self as u8
    }
    /// Position among the 13 ranks, 0 through 12.
    pub const fn index(&self) -> u8 {
        *self as u8 - 2
    }
    pub const fn symbol(&self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

/// numeric isomorphism, 2..=14
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r.numeric()
    }
}
impl TryFrom<u8> for Rank {
    type Error = InvalidCard;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            2..=14 => Ok(Self::all()[n as usize - 2]),
            _ => Err(InvalidCard::Index { kind: "rank", index: n }),
        }
    }
}

/// symbol isomorphism
impl TryFrom<char> for Rank {
    type Error = InvalidCard;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(InvalidCard::Rank(c)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
