/// The post-flop streets, named by how many community cards are showing.
///
/// A [`Board`] always holds a flop, so preflop never appears here.
///
/// [`Board`]: super::board::Board
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Street {
    #[default]
    Flop = 3isize,
    Turn = 4isize,
    Rive = 5isize,
}

impl Street {
    pub const fn all() -> [Self; 3] {
        [Self::Flop, Self::Turn, Self::Rive]
    }
    /// The following street, if any.
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Flop => Some(Self::Turn),
            Self::Turn => Some(Self::Rive),
            Self::Rive => None,
        }
    }
    /// community cards showing
    pub const fn n_observed(&self) -> usize {
        *self as usize
    }
}

impl TryFrom<usize> for Street {
    type Error = usize;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            3 => Ok(Self::Flop),
            4 => Ok(Self::Turn),
            5 => Ok(Self::Rive),
            _ => Err(n),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}
