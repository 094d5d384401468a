use super::flop::Flop;

/// The suit pattern of a flop: how many distinct suits its three cards show.
///
/// These are the only three structural classes a flop can exhibit, and
/// canonicalization never moves a flop from one class to another.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Texture {
    /// one suit
    Monotone,
    /// two suits, one of them paired
    TwoTone,
    /// three suits
    Rainbow,
}

impl Texture {
    pub const fn all() -> [Texture; 3] {
        [Texture::Monotone, Texture::TwoTone, Texture::Rainbow]
    }
    /// distinct suits on the flop
    pub const fn n_suits(&self) -> usize {
        match self {
            Texture::Monotone => 1,
            Texture::TwoTone => 2,
            Texture::Rainbow => 3,
        }
    }
    /// distinct flops of this texture as unordered sets
    pub const fn n_flops(&self) -> usize {
        match self {
            Texture::Monotone => 1_144, // 4 * C(13, 3)
            Texture::TwoTone => 12_168, // 4 * C(13, 2) * 39
            Texture::Rainbow => 8_788,  // 4 * 13^3
        }
    }
}

impl From<&Flop> for Texture {
    fn from(flop: &Flop) -> Self {
        let [a, b, c] = flop.cards().map(|card| card.suit());
        match (a == b, b == c, a == c) {
            (true, true, _) => Texture::Monotone,
            (false, false, false) => Texture::Rainbow,
            _ => Texture::TwoTone,
        }
    }
}

impl std::fmt::Display for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Texture::Monotone => write!(f, "monotone"),
            Texture::TwoTone => write!(f, "two-tone"),
            Texture::Rainbow => write!(f, "rainbow"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify() {
        let texture = |s: &str| Texture::from(&Flop::try_from(s).unwrap());
        assert_eq!(texture("Ah Kh Qh"), Texture::Monotone);
        assert_eq!(texture("Ah Kh Qs"), Texture::TwoTone);
        assert_eq!(texture("Ah Ks Qh"), Texture::TwoTone);
        assert_eq!(texture("As Kh Qh"), Texture::TwoTone);
        assert_eq!(texture("Ah Kd Qs"), Texture::Rainbow);
    }

    #[test]
    fn counts_partition_all_flops() {
        for texture in Texture::all() {
            let n = Flop::exhaust()
                .filter(|flop| Texture::from(flop) == texture)
                .count();
            assert_eq!(n, texture.n_flops());
        }
        let total = Texture::all().iter().map(Texture::n_flops).sum::<usize>();
        assert_eq!(total, crate::N_FLOPS);
    }
}
