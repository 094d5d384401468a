use super::flop::Flop;
use super::permutation::Permutation;
use super::texture::Texture;
use std::collections::BTreeSet;

/// many Flops are strategically equivalent,
/// so we canonize to reduce the index space of
/// anything keyed by flop.
///
/// An Isomorphism pairs the canonical Flop with the Permutation that
/// carries the concrete flop onto it. Results computed against the
/// canonical flop go back to concrete suits through the inverse.
///
/// # Conventions
///
/// [`Isomorphism::canonicalize`] labels suits by first appearance in the
/// order the cards were received, and keeps that order. Two orderings of
/// the same two-tone or rainbow cards may therefore land on different
/// canonical flops: `Ah Kh Qs` becomes `Ac Kc Qd` but `Qs Ah Kh` becomes
/// `Qc Ad Kd`. Relabeling suits never changes the result.
///
/// [`Isomorphism::sorted`] also forgets card order, leaving one canonical
/// flop for each of the 1,755 strategically distinct flops.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Isomorphism {
    canonical: Flop,
    permutation: Permutation,
}

impl Isomorphism {
    /// canonical flop and mapping, scanning cards in received order.
    pub fn canonicalize(flop: &Flop) -> Self {
        let permutation = Permutation::from(flop);
        Self {
            canonical: permutation.flop(flop),
            permutation,
        }
    }
    /// canonical flop and mapping up to both suit relabeling and card order.
    ///
    /// every arrangement of the cards by ascending rank is a candidate
    /// scan order. each is canonicalized, and the candidate whose suit
    /// sequence is smallest wins. ties keep the earlier arrangement,
    /// so an already-canonical flop maps to itself by the identity.
    pub fn sorted(flop: &Flop) -> Self {
        const ORDERS: [[usize; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        let cards = flop.cards();
        ORDERS
            .into_iter()
            .filter(|order| order.is_sorted_by_key(|i| cards[*i].numeric_rank()))
            .map(|order| Self::canonicalize(&flop.reorder(order)))
            .min_by_key(|isomorphism| isomorphism.canonical)
            .expect("some arrangement is ascending")
    }
    pub fn is_canonical(flop: &Flop) -> bool {
        Permutation::from(flop).is_identity()
    }
    /// the 1,755 canonical flops under suit relabeling and card order
    pub fn enumerate() -> Vec<Flop> {
        Flop::exhaust()
            .map(|flop| Self::sorted(&flop).canonical)
            .collect::<BTreeSet<Flop>>()
            .into_iter()
            .collect()
    }

    pub fn canonical(&self) -> Flop {
        self.canonical
    }
    /// concrete suits to canonical suits
    pub fn permutation(&self) -> Permutation {
        self.permutation
    }
    /// canonical suits back to concrete suits
    pub fn inverse(&self) -> Permutation {
        self.permutation.invert()
    }
    /// the concrete flop this was derived from
    pub fn restore(&self) -> Flop {
        self.inverse().flop(&self.canonical)
    }
    pub fn texture(&self) -> Texture {
        self.canonical.texture()
    }
}

impl From<&Flop> for Isomorphism {
    fn from(flop: &Flop) -> Self {
        Self::canonicalize(flop)
    }
}
impl From<Isomorphism> for (Flop, Permutation) {
    fn from(isomorphism: Isomorphism) -> Self {
        (isomorphism.canonical, isomorphism.permutation)
    }
}

impl std::fmt::Display for Isomorphism {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.canonical, self.permutation)
    }
}
