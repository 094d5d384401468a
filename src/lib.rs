//! Playing cards and suit-isomorphic canonical forms of Texas Hold'em flops.
//!
//! Suits carry no strategic meaning, so two flops that differ only by a
//! consistent relabeling of suits are the same flop. This crate maps any
//! concrete [`Flop`] to a canonical representative together with the suit
//! [`Permutation`] that produced it, so that results computed in canonical
//! space can be carried back to the concrete suits, and so that turn and
//! river cards can be moved into the same canonical space.
//!
//! ## Core Types
//!
//! - [`Card`]: an immutable `(Rank, Suit)` pair with its numeric rank precomputed
//! - [`Flop`]: exactly three pairwise-distinct cards, in the order received
//! - [`Board`]: a flop plus turn and river
//! - [`Permutation`]: one of the 24 bijections over the four suits
//! - [`Isomorphism`]: a canonical flop and the permutation into it
//! - [`Cache`]: memoized canonicalizations for batch workloads
//!
//! ## Operations
//!
//! - [`Isomorphism::canonicalize`]: canonical flop and mapping
//! - [`Permutation::apply`]: translate a card
//! - [`Permutation::invert`]: inverse mapping
//! - [`Permutation::extend`]: translate a turn or river card
pub mod cache;
pub mod cards;
pub mod error;

pub use cache::*;
pub use cards::*;
pub use error::*;

// ============================================================================
// COUNTING
// ============================================================================
/// Cards in a standard deck.
pub const N_CARDS: usize = 52;
/// Distinct flops as unordered sets, C(52, 3).
pub const N_FLOPS: usize = 22_100;
/// Distinct flops in received order, 52 * 51 * 50.
pub const N_ORDERED_FLOPS: usize = 132_600;
/// Flops that survive both suit and position isomorphism.
pub const N_CANONICAL_FLOPS: usize = 1_755;
/// Elements of the symmetric group on four suits.
pub const N_PERMUTATIONS: usize = 24;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at INFO.
/// Fails if a global logger has already been installed.
#[cfg(feature = "logging")]
pub fn log() -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
