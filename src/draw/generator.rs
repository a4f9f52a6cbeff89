//! Batch generation of random combinations by rejection sampling

use crate::draw::bitset::NumberBitset;
use crate::draw::combination::{Combination, CombinationSet};
use crate::draw::game::Game;
use crate::io::configuration::{COMBINATION_SIZE, MAX_COUNT, MIN_COUNT};
use crate::io::error::{Result, invalid_argument};
use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Generate `count` combinations with numbers drawn from `1..=max_number`
///
/// Each combination draws uniformly at random, discarding repeats until five
/// distinct numbers are collected. Results are sorted ascending and appear in
/// generation order. Randomness comes entirely from `rng`, so a seeded
/// generator reproduces the same batch.
///
/// # Errors
///
/// Returns `InvalidArgument` if:
/// - `count` is outside `MIN_COUNT..=MAX_COUNT`
/// - `max_number` is too small to hold five distinct numbers
pub fn generate<R: Rng + ?Sized>(
    count: usize,
    max_number: u8,
    rng: &mut R,
) -> Result<CombinationSet> {
    validate_count(count)?;
    validate_max_number(max_number)?;

    let mut drawn = NumberBitset::new(max_number);
    let combinations: CombinationSet = (0..count)
        .map(|_| draw_combination(max_number, &mut drawn, rng))
        .collect();

    debug!("generated {count} combinations from 1..={max_number}");
    Ok(combinations)
}

/// Check a requested batch size against the accepted bounds
///
/// # Errors
///
/// Returns `InvalidArgument` if `count` is outside `MIN_COUNT..=MAX_COUNT`
pub fn validate_count(count: usize) -> Result<()> {
    if (MIN_COUNT..=MAX_COUNT).contains(&count) {
        Ok(())
    } else {
        Err(invalid_argument(
            "count",
            &count,
            &format!("must be between {MIN_COUNT} and {MAX_COUNT}"),
        ))
    }
}

fn validate_max_number(max_number: u8) -> Result<()> {
    if usize::from(max_number) < COMBINATION_SIZE {
        return Err(invalid_argument(
            "max_number",
            &max_number,
            &format!("range must hold at least {COMBINATION_SIZE} distinct numbers"),
        ));
    }
    Ok(())
}

fn draw_combination<R: Rng + ?Sized>(
    max_number: u8,
    drawn: &mut NumberBitset,
    rng: &mut R,
) -> Combination {
    drawn.clear();
    while drawn.count() < COMBINATION_SIZE {
        drawn.insert(rng.random_range(1..=max_number));
    }

    // Bitset iteration is ascending, so the draw comes out sorted
    let mut values = [0_u8; COMBINATION_SIZE];
    for (slot, number) in values.iter_mut().zip(drawn.iter()) {
        *slot = number;
    }
    Combination::from_sorted(values)
}

/// Seeded generator bound to one game
///
/// Owns its random source so successive batches continue the same stream.
pub struct Generator {
    rng: StdRng,
    game: Game,
}

impl Generator {
    /// Create a deterministic generator for `game`
    pub fn new(game: Game, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            game,
        }
    }

    /// Game whose number range is drawn from
    pub const fn game(&self) -> Game {
        self.game
    }

    /// Generate the next batch of `count` combinations
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `count` is outside the accepted bounds
    pub fn batch(&mut self, count: usize) -> Result<CombinationSet> {
        generate(count, self.game.max_number(), &mut self.rng)
    }
}
