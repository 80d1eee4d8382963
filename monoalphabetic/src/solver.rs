//! Simulated annealing over substitution mappings

use std::sync::atomic::{AtomicBool, Ordering};

use freq_analysis::ENGLISH_ORDER;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::mapping::SubstitutionMapping;
use crate::scoring::NgramProfile;

/// Tuning knobs for the annealing search
#[derive(Clone, Debug, PartialEq)]
pub struct AnnealingConfig {
    /// Proposals per run; the search never stops early on its own
    pub iterations: usize,
    pub initial_temperature: f64,
    /// Multiplier applied to the temperature after every proposal
    pub cooling_rate: f64,
    /// Independent runs from fresh seed mappings; the best result is kept
    pub restarts: usize,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            iterations: 40_000,
            initial_temperature: 4.0,
            cooling_rate: 0.9993,
            restarts: 4,
        }
    }
}

/// Result of a substitution solve
#[derive(Clone, Debug, PartialEq)]
pub struct MonoSolution {
    pub score: f64,
    pub mapping: SubstitutionMapping,
    pub plaintext: String,
    /// Proposals actually evaluated across all restarts
    pub iterations_run: usize,
}

/// Initial mapping from letter frequencies.
///
/// Cipher letters are ranked by count (ties alphabetical) and paired with
/// `etaoin...` in order. Letters that never occur take the leftover targets
/// in random order.
pub fn seed_mapping<R: Rng + ?Sized>(profile: &NgramProfile, rng: &mut R) -> SubstitutionMapping {
    let counts = profile.letter_counts();
    let targets: Vec<u8> = ENGLISH_ORDER.bytes().map(|b| b - b'a').collect();

    let mut present: Vec<usize> = (0..26).filter(|&i| counts[i] > 0).collect();
    present.sort_by(|&a, &b| counts[b].cmp(&counts[a]).then(a.cmp(&b)));

    let mut images = [0u8; 26];
    for (rank, &cipher) in present.iter().enumerate() {
        images[cipher] = targets[rank];
    }

    let mut leftovers = targets[present.len()..].to_vec();
    leftovers.shuffle(rng);
    let absent = (0..26).filter(|&i| counts[i] == 0);
    for (cipher, target) in absent.zip(leftovers) {
        images[cipher] = target;
    }

    // Every target is used exactly once above
    SubstitutionMapping::from_images(images).unwrap_or_default()
}

/// Solve with the default configuration and the thread-local RNG.
pub fn solve(ciphertext: &str) -> MonoSolution {
    solve_with(ciphertext, &AnnealingConfig::default(), &mut rand::thread_rng())
}

/// Solve with an explicit configuration and random source.
pub fn solve_with<R: Rng + ?Sized>(ciphertext: &str, config: &AnnealingConfig, rng: &mut R) -> MonoSolution {
    solve_cancellable(ciphertext, config, rng, &AtomicBool::new(false))
}

/// Like [`solve_with`], stopping early once `cancel` is set.
///
/// The flag is checked before every proposal; the best mapping found so far
/// is still returned.
pub fn solve_cancellable<R: Rng + ?Sized>(
    ciphertext: &str,
    config: &AnnealingConfig,
    rng: &mut R,
    cancel: &AtomicBool,
) -> MonoSolution {
    let profile = NgramProfile::from_ciphertext(ciphertext);

    let mut best: Option<(SubstitutionMapping, f64)> = None;
    let mut iterations_run = 0;

    for restart in 0..config.restarts.max(1) {
        let (mapping, score, steps) = anneal(&profile, config, rng, cancel);
        iterations_run += steps;
        debug!(restart, score, steps, "annealing run finished");

        if best.as_ref().map_or(true, |(_, best_score)| score > *best_score) {
            best = Some((mapping, score));
        }
        if cancel.load(Ordering::Relaxed) {
            break;
        }
    }

    let (mapping, score) = best.unwrap_or_else(|| {
        let mapping = SubstitutionMapping::identity();
        (mapping, profile.score(&mapping))
    });

    MonoSolution {
        score,
        mapping,
        plaintext: mapping.apply(ciphertext),
        iterations_run,
    }
}

/// One annealing run. Returns the best mapping visited, its score and the
/// number of proposals evaluated.
fn anneal<R: Rng + ?Sized>(
    profile: &NgramProfile,
    config: &AnnealingConfig,
    rng: &mut R,
    cancel: &AtomicBool,
) -> (SubstitutionMapping, f64, usize) {
    let mut current = seed_mapping(profile, rng);
    let mut current_score = profile.score(&current);
    let mut best = current;
    let mut best_score = current_score;
    let mut temperature = config.initial_temperature;

    for step in 0..config.iterations {
        if cancel.load(Ordering::Relaxed) {
            return (best, best_score, step);
        }

        let a = rng.gen_range(0..26u8);
        let mut b = rng.gen_range(0..25u8);
        if b >= a {
            b += 1;
        }

        let mut candidate = current;
        candidate.swap(a, b);
        let candidate_score = profile.score(&candidate);

        let accept = candidate_score > current_score
            || rng.gen_range(0.0..1.0) < ((candidate_score - current_score) / temperature).exp();

        if accept {
            current = candidate;
            current_score = candidate_score;
            if current_score > best_score {
                best = current;
                best_score = current_score;
            }
        }

        temperature *= config.cooling_rate;

        if step % 5_000 == 0 {
            trace!(step, temperature, current_score, best_score, "annealing");
        }
    }

    (best, best_score, config.iterations)
}
