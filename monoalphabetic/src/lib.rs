//! Monoalphabetic substitution solver.
//!
//! Searches the space of 26-letter permutations with simulated annealing,
//! scoring each candidate by English unigram and bigram weights. The result
//! is a best-effort decryption; with a few hundred letters of ciphertext most
//! letters usually come out right, with rare letters often still swapped.

pub mod mapping;
pub mod scoring;
pub mod solver;

pub use mapping::{MappingError, SubstitutionMapping};
pub use scoring::{score_text, NgramProfile};
pub use solver::{solve, solve_cancellable, solve_with, AnnealingConfig, MonoSolution};
