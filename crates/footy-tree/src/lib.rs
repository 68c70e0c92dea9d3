//! Decision-tree fallback guesser for the footy game.
//!
//! When question-asking can no longer tell the remaining candidates apart,
//! the game falls back to a point prediction from a decision tree trained
//! once, up front, on the whole dataset:
//!
//! 1. **Encoding** ([`encode`]) - Every categorical column (features and
//!    label) is mapped to integer codes, assigned by sorted distinct value.
//! 2. **Tree** ([`tree`]) - A deterministic ID3 tree fit on the encoded
//!    dataset, splitting on the highest-information-gain feature at each
//!    node. Equal-gain ties are broken by a fixed-seed RNG so training is
//!    reproducible.
//! 3. **Predictor** ([`predictor`]) - The game-facing facade: train once,
//!    then predict a player name from the first row of whatever candidate
//!    subset is left.
//!
//! # Known limitation
//!
//! Prediction re-encodes the candidate subset with fresh encoders, so when
//! the subset's distinct values differ from the full dataset's, the integer
//! codes fed to the tree do not necessarily match the codes it was trained
//! on. This mirrors the long-standing behavior of the original game and is
//! kept as-is; fixing it would change observable predictions.

pub use self::{encode::*, predictor::*, tree::*};

pub mod encode;
pub mod predictor;
pub mod tree;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("cannot train on an empty dataset")]
pub struct EmptyTrainingSetError;
