//! Core engine for the footy guessing game.
//!
//! This crate implements the question-driven narrowing loop that powers the
//! game:
//!
//! 1. **Entropy engine** ([`entropy`], [`information_gain`]) - Shannon
//!    entropy and information gain over the label distribution of a
//!    candidate set.
//! 2. **Question selector** ([`select_question`]) - Ranks the feature
//!    attributes by information gain and picks the most discriminating one.
//! 3. **Game session** ([`GameSession`]) - The turn-based state machine
//!    that narrows the candidate set answer by answer until a unique player
//!    remains, or no question can discriminate further.
//!
//! The data model ([`core`]) is deliberately small: an immutable [`Dataset`]
//! shared by reference, candidate sets as re-assigned row-index vectors, and
//! a closed [`Answer`] enum. Input validation and prompting are the caller's
//! concern; the engine only ever sees parsed answers.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum DatasetError {
    #[display("unknown column: {name}")]
    UnknownColumn { name: String },
    #[display("duplicate column: {name}")]
    DuplicateColumn { name: String },
    #[display("row {row} has {actual} fields, expected {expected}")]
    RowArity {
        row: usize,
        actual: usize,
        expected: usize,
    },
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("no question is pending for this round")]
pub struct NoPendingQuestionError;
