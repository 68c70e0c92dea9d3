use crate::{
    NoPendingQuestionError,
    core::{Answer, Dataset},
    engine::selector::select_question_column,
};

/// Maximum number of questions per game.
pub const MAX_ROUNDS: usize = 20;

/// Where a game currently stands.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameState {
    /// More than one candidate remains and questions may still be asked.
    Active,
    /// Narrowed down to a single player; the game is over.
    Guessed(String),
    /// No remaining attribute discriminates the candidates. The caller may
    /// attempt a classifier fallback guess.
    Plateau,
    /// No unique candidate within the round budget, or the candidate set
    /// emptied out (possible only under contradictory answers).
    Exhausted,
}

/// One question of one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    attribute: String,
    reference_value: String,
    round: usize,
}

impl Question {
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// The value the question compares against, read from the first row of
    /// the candidate set at the time the question was selected.
    #[must_use]
    pub fn reference_value(&self) -> &str {
        &self.reference_value
    }

    /// 1-based question number.
    #[must_use]
    pub fn round(&self) -> usize {
        self.round
    }
}

/// A single game: the candidate-narrowing state machine.
///
/// The session borrows the immutable [`Dataset`] as its context and owns the
/// candidate lineage. Drive it by alternating [`next_question`] and
/// [`answer`] until [`state`] is terminal.
///
/// [`next_question`]: Self::next_question
/// [`answer`]: Self::answer
/// [`state`]: Self::state
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    dataset: &'a Dataset,
    candidates: Vec<usize>,
    round: usize,
    state: GameState,
    pending: Option<Question>,
}

impl<'a> GameSession<'a> {
    #[must_use]
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            candidates: dataset.all_rows(),
            round: 0,
            state: GameState::Active,
            pending: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Rows still consistent with every answer given so far.
    #[must_use]
    pub fn candidates(&self) -> &[usize] {
        &self.candidates
    }

    /// Number of questions asked so far.
    #[must_use]
    pub fn round(&self) -> usize {
        self.round
    }

    /// Selects the question for the next round, advancing to a terminal
    /// state instead when the game is decided.
    ///
    /// Returns `None` once the session leaves [`GameState::Active`]:
    ///
    /// * one candidate left at round start - straight to `Guessed`, no
    ///   question asked
    /// * no candidate left - `Exhausted`
    /// * round budget spent - `Exhausted`
    /// * no attribute discriminates - `Plateau`
    ///
    /// Calling this again while a question is unanswered re-returns the
    /// pending question.
    pub fn next_question(&mut self) -> Option<Question> {
        if !self.state.is_active() {
            return None;
        }
        if let Some(pending) = &self.pending {
            return Some(pending.clone());
        }

        match self.candidates.as_slice() {
            [] => {
                self.state = GameState::Exhausted;
                return None;
            }
            &[only] => {
                self.state = GameState::Guessed(self.dataset.label_of(only).to_owned());
                return None;
            }
            _ => {}
        }
        if self.round >= MAX_ROUNDS {
            self.state = GameState::Exhausted;
            return None;
        }

        let Some((attribute, column)) = select_question_column(self.dataset, &self.candidates)
        else {
            self.state = GameState::Plateau;
            return None;
        };
        self.round += 1;
        let question = Question {
            attribute: attribute.to_owned(),
            reference_value: self.dataset.value_at(self.candidates[0], column).to_owned(),
            round: self.round,
        };
        self.pending = Some(question.clone());
        Some(question)
    }

    /// Applies an answer to the pending question, re-assigning the candidate
    /// set through [`filter_candidates`].
    ///
    /// Transitions to `Guessed` when exactly one candidate remains and to
    /// `Exhausted` when none do; otherwise the session stays active for the
    /// next round.
    pub fn answer(&mut self, answer: Answer) -> Result<(), NoPendingQuestionError> {
        let question = self.pending.take().ok_or(NoPendingQuestionError)?;
        self.candidates = filter_candidates(
            self.dataset,
            &self.candidates,
            question.attribute(),
            question.reference_value(),
            answer,
        );
        match self.candidates.as_slice() {
            [] => self.state = GameState::Exhausted,
            &[only] => self.state = GameState::Guessed(self.dataset.label_of(only).to_owned()),
            _ => {}
        }
        Ok(())
    }
}

/// Narrows a candidate set by one answered question.
///
/// Yes and probably-yes keep the rows whose `attribute` equals
/// `reference_value`; no, probably-no and unknown keep the rest. The input
/// is untouched; the result is a fresh, never-larger index vector. An
/// attribute missing from the dataset keeps nothing.
#[must_use]
pub fn filter_candidates(
    dataset: &Dataset,
    candidates: &[usize],
    attribute: &str,
    reference_value: &str,
    answer: Answer,
) -> Vec<usize> {
    let Some(column) = dataset.column_index(attribute) else {
        return Vec::new();
    };
    candidates
        .iter()
        .copied()
        .filter(|&row| (dataset.value_at(row, column) == reference_value) == answer.keeps_matching())
        .collect()
}
