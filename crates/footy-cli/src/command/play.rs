use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::Context as _;
use footy_engine::{Answer, Dataset, GameSession, GameState};
use footy_tree::PlayerPredictor;

use crate::{dataset_file, prompt};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Dataset file (.csv or .json)
    #[arg(long, default_value = "data/players.csv")]
    dataset: PathBuf,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from("data/players.csv"),
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let dataset = dataset_file::load(&arg.dataset)?;
    let predictor =
        PlayerPredictor::train(&dataset).context("Failed to train the fallback guesser")?;

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    run_game(&dataset, &predictor, &mut input, &mut output)
}

/// One full game against the given reader/writer pair.
///
/// The loop alternates between the session's question and one validated
/// answer until the session reaches a terminal state. A unique candidate is
/// guessed and confirmed; the plateau and exhausted terminals fall back to
/// the decision-tree guesser.
fn run_game(
    dataset: &Dataset,
    predictor: &PlayerPredictor,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(output, "Think of a player and I will try to guess them.")?;

    let mut session = GameSession::new(dataset);
    while let Some(question) = session.next_question() {
        writeln!(
            output,
            "Question {}: Is the player from {}?",
            question.round(),
            question.reference_value()
        )?;
        let answer = prompt::read_answer(input, output)?;
        if answer == Answer::Unknown {
            writeln!(output, "Skipping to the next question:")?;
        }
        session.answer(answer)?;
    }

    match session.state() {
        GameState::Guessed(name) => {
            writeln!(output, "I guess {name}!")?;
            let confirmed =
                prompt::read_confirmation(input, output, "Is my guess correct? (yes/no): ")?;
            // The game ends either way; an unconfirmed guess is not retried.
            if confirmed {
                writeln!(output, "Yay! I guessed it! Thanks for playing!")?;
            }
        }
        GameState::Plateau => {
            writeln!(output, "No question can tell the remaining players apart.")?;
            fallback_guess(dataset, predictor, &session, output)?;
        }
        GameState::Exhausted => {
            writeln!(output, "I couldn't guess your player! Sorry")?;
            fallback_guess(dataset, predictor, &session, output)?;
        }
        GameState::Active => {}
    }
    Ok(())
}

fn fallback_guess(
    dataset: &Dataset,
    predictor: &PlayerPredictor,
    session: &GameSession<'_>,
    output: &mut impl Write,
) -> anyhow::Result<()> {
    match predictor.predict(dataset, session.candidates()) {
        Some(name) => writeln!(output, "My best guess is {name}.")?,
        None => writeln!(output, "I have no guess to offer.")?,
    }
    Ok(())
}
