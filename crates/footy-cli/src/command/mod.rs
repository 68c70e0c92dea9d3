use clap::{Parser, Subcommand};

use self::{gain::GainArg, play::PlayArg};

mod gain;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play the guessing game (the default)
    Play(#[clap(flatten)] PlayArg),
    /// Print the information-gain ranking of the feature attributes
    Gain(#[clap(flatten)] GainArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Gain(arg) => gain::run(&arg)?,
    }
    Ok(())
}
