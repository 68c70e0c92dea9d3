use std::path::PathBuf;

use footy_engine::{information_gain, select_question};

use crate::dataset_file;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GainArg {
    /// Dataset file (.csv or .json)
    #[arg(long, default_value = "data/players.csv")]
    dataset: PathBuf,
}

pub(crate) fn run(arg: &GainArg) -> anyhow::Result<()> {
    let dataset = dataset_file::load(&arg.dataset)?;
    let candidates = dataset.all_rows();

    let mut ranking: Vec<(&str, f64)> = dataset
        .feature_attributes()
        .map(|attribute| (attribute, information_gain(&dataset, &candidates, attribute)))
        .collect();
    ranking.sort_by(|a, b| b.1.total_cmp(&a.1));

    println!("Information gain over {} players:", dataset.len());
    for (attribute, gain) in &ranking {
        println!("  {attribute:<16} {gain:.4}");
    }
    match select_question(&dataset, &candidates) {
        Some(attribute) => println!("First question would ask about: {attribute}"),
        None => println!("No attribute discriminates this dataset."),
    }
    Ok(())
}
