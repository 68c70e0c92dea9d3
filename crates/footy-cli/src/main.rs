mod command;
mod dataset_file;
mod prompt;

fn main() -> anyhow::Result<()> {
    command::run()
}
