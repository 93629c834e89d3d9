use anyhow::{Context, Result};
use merge_demo::config::{parse_shape, Config};
use std::{io, path::PathBuf};
use structopt::StructOpt;

#[derive(Debug, Clone, StructOpt)]
/// Merge two random images and print the merged shape
struct Args {
    #[structopt(long)]
    /// configuration file
    pub config_file: Option<PathBuf>,
    #[structopt(long)]
    /// merge direction, skipping the interactive menu
    pub direction: Option<String>,
    #[structopt(long, parse(try_from_str = parse_shape))]
    /// comma separated shape of the second image, e.g. 3,50,100
    pub shape_two: Option<image_merge::Shape>,
    #[structopt(long)]
    /// seed for the random images
    pub seed: Option<u64>,
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let Args {
        config_file,
        direction,
        shape_two,
        seed,
    } = Args::from_args();

    let mut config = match &config_file {
        Some(path) => Config::open(path)
            .with_context(|| format!("failed to load config file '{}'", path.display()))?,
        None => Config::default(),
    };
    config.override_with(direction, shape_two, seed);

    let stdin = io::stdin();
    let stdout = io::stdout();
    merge_demo::start(&config, stdin.lock(), stdout.lock())?;

    Ok(())
}
