use anyhow::{Context, Result};
use clap::Parser;
use map_walker::CLIArgs;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = CLIArgs::parse();
    let map = map_walker::read_map(&args.input_path).with_context(|| {
        format!(
            "Failed to read map from given file({}).",
            args.input_path.display()
        )
    })?;

    let walk = map_walker::walk(&map).with_context(|| {
        format!(
            "Failed to walk the map from given file({}).",
            args.input_path.display()
        )
    })?;
    println!("{}", walk);

    Ok(())
}
