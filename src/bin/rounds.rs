use anyhow::{Context, Result};
use clap::Parser;
use deck_shuffle::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let rounds = deck_shuffle::rounds_to_restore(args.deck_size).with_context(|| {
        format!(
            "Failed to compute restoring rounds for a deck of {} cards.",
            args.deck_size
        )
    })?;
    println!("rounds for {} numbers = {}", args.deck_size, rounds);

    Ok(())
}
