use ants_vs_bees::prelude::*;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let config = GameConfig::from_args(&args)?;
    let mut game = config.build();

    let interactive = args.script.is_none() && io::stdin().is_terminal();
    let stdout = io::stdout();
    let mut shell = Shell::new(&mut game, stdout.lock())
        .quiet(args.quiet)
        .prompt(interactive);

    match &args.script {
        Some(path) => {
            let reader = BufReader::with_capacity(64 * 1024, File::open(path)?);
            shell.run(reader)?;
        }
        None => {
            shell.run(io::stdin().lock())?;
        }
    }

    Ok(())
}
