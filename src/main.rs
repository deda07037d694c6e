use anyhow::Context;
use baby_connect_parser::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    let args = Args::parse();

    let result = commands::setup_logging(&args)
        .context("Failed to initialize logging")
        .and_then(|_| {
            commands::run(&args).with_context(|| {
                format!("Failed to parse '{}'", args.input_path.display())
            })
        });

    match result {
        Ok(_stats) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
