//! Entry-point for the `kids-txt` binary.
use clap::Parser;
use kids_txt_cli::Cli;
use kids_txt_cli::run_main;

fn main() -> anyhow::Result<()> {
    run_main(Cli::parse())
}
