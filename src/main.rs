use clap::Parser;
use color_eyre::Result;

use ipsec_status::cli::{self, args::Args};
use ipsec_status::logging;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init(args.verbose);

    cli::commands::run(&args)
}
