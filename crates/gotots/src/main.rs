use clap::Parser;
use gotots::{Cli, commands, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    std::process::exit(commands::generate::run(cli.generate));
}
