mod commands;
mod shell;
mod terminal;

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

use anyhow::Context;
use biblio_common::config::Config;
use biblio_core::Library;
use commands::CommandLine;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
    };
    print::banner(&cfg);

    let mut library = Library::new();

    match &commands.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open script {}", path.display()))?;
            shell::run(&mut library, BufReader::new(file), &cfg, false)
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            shell::run(&mut library, stdin.lock(), &cfg, interactive)
        }
    }
}
