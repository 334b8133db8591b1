mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Init { name } => commands::init::run(name, cli.verbose),
        Commands::Scan { file, json } => commands::scan::run(file, json),
        Commands::Convert {
            template,
            values,
            output,
            strict,
        } => commands::convert::run(template, values, output, strict, cli.verbose),
        Commands::Templates { json } => commands::templates::run(json, cli.verbose),
        Commands::New { name, template } => commands::new::run(name, template, cli.verbose),
        Commands::Export { generator } => commands::export::run(generator, cli.verbose),
        Commands::Pull { generator } => commands::pull::run(generator, cli.verbose),
        Commands::Reconvert => commands::export::run_all(cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
