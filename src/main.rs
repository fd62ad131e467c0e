use clap::Parser;
use drawio_pages::cli::{Cli, Commands};
use drawio_pages::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Export(args) => drawio_pages::cli::export::run(args, &printer)?,
        Commands::List(args) => drawio_pages::cli::list::run(args, &printer)?,
        Commands::Watch(args) => drawio_pages::cli::watch::run(args, &printer)?,
        Commands::Init(args) => drawio_pages::cli::init::run(args, &printer)?,
        Commands::Completions(args) => drawio_pages::cli::completions::run(args)?,
    }

    Ok(())
}
