use acidentiton::cli::{Cli, Commands};
use acidentiton::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = if cli.quiet {
        Printer::quiet()
    } else {
        Printer::new()
    };

    match cli.command {
        Commands::Generate(args) => acidentiton::cli::generate::run(args, &printer)?,
        Commands::Inspect(args) => acidentiton::cli::inspect::run(args)?,
        Commands::Palette(args) => acidentiton::cli::palette::run(args)?,
        Commands::Seed(args) => acidentiton::cli::seed::run(args)?,
        Commands::Init(args) => acidentiton::cli::init::run(args, &printer)?,
        Commands::Completions(args) => acidentiton::cli::completions::run(args)?,
    }

    Ok(())
}
