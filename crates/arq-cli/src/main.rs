use arq_cli::commands::{
    CreateTestArgs, ExportArgs, SetupArgs, run_create_test, run_export, run_setup,
};
use clap::{Parser, Subcommand};
use miette::Result as MietteResult;

#[derive(Parser)]
#[command(name = "arq")]
#[command(about = "Scaffolds Arquillian integration tests and exports @Deployment archives")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Declare Arquillian, test framework, and container dependencies
    Setup(SetupArgs),

    /// Create a test class with a default @Deployment method
    CreateTest(CreateTestArgs),

    /// Export a @Deployment archive to a zip file on disk
    Export(ExportArgs),
}

fn main() -> MietteResult<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .color(true)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Setup(args) => run_setup(args),
        Commands::CreateTest(args) => run_create_test(args),
        Commands::Export(args) => run_export(args),
    };

    result.map_err(miette::Report::new)
}
