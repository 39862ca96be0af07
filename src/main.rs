use clap::Parser;
use class_builder::logging::init_logging;
use class_builder::{
    check_command, generate_manifest, handle_pipe_command, resolve_command, Cli, Commands, Severity,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Resolve(args) => {
            println!("{}", resolve_command(&args)?);
            Ok(())
        }
        Commands::Pipe(args) => {
            handle_pipe_command(args).await?;
            Ok(())
        }
        Commands::Manifest(args) => match generate_manifest(&args) {
            Ok(result) => {
                println!("Manifest generated!");
                println!("  - Processed {} files", result.files_processed);
                println!("  - {} components", result.manifest.metadata.components);
                println!("  - {} unique classes", result.manifest.metadata.classes);
                Ok(())
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Check(args) => {
            let diagnostics = check_command(&args)?;
            for diagnostic in &diagnostics {
                eprintln!("{}", diagnostic);
            }
            if diagnostics.iter().any(|d| d.severity == Severity::Error) {
                std::process::exit(1);
            }
            println!("{}: ok ({} warnings)", args.config.display(), diagnostics.len());
            Ok(())
        }
    }
}
