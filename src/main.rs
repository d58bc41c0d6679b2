use anyhow::Context;
use clap::Parser;
use dom_classlist::{handle_pipe_command, render, Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Handle commands
    match cli.command {
        Commands::Apply(args) => {
            let script = args.script.load().context("Failed to load class script")?;
            match render(args.classes.as_slice(), &script, args.script.json) {
                Ok(output) => {
                    print!("{}", output);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Pipe(args) => {
            // Handle pipe mode
            handle_pipe_command(args).await?;
            Ok(())
        }
    }
}
