//! logistix-client CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use logistix_client::cli::{Cli, Commands, OutputFormat};
use logistix_client::output::{format_output, pretty};
use logistix_client::{LogistixClient, Result};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", pretty::format_error(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let client = LogistixClient::new(&cli.base_url)?;

    match cli.command {
        Commands::Health => {
            let health = client.health().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&health, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_health(&health)),
            }
        }
        Commands::Track { number } => {
            let result = client.track(&number).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&result, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_tracking(&result)),
            }
        }
        Commands::Contact(args) => {
            let response = client.submit_contact(&args.into_request()).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&response, cli.format)),
                OutputFormat::Pretty => {
                    if !cli.quiet {
                        println!("{}", pretty::format_contact(&response.contact))
                    }
                }
            }
        }
        Commands::Quote(args) => {
            let response = client.submit_quote(&args.into_request()).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&response, cli.format)),
                OutputFormat::Pretty => {
                    if !cli.quiet {
                        println!("{}", pretty::format_quote(&response.quote))
                    }
                }
            }
        }
        Commands::GetQuote(args) => {
            let response = client.submit_quote_lead(&args.into_request()).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&response, cli.format)),
                OutputFormat::Pretty => {
                    if !cli.quiet {
                        println!("{}", response.message)
                    }
                }
            }
        }
        Commands::Subscribe { email } => {
            let response = client.subscribe(&email).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&response, cli.format)),
                OutputFormat::Pretty => {
                    if !cli.quiet {
                        println!("{}", response.message)
                    }
                }
            }
        }
    }

    Ok(())
}
