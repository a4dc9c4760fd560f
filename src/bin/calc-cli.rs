use clap::{Parser, Subcommand};
use serde_json::json;

use calc_service::client::{CalcClient, ClientError};
use calc_service::Operation;

#[derive(Parser)]
#[command(name = "calc-cli")]
#[command(about = "Command-line client for the calculator service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    /// Send operands as a JSON POST body instead of a query string.
    #[arg(short, long)]
    post: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the service is up
    Health,
    /// Evaluate an operation: add, subtract, multiply, divide, sin, cos, tan, ctg
    #[command(name = "eval")]
    Eval {
        operation: String,
        #[arg(allow_negative_numbers = true)]
        num1: f64,
        #[arg(allow_negative_numbers = true)]
        num2: f64,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = CalcClient::new(&cli.url);

    match cli.command {
        Commands::Health => {
            let health = client.health().await?;
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "status": health.status,
                    "version": health.version,
                }))?
            );
        }
        Commands::Eval { operation, num1, num2 } => {
            let operation: Operation = operation.parse()?;
            let outcome = if cli.post {
                client.calculate_json(operation, num1, num2).await
            } else {
                client.calculate(operation, num1, num2).await
            };

            match outcome {
                Ok(result) => println!("{}", json!({ "result": result })),
                Err(ClientError::Api(message)) => {
                    eprintln!("{}", json!({ "error": message }));
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}
