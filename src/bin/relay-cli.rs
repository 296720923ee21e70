use clap::{Parser, Subcommand};
use serde_json::Value;

use relay_proxy::diagnostics::LogsResponse;
use relay_proxy::LogEntry;

#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(about = "Diagnostic client for the relay proxy", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check proxy health and stored entry count
    Health,
    /// Print recent log entries, newest first
    Logs {
        #[arg(short, long, default_value_t = 100)]
        limit: usize,
        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },
    /// Drop every stored log entry
    Clear,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Health => {
            let res = client.get(format!("{base}/_health")).send().await?;
            print_response(res).await?;
        }
        Commands::Logs { limit, json } => {
            let res = client
                .get(format!("{base}/_logs/api"))
                .query(&[("limit", limit)])
                .send()
                .await?;
            if json {
                print_response(res).await?;
            } else {
                let logs: LogsResponse = res.error_for_status()?.json().await?;
                for entry in &logs.data {
                    println!("{}", format_entry(entry));
                }
                println!("-- {} shown, {} stored", logs.data.len(), logs.total);
            }
        }
        Commands::Clear => {
            let res = client.post(format!("{base}/_logs/clear")).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

fn format_entry(entry: &LogEntry) -> String {
    let mut line = format!(
        "{} {:<15} {} {}",
        entry.time.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        entry.client_ip,
        entry.message,
        entry.request_url
    );
    if let Some(data) = &entry.data {
        line.push(' ');
        line.push_str(&Value::Object(data.clone()).to_string());
    }
    line
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: proxy returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
