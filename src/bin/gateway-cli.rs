use clap::{Parser, Subcommand};
use reqwest::StatusCode;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "gateway-cli")]
#[command(about = "Command-line client for the posts gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000", env = "GATEWAY_URL")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two operands
    Add { a: String, b: String },
    /// Subtract b from a
    Sub { a: String, b: String },
    /// Multiply two operands
    Mul { a: String, b: String },
    /// Divide a by b
    Div { a: String, b: String },
    /// Work with upstream posts
    Posts {
        #[command(subcommand)]
        command: PostsCommand,
    },
}

#[derive(Subcommand)]
enum PostsCommand {
    /// List posts
    List,
    /// Create a post from a JSON document
    Create { json: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Add { a, b } => math(&client, base, "add", a, b).await?,
        Commands::Sub { a, b } => math(&client, base, "sub", a, b).await?,
        Commands::Mul { a, b } => math(&client, base, "mul", a, b).await?,
        Commands::Div { a, b } => math(&client, base, "div", a, b).await?,
        Commands::Posts { command: PostsCommand::List } => {
            client.get(format!("{}/posts", base)).send().await?
        }
        Commands::Posts { command: PostsCommand::Create { json } } => {
            let body: Value = serde_json::from_str(&json)?;
            client
                .post(format!("{}/posts", base))
                .json(&body)
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn math(
    client: &reqwest::Client,
    base: &str,
    operation: &str,
    a: String,
    b: String,
) -> Result<reqwest::Response, reqwest::Error> {
    client
        .post(format!("{}/math/{}", base, operation))
        .json(&json!({ "a": a, "b": b }))
        .send()
        .await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if status != StatusCode::OK {
        eprintln!("Error: gateway returned status {}", status);
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
