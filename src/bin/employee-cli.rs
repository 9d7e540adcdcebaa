use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use url::Url;

#[derive(Parser)]
#[command(name = "employee-cli")]
#[command(about = "Command-line client for the employee facade", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every employee
    List,
    /// Search employees by name fragment
    Search { name: String },
    /// Show one employee
    Get { id: String },
    /// Show the highest salary
    HighestSalary,
    /// Show the ten highest earners
    TopEarners,
    /// Create an employee
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        salary: u64,
        #[arg(long)]
        age: u32,
        #[arg(long)]
        title: String,
        #[arg(long)]
        email: String,
    },
    /// Delete an employee by id
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = Url::parse(&cli.url)?;

    let request = match cli.command {
        Commands::List => client.get(employee_url(&base, &[])?),
        Commands::Search { name } => client.get(employee_url(&base, &["search", name.as_str()])?),
        Commands::Get { id } => client.get(employee_url(&base, &[id.as_str()])?),
        Commands::HighestSalary => client.get(employee_url(&base, &["highest-salary"])?),
        Commands::TopEarners => client.get(employee_url(&base, &["top-ten-highest-earners"])?),
        Commands::Create {
            name,
            salary,
            age,
            title,
            email,
        } => client.post(employee_url(&base, &[])?).json(&json!({
            "name": name,
            "salary": salary,
            "age": age,
            "title": title,
            "email": email,
        })),
        Commands::Delete { id } => client.delete(employee_url(&base, &[id.as_str()])?),
    };

    let res = request.send().await?;
    if !print_response(res).await? {
        std::process::exit(1);
    }
    Ok(())
}

/// `{base}/api/v1/employee/<segments...>`, each segment percent-encoded.
fn employee_url(base: &Url, segments: &[&str]) -> Result<Url, Box<dyn std::error::Error>> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| format!("'{base}' cannot be a base URL"))?
        .pop_if_empty()
        .extend(["api", "v1", "employee"])
        .extend(segments);
    Ok(url)
}

async fn print_response(res: reqwest::Response) -> Result<bool, Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: facade returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(false);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(true)
}
