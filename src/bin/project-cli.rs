use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Number;

use project_service::client::ProjectClient;
use project_service::projects::{NewProject, ProjectPatch, ProjectStatus};

#[derive(Parser)]
#[command(name = "project-cli")]
#[command(about = "Command-line client for the project service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the service is up
    Health,
    /// List all projects
    List,
    /// Show one project
    Get { id: String },
    /// Create a project
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_parser = parse_priority)]
        priority: Number,
        /// One of: Planejado, Em andamento, Concluído, Cancelado
        #[arg(long, value_parser = parse_status)]
        status: ProjectStatus,
    },
    /// Change fields of a project
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_parser = parse_priority)]
        priority: Option<Number>,
        #[arg(long, value_parser = parse_status)]
        status: Option<ProjectStatus>,
    },
    /// Delete a project
    Delete { id: String },
}

fn parse_status(label: &str) -> Result<ProjectStatus, String> {
    ProjectStatus::from_label(label)
        .ok_or_else(|| format!("expected one of: {}", ProjectStatus::labels()))
}

fn parse_priority(raw: &str) -> Result<Number, String> {
    raw.parse::<Number>()
        .map_err(|_| format!("expected a number, got {:?}", raw))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = ProjectClient::new(&cli.url);

    match cli.command {
        Commands::Health => print_json(&client.health().await?)?,
        Commands::List => print_json(&client.list().await?)?,
        Commands::Get { id } => print_json(&client.get(&id).await?)?,
        Commands::Create {
            title,
            description,
            priority,
            status,
        } => {
            let project = NewProject {
                title,
                description,
                priority,
                status,
            };
            print_json(&client.create(&project).await?)?;
        }
        Commands::Update {
            id,
            title,
            description,
            priority,
            status,
        } => {
            let patch = ProjectPatch {
                title,
                description: description.map(Some),
                priority,
                status,
            };
            if patch.is_empty() {
                eprintln!("Nothing to update");
                return Ok(());
            }
            print_json(&client.update(&id, &patch).await?)?;
        }
        Commands::Delete { id } => {
            client.delete(&id).await?;
            println!("Deleted {}", id);
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
