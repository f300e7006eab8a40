use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Table};
use configuration::Config;
use core_types::Student;
use database::{connect, run_migrations, Dao, StudentRecord, StudentService};
use std::path::PathBuf;

/// The main entry point for the student records application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => configuration::load_config_from(path),
        None => configuration::load_config(),
    }
    .context("Failed to load configuration")?;
    let _log_guard = configuration::init_tracing(&config.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => {
            if let Some(host) = args.host {
                config.server.host = host;
            }
            if let Some(port) = args.port {
                config.server.port = port;
            }
            web_server::run_server(&config).await
        }
        Commands::Migrate => {
            let db_pool = connect(&config.database).await?;
            run_migrations(&db_pool).await?;
            println!("Migrations applied.");
            Ok(())
        }
        Commands::Add(args) => {
            let service = open_service(&config).await?;
            service.create(&args.into_student()).await?;
            println!("Student created.");
            Ok(())
        }
        Commands::List(args) => {
            let service = open_service(&config).await?;
            let students = service.find_all().await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&students)?);
            } else {
                println!("{}", render_table(&students));
            }
            Ok(())
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Records and lists students in the `Etudiant` table.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read settings from this file instead of ./config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API.
    Serve(ServeArgs),
    /// Apply database migrations and exit.
    Migrate,
    /// Insert a new student.
    Add(AddArgs),
    /// Print every stored student.
    List(ListArgs),
}

#[derive(Parser)]
struct ServeArgs {
    /// Overrides server.host.
    #[arg(long)]
    host: Option<String>,

    /// Overrides server.port.
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Parser)]
struct AddArgs {
    /// Last name.
    #[arg(long)]
    nom: String,

    /// First name.
    #[arg(long)]
    prenom: String,

    /// City.
    #[arg(long)]
    ville: String,

    /// Sex code (e.g. "F", "M").
    #[arg(long)]
    sexe: String,
}

impl AddArgs {
    fn into_student(self) -> Student {
        Student::new(self.nom, self.prenom, self.ville, self.sexe)
    }
}

#[derive(Parser)]
struct ListArgs {
    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
}

/// Connects, makes sure the schema exists, and wraps the pool in a service.
async fn open_service(config: &Config) -> anyhow::Result<StudentService> {
    let db_pool = connect(&config.database).await?;
    run_migrations(&db_pool).await?;
    Ok(StudentService::new(db_pool))
}

fn render_table(students: &[StudentRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["id", "nom", "prenom", "ville", "sexe"]);

    for student in students {
        table.add_row(vec![
            student.id.to_string(),
            student.nom.clone(),
            student.prenom.clone(),
            student.ville.clone(),
            student.sexe.clone(),
        ]);
    }
    table
}
