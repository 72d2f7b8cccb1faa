//! FlightPath CLI: runs FlightPath Server tasks from a shell or an orchestrator step.
//!
//! Connections are read from FLIGHTPATH_CONN_<ID>_HOST and
//! FLIGHTPATH_CONN_<ID>_API_KEY (a `.env` file is loaded first).

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use flightpath_core::constants::{DEFAULT_CONN_ID, DEFAULT_RUN_METHOD};
use flightpath_core::provider_info;
use flightpath_tasks::{PullDataTask, RegisterAndRunTask, RegisterFileTask, Task, TaskContext};
use flightpath_cli::{init_tracing, render_json};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "flightpath", about = "FlightPath Server task runner")]
struct Cli {
    /// Connection id to resolve the server URL and API key from
    #[arg(long, global = true, default_value = DEFAULT_CONN_ID)]
    conn_id: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new version of a named-file
    RegisterFile {
        /// Project name
        #[arg(long)]
        project: String,
        /// Named-file name
        #[arg(long)]
        name: String,
        /// Location of the file, as seen by the server
        #[arg(long)]
        file_location: String,
        /// Optional storage template
        #[arg(long)]
        template: Option<String>,
    },
    /// Register a named-file and run it through a named-paths group
    RegisterAndRun {
        #[arg(long)]
        project: String,
        #[arg(long)]
        file_location: String,
        #[arg(long)]
        file_name: String,
        /// Named-paths group to run
        #[arg(long)]
        group: String,
        /// Run method
        #[arg(long, default_value = DEFAULT_RUN_METHOD)]
        method: String,
        #[arg(long)]
        file_template: Option<String>,
        #[arg(long)]
        run_template: Option<String>,
    },
    /// List the paths a reference resolves to
    FindFiles {
        #[arg(long)]
        project: String,
        #[arg(long)]
        reference: String,
    },
    /// Download the file a reference points to
    PullData {
        #[arg(long)]
        project: String,
        #[arg(long)]
        reference: String,
        /// Local path to write the file to
        #[arg(long)]
        output: PathBuf,
    },
    /// Print provider metadata
    Info,
}

async fn run<T: Task>(task: T, context: &TaskContext) -> anyhow::Result<()> {
    let output = task
        .execute(context)
        .await
        .with_context(|| format!("Task '{}' failed", task.name()))?;
    print_json(&output)
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", render_json(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let context = TaskContext::from_env();
    let conn_id = cli.conn_id;

    match cli.command {
        Commands::RegisterFile {
            project,
            name,
            file_location,
            template,
        } => {
            let task = RegisterFileTask::new(project, name, file_location)
                .with_template(template)
                .with_conn_id(conn_id);
            run(task, &context).await?;
        }
        Commands::RegisterAndRun {
            project,
            file_location,
            file_name,
            group,
            method,
            file_template,
            run_template,
        } => {
            let task = RegisterAndRunTask::new(project, file_location, file_name, group)
                .with_method(method)
                .with_file_template(file_template)
                .with_run_template(run_template)
                .with_conn_id(conn_id);
            run(task, &context).await?;
        }
        Commands::FindFiles { project, reference } => {
            let client = context
                .client(&conn_id)
                .context("Failed to create API client")?;
            let response = client.find_files(&project, &reference).await?;
            tracing::info!("Found {} path(s) for '{}'", response.paths().len(), reference);
            print_json(&response)?;
        }
        Commands::PullData {
            project,
            reference,
            output,
        } => {
            let task = PullDataTask::new(project, reference, output).with_conn_id(conn_id);
            run(task, &context).await?;
        }
        Commands::Info => {
            print_json(&provider_info())?;
        }
    }

    Ok(())
}
