use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use taskmaster_client::{ClientConfig, HttpTaskApi, TaskBoard, view};
use taskmaster_core::{Priority, TaskFilter, parse_deadline};

#[derive(Parser, Debug)]
#[command(name = "taskmaster", about = "Manage tasks stored in a TaskMaster task store")]
struct Cli {
    /// Base URL of the task store
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
enum Commands {
    /// Show the task list and statistics
    List {
        #[arg(long, default_value = "all")]
        filter: TaskFilter,
    },
    /// Create a task
    Add {
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<Priority>,
        /// Due date as YYYY-MM-DD
        #[arg(long, value_parser = parse_deadline)]
        deadline: Option<NaiveDate>,
    },
    /// Flip a task between completed and pending
    Toggle { id: String },
    Delete { id: String },
    /// Show only the statistics
    Stats,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        tracing::debug!("Command failed: {:?}", err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ClientConfig::from_env()?.with_api_url(cli.api_url);
    let mut board = TaskBoard::new(HttpTaskApi::new(&config.api_url)?);

    // Checked before anything is sent so a blank title never reaches the store.
    if let Commands::Add { title, .. } = &cli.command {
        board.set_title(title.as_str());
        if board.draft().validate().is_err() {
            return Err(taskmaster_client::ClientError::EmptyTitle.into());
        }
    }

    board.load().await?;

    match cli.command {
        Commands::List { filter } => {
            board.set_filter(filter);
            print!("{}", view::render_board(&board));
        }
        Commands::Add {
            description,
            priority,
            deadline,
            ..
        } => {
            if let Some(description) = description {
                board.set_description(description);
            }
            if let Some(priority) = priority {
                board.set_priority(priority);
            }
            board.set_deadline(deadline);
            let task = board.submit_draft().await?;
            println!("Task added with ID {}", task.id);
            print!("{}", view::render_board(&board));
        }
        Commands::Toggle { id } => {
            let task = board.toggle_complete(&id).await?;
            let state = if task.completed { "completed" } else { "pending" };
            println!("Task {} is now {}", task.id, state);
            print!("{}", view::render_board(&board));
        }
        Commands::Delete { id } => {
            board.delete(&id).await?;
            println!("Task deleted");
            print!("{}", view::render_board(&board));
        }
        Commands::Stats => {
            print!("{}", view::render_stats(&board.stats()));
        }
    }

    Ok(())
}
