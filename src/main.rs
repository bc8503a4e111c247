use clap::{Parser, Subcommand};
use taskdeck::config::Config;
use taskdeck::models::{Task, TaskFilter, TaskInput, TaskStats, TaskStatus};
use taskdeck::tasks::TasksApi;
use taskdeck::{ApiClient, AppError, SessionStore, SessionStorage};

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(about = "Terminal client for the taskdeck to-do service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and log in
    Register {
        name: String,
        email: String,
        password: String,
    },
    /// Log in with an existing account
    Login { email: String, password: String },
    /// Forget the cached session
    Logout,
    /// Show who is currently logged in
    Whoami,
    /// Change the display name of the logged-in user
    Profile { name: String },
    /// List tasks, optionally filtered
    List {
        /// Only show tasks with this status (pending, in-progress, completed)
        #[arg(long)]
        status: Option<TaskStatus>,
        /// Only show tasks whose title or description contains this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Create a task
    Add {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "pending")]
        status: TaskStatus,
    },
    /// Edit a task's fields
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<TaskStatus>,
    },
    /// Mark a task completed
    Done { id: String },
    /// Delete a task
    Rm { id: String },
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("error: {}", err.user_message());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::from_env();
    let storage = SessionStorage::new(config.session_file.clone());
    let api = ApiClient::new(config.api_base_url.clone(), storage.clone());
    let mut store = SessionStore::new(api.clone(), storage);
    store.restore();

    match cli.command {
        Commands::Register {
            name,
            email,
            password,
        } => {
            let session = store.register(&name, &email, &password).await?;
            println!("Registered and logged in as {} <{}>", session.name, session.email);
        }
        Commands::Login { email, password } => {
            let session = store.login(&email, &password).await?;
            println!("Logged in as {} <{}>", session.name, session.email);
        }
        Commands::Logout => {
            store.logout();
            println!("Logged out");
        }
        Commands::Whoami => match store.current() {
            Some(session) => println!("{} <{}> (id {})", session.name, session.email, session.id),
            None => println!("Not logged in"),
        },
        Commands::Profile { name } => {
            let session = store.update_profile(&name).await?;
            println!("Display name is now {}", session.name);
        }
        Commands::List { status, search } => {
            let tasks = TasksApi::new(api).list().await?;
            let filter = TaskFilter { status, search };
            let shown = filter.apply(&tasks);
            for task in &shown {
                print_task(task);
            }
            let stats = TaskStats::of(&tasks);
            println!(
                "{} shown / {} total ({} pending, {} in-progress, {} completed)",
                shown.len(),
                stats.total,
                stats.pending,
                stats.in_progress,
                stats.completed
            );
        }
        Commands::Add {
            title,
            description,
            status,
        } => {
            let input = TaskInput {
                title,
                description,
                status,
            };
            let task = TasksApi::new(api).create(&input).await?;
            println!("Created task {}", task.id);
        }
        Commands::Edit {
            id,
            title,
            description,
            status,
        } => {
            let tasks_api = TasksApi::new(api);
            let current = find_task(&tasks_api, &id).await?;
            let input = TaskInput {
                title: title.unwrap_or(current.title),
                description: description.unwrap_or(current.description),
                status: status.unwrap_or(current.status),
            };
            let task = tasks_api.update(&id, &input).await?;
            println!("Updated task {}", task.id);
        }
        Commands::Done { id } => {
            let tasks_api = TasksApi::new(api);
            let current = find_task(&tasks_api, &id).await?;
            let input = TaskInput {
                title: current.title,
                description: current.description,
                status: TaskStatus::Completed,
            };
            tasks_api.update(&id, &input).await?;
            println!("Marked task {} completed", id);
        }
        Commands::Rm { id } => {
            TasksApi::new(api).delete(&id).await?;
            println!("Deleted task {}", id);
        }
    }

    Ok(())
}

/// The edit-style commands need the task's current fields, since the update
/// route replaces the whole record.
async fn find_task(tasks_api: &TasksApi, id: &str) -> Result<Task, AppError> {
    let tasks = tasks_api.list().await?;
    tasks
        .into_iter()
        .find(|t| t.id == id)
        .ok_or_else(|| AppError::Api {
            status: 404,
            message: format!("No task with id {}", id),
        })
}

fn print_task(task: &Task) {
    let description = if task.description.is_empty() {
        String::new()
    } else {
        format!(" - {}", task.description)
    };
    println!("[{}] {} {}{}", task.status, task.id, task.title, description);
}
