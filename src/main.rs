//! taskboard - In-Memory Task Tracking CLI
//!
//! A small driver around the taskboard library: builds a board, walks an
//! epic through its subtask lifecycle, and prints the resulting board and
//! view history. Nothing is persisted; every run starts clean.

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use taskboard::error::JsonError;
use taskboard::model::{Epic, Status, Subtask, Task, TaskEntry};
use taskboard::store::TaskStore;
use taskboard::Result;

#[derive(Parser)]
#[command(
    name = "taskboard",
    version,
    about = "In-memory task tracking demo: tasks, epics, subtasks, history"
)]
struct Cli {
    /// Emit the final board and history as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Board {
    tasks: Vec<Task>,
    epics: Vec<Epic>,
    subtasks: Vec<Subtask>,
    history: Vec<TaskEntry>,
}

fn main() {
    // Tracing is opt-in via RUST_LOG.
    // Keep startup robust in CI/robot envs: ignore invalid/huge filters.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() || raw.len() > 4096 {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        if cli.json {
            let json = JsonError::from(&err);
            match serde_json::to_string(&json) {
                Ok(line) => eprintln!("{line}"),
                Err(_) => eprintln!("{err}"),
            }
        } else {
            eprintln!("Error: {err}");
        }
        std::process::exit(err.exit_code());
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut store = TaskStore::new();

    let errand = store.create_task(Task::new(
        "Water the plants",
        "Balcony first, then the office shelf",
        Status::New,
    ));

    let epic = store.create_epic(Epic::new("Move apartments", "Everything for the move"));
    let pack = store.create_subtask(Subtask::new(
        "Pack boxes",
        "Books, kitchen, closet",
        Status::New,
        epic,
    ))?;
    let movers = store.create_subtask(Subtask::new(
        "Book movers",
        "Saturday morning slot",
        Status::New,
        epic,
    ))?;

    // Drive the epic through the status lattice via the update path.
    store.update_subtask(Subtask::with_id(
        pack,
        "Pack boxes",
        "Books, kitchen, closet",
        Status::Done,
        epic,
    ))?;
    store.update_subtask(Subtask::with_id(
        movers,
        "Book movers",
        "Saturday morning slot",
        Status::InProgress,
        epic,
    ))?;

    // View a few entities so the history has content.
    store.task_by_id(errand)?;
    store.subtask_by_id(movers)?;
    store.epic_by_id(epic)?;

    let mut board = Board {
        tasks: store.all_tasks(),
        epics: store.all_epics(),
        subtasks: store.all_subtasks(),
        history: store.history(),
    };
    board.tasks.sort_by_key(|task| task.id);
    board.epics.sort_by_key(Epic::id);
    board.subtasks.sort_by_key(Subtask::id);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&board)?);
        return Ok(());
    }

    println!("Tasks:");
    for task in &board.tasks {
        println!("  [{}] {} ({:?})", task.id, task.name, task.status);
    }
    println!("Epics:");
    for epic in &board.epics {
        println!(
            "  [{}] {} ({:?}, {} subtasks)",
            epic.id(),
            epic.task.name,
            epic.status(),
            epic.subtask_ids.len()
        );
    }
    println!("Subtasks:");
    for subtask in &board.subtasks {
        println!(
            "  [{}] {} ({:?}, epic {})",
            subtask.id(),
            subtask.task.name,
            subtask.status(),
            subtask.epic_id
        );
    }
    println!("History (oldest first):");
    for entry in &board.history {
        println!("  [{}] {:?} {}", entry.id(), entry.kind(), entry.name());
    }

    Ok(())
}
