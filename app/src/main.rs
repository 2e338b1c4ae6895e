use clap::Parser;
use tracing_subscriber::EnvFilter;

use todo_core::{
    HttpTodoService, Interaction, OperationStatus, ReqwestTransport, TodoClient,
    TodoListController, TodoService,
};

mod command;
mod terminal;

use command::{Command, HELP};
use terminal::{render, Terminal};

#[derive(Parser, Debug)]
#[command(name = "todo-app")]
#[command(about = "Terminal front end for the todo service")]
#[command(version)]
struct Cli {
    /// Base URL of the todo API
    #[arg(long, env = "TODO_API_URL", default_value = "http://localhost:5257")]
    api_url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let service = HttpTodoService::new(TodoClient::new(&cli.api_url), ReqwestTransport::new());
    let mut controller = TodoListController::new(service, Terminal::stdin());

    if controller.load().await == OperationStatus::Success {
        print!("{}", render(controller.todos()));
    }
    println!("type `help` for commands");

    while let Some(line) = controller.interaction_mut().read_line("> ").await? {
        match Command::parse(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => execute(&mut controller, command).await,
            Err(e) => eprintln!("{e}"),
        }
    }
    Ok(())
}

async fn execute<S: TodoService, I: Interaction>(
    controller: &mut TodoListController<S, I>,
    command: Command,
) {
    let status = match command {
        Command::List => controller.load().await,
        Command::Add { title, description } => {
            controller.new_title = title;
            controller.new_description = description;
            controller.add().await
        }
        Command::Toggle(id) | Command::Delete(id)
            if !controller.todos().iter().any(|t| t.id == id) =>
        {
            eprintln!("no todo with id {id}");
            return;
        }
        Command::Toggle(id) => controller.toggle(id).await,
        Command::Delete(id) => controller.delete(id).await,
        Command::Help => {
            println!("{HELP}");
            return;
        }
        Command::Quit => return,
    };

    if status == OperationStatus::Success {
        print!("{}", render(controller.todos()));
    }
}
