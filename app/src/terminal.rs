//! Console side of the list view: prompt, confirmation and toasts.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use todo_core::{Interaction, Notification, Todo};

/// Line-oriented console. Commands and confirmation answers share one input
/// stream.
pub struct Terminal<R> {
    lines: Lines<R>,
}

impl Terminal<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin> Terminal<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }

    /// Prints `prompt` and waits for the next line; `None` at end of input.
    pub async fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        print!("{prompt}");
        std::io::stdout().flush()?;
        self.lines.next_line().await
    }
}

impl<R: AsyncBufRead + Unpin> Interaction for Terminal<R> {
    async fn confirm(&mut self, message: &str) -> bool {
        match self.read_line(&format!("{message} [y/N] ")).await {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "could not read confirmation");
                false
            }
        }
    }

    fn notify(&mut self, notification: Notification) {
        eprintln!("! {}  [{}]", notification.message, notification.action);
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub fn render(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return "no todos yet\n".to_string();
    }
    let mut out = String::new();
    for todo in todos {
        let mark = if todo.is_completed { 'x' } else { ' ' };
        out.push_str(&format!("[{mark}] {:>3}  {}", todo.id, todo.title));
        if let Some(description) = todo.description.as_deref().filter(|d| !d.is_empty()) {
            out.push_str(&format!(" - {description}"));
        }
        out.push_str(&format!("  ({})\n", todo.created_at.format("%Y-%m-%d %H:%M")));
    }
    out
}
