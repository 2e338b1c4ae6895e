use std::net::SocketAddr;

use clap::Parser;

/// Command-line and environment configuration for the server binary.
#[derive(Parser, Debug, Clone)]
#[command(name = "todo-server")]
#[command(about = "CRUD REST backend for todo items")]
#[command(version)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long = "bind", env = "TODO_BIND_ADDR", default_value = "127.0.0.1:5257")]
    pub bind_addr: SocketAddr,

    /// SQLite connection string; an in-memory store is used when omitted
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_port_without_database() {
        let config = ServerConfig::try_parse_from(["todo-server"]).unwrap();
        // Both values may leak in from the environment running the tests.
        if std::env::var_os("TODO_BIND_ADDR").is_none() {
            assert_eq!(config.bind_addr, "127.0.0.1:5257".parse().unwrap());
        }
        if std::env::var_os("DATABASE_URL").is_none() {
            assert!(config.database_url.is_none());
        }
    }

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "todo-server",
            "--bind",
            "0.0.0.0:8080",
            "--database-url",
            "sqlite://todos.db",
        ])
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.database_url.as_deref(), Some("sqlite://todos.db"));
    }
}
