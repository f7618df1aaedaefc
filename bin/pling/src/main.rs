//! `pling` — CLI client for the pling server.
//!
//! Seeds documents through the admin API and emits synthetic like events
//! against the hook. Meant for local development and self-host ops.

mod commands;

use clap::{Parser, Subcommand};

/// Pling CLI tool.
#[derive(Parser, Debug)]
#[command(name = "pling", about = "pling CLI client")]
struct Cli {
    /// Server URL.
    #[arg(
        long = "server",
        global = true,
        default_value = "http://127.0.0.1:8080"
    )]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Seed a document into the store.
    Seed {
        #[command(subcommand)]
        what: SeedWhat,
    },

    /// Emit a like-creation event to the hook.
    Emit {
        /// Like id (default: random).
        #[arg(long = "like")]
        like_id: Option<String>,

        /// Liked post id.
        #[arg(long = "post")]
        post_id: String,

        /// Liking user id.
        #[arg(long = "user")]
        user_id: String,
    },

    /// Check server status.
    Status,

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum SeedWhat {
    /// Seed a user document.
    User {
        /// User id.
        id: String,

        /// Profile name shown in notifications.
        #[arg(long)]
        username: Option<String>,

        /// Device registration token.
        #[arg(long)]
        token: Option<String>,
    },

    /// Seed a post document.
    Post {
        /// Post id.
        id: String,

        /// Owning user id.
        #[arg(long)]
        owner: String,
    },

    /// Seed a like document. This only stores it — use `emit` to fire
    /// the notification hook.
    Like {
        /// Like id (default: random).
        id: Option<String>,

        /// Liked post id.
        #[arg(long)]
        post: String,

        /// Liking user id.
        #[arg(long)]
        user: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Seed { what } => match what {
            SeedWhat::User {
                id,
                username,
                token,
            } => {
                commands::seed::user(&cli.server, &id, username.as_deref(), token.as_deref())?;
            }
            SeedWhat::Post { id, owner } => {
                commands::seed::post(&cli.server, &id, &owner)?;
            }
            SeedWhat::Like { id, post, user } => {
                let id = id.unwrap_or_else(pling_core::new_id);
                commands::seed::like(&cli.server, &id, &post, &user)?;
            }
        },

        Commands::Emit {
            like_id,
            post_id,
            user_id,
        } => {
            let like_id = like_id.unwrap_or_else(pling_core::new_id);
            commands::emit::emit(&cli.server, &like_id, &post_id, &user_id)?;
        }

        Commands::Status => {
            commands::status::status(&cli.server)?;
        }

        Commands::Version => {
            println!("pling cli v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
