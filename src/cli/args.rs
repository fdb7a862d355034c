// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL, overrides config and NOTES_API_URL
    #[arg(long, value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Directory for the local cache (optional)
    #[arg(long, value_name = "DIR", global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Note fields shared by `add` and `edit`
#[derive(clap::Args, Debug, Clone, Default, PartialEq)]
pub struct NoteFields {
    /// Note title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Note content (truncated to the configured limit)
    #[arg(long)]
    pub content: Option<String>,

    /// Free-text tag, e.g. Study, Work, Personal
    #[arg(long)]
    pub tag: Option<String>,

    /// Reminder as local date-time, e.g. 2025-01-31T09:30
    #[arg(long, value_name = "DATETIME")]
    pub reminder: Option<String>,

    /// Display color as hex, e.g. #ffeeaa
    #[arg(long)]
    pub color: Option<String>,

    /// Image file to upload and attach
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start a session
    Login {
        #[arg(value_name = "USER")]
        user: String,
        #[arg(value_name = "PASSWORD")]
        password: String,
    },

    /// End the current session
    Logout,

    /// Show session, backend and cache information
    Status,

    /// List notes, optionally filtered and sorted
    List {
        /// Case-insensitive term matched against title, content and tag
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        /// Sort mode: newest, oldest or pinned
        #[arg(short, long, default_value = "newest")]
        sort: String,

        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single note
    Show {
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },

    /// Create a note; missing title/content come from the saved draft
    Add {
        #[command(flatten)]
        fields: NoteFields,
    },

    /// Replace a note, starting from its current fields
    Edit {
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        #[command(flatten)]
        fields: NoteFields,
    },

    /// Delete a note
    Delete {
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// Confirm the deletion
        #[arg(short, long)]
        yes: bool,
    },

    /// Toggle the pinned flag of a note
    Pin {
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },

    /// Show the draft, updating it when values are given
    Draft {
        #[arg(short, long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,
    },
}
