use clap::{Parser, Subcommand};
use roster::query::SortKey;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Command-line student roster manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new student
    #[command(alias = "a")]
    Add {
        /// Student name (at least 2 characters, unique)
        name: String,

        /// Student age (5 to 100)
        age: u32,

        /// Class the student belongs to
        class: String,

        /// Interests (at least 3 characters)
        interests: String,
    },

    /// Update an existing student by id
    #[command(alias = "e")]
    Update {
        /// Id of the student to update
        id: u64,

        /// New name
        name: String,

        /// New age
        age: u32,

        /// New class
        class: String,

        /// New interests
        interests: String,
    },

    /// Delete a student by id
    #[command(alias = "rm")]
    Delete {
        /// Id of the student to delete
        id: u64,
    },

    /// List students, optionally filtered and sorted
    #[command(alias = "ls")]
    List {
        /// Search term matched against name, class, and interests
        #[arg(short, long)]
        search: Option<String>,

        /// Sort key
        #[arg(long, value_enum, default_value = "none")]
        sort: SortKey,
    },

    /// Show one student in full
    #[command(alias = "v")]
    Show {
        /// Id of the student to show
        id: u64,
    },

    /// Export the roster as pretty-printed JSON
    Export {
        /// Write to this path instead of the dated default filename
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Delete ALL student data
    Clear {
        /// Skip the confirmation requirement
        #[arg(long)]
        yes: bool,
    },
}
