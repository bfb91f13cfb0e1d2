//! CLI Module
//!
//! Command-line front end for the roster store. It plays the rendering
//! collaborator: forwards user intents into the store, obtains the
//! confirmations that gate delete and reset, and prints whatever state
//! the store produces afterwards.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rosterly - student roster manager
#[derive(Parser, Debug)]
#[command(name = "rosterly")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Snapshot file holding the persisted roster
    #[arg(short, long, global = true, default_value = "roster.json")]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List students, optionally searched and filtered
    List {
        /// Case-insensitive substring to search names for
        #[arg(short, long)]
        search: Option<String>,

        /// Show only students in this class
        #[arg(short, long)]
        class: Option<String>,
    },

    /// Add a new student
    Add {
        /// Full name
        #[arg(long)]
        name: String,

        /// Class label
        #[arg(long)]
        class: String,

        /// Age in years
        #[arg(long)]
        age: String,
    },

    /// Edit an existing student
    Edit {
        /// Id of the student to edit
        id: u32,

        /// New name (unchanged when omitted)
        #[arg(long)]
        name: Option<String>,

        /// New class label (unchanged when omitted)
        #[arg(long)]
        class: Option<String>,

        /// New age (unchanged when omitted)
        #[arg(long)]
        age: Option<String>,
    },

    /// Delete a student (asks for confirmation)
    Delete {
        /// Id of the student to delete
        id: u32,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the distinct class labels present in the roster
    Classes,

    /// Discard all changes and restore the sample roster (asks for confirmation)
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
