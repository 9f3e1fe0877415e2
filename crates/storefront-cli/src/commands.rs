//! Subcommand definitions.

use std::path::PathBuf;

use clap::Subcommand;

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List categories
    List {
        /// Only show categories whose name contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one category in detail
    Show {
        /// Category id
        id: String,
    },

    /// Create a category
    Create {
        /// Category name (3-50 characters)
        #[arg(short, long)]
        name: String,
        /// Subcategory, in display order (repeatable)
        #[arg(long = "sub")]
        subcategories: Vec<String>,
        /// Image file to upload, in order (repeatable, at least one)
        #[arg(long = "image", required = true)]
        images: Vec<PathBuf>,
    },

    /// Update a category
    Update {
        /// Category id
        id: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// Replacement subcategory list (repeatable); omit to keep the stored list
        #[arg(long = "sub")]
        subcategories: Vec<String>,
        /// Replacement image; omit to keep the stored images
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Delete a category
    Delete {
        /// Category id
        id: String,
    },

    /// Manage navbar entries
    Navbar {
        #[command(subcommand)]
        command: NavbarCommand,
    },
}

/// Navbar subcommands.
#[derive(Subcommand, Debug)]
pub enum NavbarCommand {
    /// Add a navbar entry copied from a category
    Add {
        /// Exact name of the category to copy
        #[arg(short, long)]
        category: String,
    },
}
