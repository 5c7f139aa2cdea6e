//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `list` | Query the index (`--obsoleted-by`, `--std`, `--category`, ...) |
//! | `get <n>` | Print an RFC body (`--as txt\|ps\|pdf`) |
//! | `cache status` / `cache clear` | Inspect or empty the local cache |
//!
//! ## Output Formats
//!
//! All commands support the `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! `get` always writes the raw document bytes.
//!
//! ## Logging
//!
//! Logs go to stderr. Use `-v` (repeatable) or `RUST_LOG` for more detail:
//! ```bash
//! rfcs -vv list --std 5
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod cache_cmd;
mod get;
mod list;
mod output;

pub use app::{run, Cli, Commands};
pub use list::{render, ListArgs, DEFAULT_TEMPLATE};
pub use output::{is_broken_pipe, Output};
