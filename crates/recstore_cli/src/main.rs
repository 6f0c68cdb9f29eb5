//! recstore CLI
//!
//! Loads a record file into an in-memory store, runs one operation and
//! prints the result.
//!
//! # Commands
//!
//! - `list` - Print every record in order
//! - `get` - Print the record with a given identifier
//! - `search` - Print records matching FIELD=VALUE
//! - `insert` / `update` - Add or replace a record given as JSON
//! - `remove` - Remove records matching FIELD=VALUE
//! - `count` - Print the number of records

mod commands;
mod io;
mod render;

use clap::{Parser, Subcommand};
use recstore_core::{RecordStore, RemovePolicy, StoreConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Query and edit record files through an in-memory record store.
#[derive(Parser)]
#[command(name = "recstore")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Record file (JSON array, or CBOR when the extension is .cbor)
    #[arg(global = true, short, long)]
    file: Option<PathBuf>,

    /// Field that identifies a record
    #[arg(global = true, long, default_value = "id")]
    id_field: String,

    /// Permit records that share an identifier
    #[arg(global = true, long)]
    allow_duplicates: bool,

    /// Which matches `remove` deletes (last, first, all)
    #[arg(global = true, long, default_value = "last")]
    remove_policy: String,

    /// Output format (text, json)
    #[arg(global = true, long, default_value = "text")]
    format: String,

    /// Write the store back to the record file after a change
    #[arg(global = true, short, long)]
    save: bool,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every record in insertion order
    List,

    /// Print the record with the given identifier
    Get {
        /// Identifier value (integers, true/false/null, or text)
        id: String,
    },

    /// Print records matching FIELD=VALUE
    Search {
        /// Criteria as FIELD=VALUE
        criteria: String,
    },

    /// Append a record given as a JSON object
    Insert {
        /// Record as JSON
        record: String,
    },

    /// Replace records sharing the identifier of a JSON object
    Update {
        /// Record as JSON
        record: String,
    },

    /// Remove records matching FIELD=VALUE
    Remove {
        /// Criteria as FIELD=VALUE
        criteria: String,
    },

    /// Print the number of records
    Count,

    /// Show version information
    Version,
}

impl Commands {
    fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Insert { .. } | Self::Update { .. } | Self::Remove { .. }
        )
    }
}

impl Cli {
    /// Maps the store flags onto a [`StoreConfig`].
    fn store_config(&self) -> Result<StoreConfig, Box<dyn std::error::Error>> {
        let config = StoreConfig::new()
            .identifier_field(self.id_field.as_str())
            .unique_identifiers(!self.allow_duplicates)
            .remove_policy(self.remove_policy.parse::<RemovePolicy>()?);
        config.validate()?;
        Ok(config)
    }
}

/// Runs one command and returns its output.
///
/// With `--save`, a mutating command writes the store back to `--file`.
fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    if let Commands::Version = cli.command {
        return Ok(format!(
            "recstore CLI v{}\nrecstore core v{}",
            env!("CARGO_PKG_VERSION"),
            recstore_core::VERSION
        ));
    }

    let save_to = match (&cli.file, cli.save && cli.command.mutates()) {
        (Some(path), true) => Some(path),
        (None, true) => return Err("--save requires --file".into()),
        (_, false) => None,
    };

    let config = cli.store_config()?;
    let mut store = match &cli.file {
        Some(path) => RecordStore::with_records(config, io::load_records(path)?)?,
        None => RecordStore::new(config)?,
    };

    let output = match &cli.command {
        Commands::List => commands::query::list(&store, &cli.format)?,
        Commands::Get { id } => commands::query::get(&store, id, &cli.format)?,
        Commands::Search { criteria } => commands::query::search(&store, criteria, &cli.format)?,
        Commands::Count => commands::query::count(&store),
        Commands::Insert { record } => commands::mutate::insert(&mut store, record)?,
        Commands::Update { record } => commands::mutate::update(&mut store, record)?,
        Commands::Remove { criteria } => {
            commands::mutate::remove(&mut store, criteria, &cli.format)?
        }
        Commands::Version => String::new(),
    };

    if let Some(path) = save_to {
        io::save_records(path, store.records())?;
    }

    Ok(output)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let output = run(&cli)?;
    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use recstore_testkit::fixtures::{customers, RecordFile, CUSTOMER_ID};
    use std::fs;

    /// Parses `args` against a customer file keyed on [`CUSTOMER_ID`].
    fn cli(file: &RecordFile, args: &[&str]) -> Cli {
        let path = file.path().to_string_lossy().into_owned();
        let mut argv = vec!["recstore", "--file", path.as_str(), "--id-field", CUSTOMER_ID];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn flags_map_onto_store_config() {
        let parsed = Cli::try_parse_from([
            "recstore",
            "--id-field",
            "CustomerId",
            "--allow-duplicates",
            "--remove-policy",
            "all",
            "count",
        ])
        .unwrap();
        let config = parsed.store_config().unwrap();

        assert_eq!(config.identifier_field, "CustomerId");
        assert!(!config.unique_identifiers);
        assert_eq!(config.remove_policy, RemovePolicy::AllMatches);

        let defaults = Cli::try_parse_from(["recstore", "count"]).unwrap();
        assert_eq!(defaults.store_config().unwrap(), StoreConfig::default());
    }

    #[test]
    fn bad_remove_policy_fails() {
        let parsed = Cli::try_parse_from(["recstore", "--remove-policy", "middle", "list"]).unwrap();
        let err = run(&parsed).unwrap_err();
        assert!(err.to_string().contains("unknown remove policy"));
    }

    #[test]
    fn id_field_selects_lookup_key() {
        let file = RecordFile::json(&customers());
        let output = run(&cli(&file, &["get", "1002"])).unwrap();
        assert!(output.starts_with("CustomerId=1002 FirstName=Ritesh"));

        let path = file.path().to_string_lossy().into_owned();
        let keyed_on_id = Cli::try_parse_from(["recstore", "--file", path.as_str(), "get", "1002"]).unwrap();
        let err = run(&keyed_on_id).unwrap_err();
        assert!(err.to_string().contains("missing identifier"));
    }

    #[test]
    fn allow_duplicates_admits_shared_identifier() {
        let file = RecordFile::json(&customers());
        let insert = r#"{"CustomerId": 1001, "FirstName": "Twin"}"#;

        assert!(run(&cli(&file, &["insert", insert])).is_err());
        let output = run(&cli(&file, &["--allow-duplicates", "insert", insert])).unwrap();
        assert_eq!(output, "inserted 1 record");
    }

    #[test]
    fn save_writes_back_after_mutation() {
        let file = RecordFile::json(&customers());
        let before = fs::read_to_string(file.path()).unwrap();

        let insert = r#"{"CustomerId": 1004, "FirstName": "Manisha"}"#;
        run(&cli(&file, &["--save", "insert", insert])).unwrap();

        assert_ne!(fs::read_to_string(file.path()).unwrap(), before);
        let count = run(&cli(&file, &["count"])).unwrap();
        assert_eq!(count, "4");
    }

    #[test]
    fn save_leaves_file_alone_for_queries() {
        let file = RecordFile::cbor(&customers());
        let before = fs::read(file.path()).unwrap();

        run(&cli(&file, &["--save", "list"])).unwrap();

        assert_eq!(fs::read(file.path()).unwrap(), before);
    }

    #[test]
    fn mutation_without_save_leaves_file_alone() {
        let file = RecordFile::json(&customers());
        let before = fs::read_to_string(file.path()).unwrap();

        let removed = run(&cli(&file, &["remove", "FirstName=Ritesh"])).unwrap();

        assert!(removed.contains("FirstName=Ritesh"));
        assert_eq!(fs::read_to_string(file.path()).unwrap(), before);
    }

    #[test]
    fn save_requires_file() {
        let parsed = Cli::try_parse_from(["recstore", "--save", "insert", r#"{"id": 1}"#]).unwrap();
        let err = run(&parsed).unwrap_err();
        assert_eq!(err.to_string(), "--save requires --file");

        let parsed = Cli::try_parse_from(["recstore", "--save", "count"]).unwrap();
        assert_eq!(run(&parsed).unwrap(), "0");
    }

    #[test]
    fn version_needs_no_store() {
        let parsed = Cli::try_parse_from(["recstore", "version"]).unwrap();
        assert!(run(&parsed).unwrap().starts_with("recstore CLI v"));
    }
}
