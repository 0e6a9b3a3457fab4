//! keyed-json CLI.
//!
//! Loads JSON documents into a hash-keyed store and reads them back through
//! the same accessors and coercions library users get.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use keyed_json::bridge::populate_from_slice;
use keyed_json::json::{append_key, coerce, to_json, Accessor, Limits, ValueStore};
use keyed_json::{ErrorCode, KeyHash, KeyHasher, KeyedResult, NameHasher};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kjson")]
#[command(about = "Inspect JSON documents through hashed property keys", long_about = None)]
#[command(version)]
struct Cli {
    /// Use lenient size limits when loading documents
    #[arg(long, global = true)]
    lenient: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information
    Version,

    /// Print the hashed key of each property name
    Key {
        /// Property names
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Read one property, optionally coerced
    Get {
        /// JSON document, or `-` for stdin
        file: PathBuf,
        /// Property name; use dots to descend into nested objects
        path: String,
        /// Coercion applied to the value
        #[arg(long = "as", value_enum, default_value_t = Coercion::Raw)]
        coercion: Coercion,
    },

    /// Render the named properties as a JSON object
    Render {
        /// JSON document, or `-` for stdin
        file: PathBuf,
        /// Property names (dotted paths allowed)
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Coercion {
    /// Debug JSON of the stored value
    Raw,
    /// Signed 64-bit integer
    Long,
    /// Arbitrary-precision integer
    Bigint,
    /// String, integers as 0x hex; prints nothing for null or missing
    #[value(name = "string")]
    Str,
    /// Array of plain-text strings; prints nothing for non-arrays
    Strings,
}

#[derive(Serialize)]
struct KeyReport<'a> {
    name: &'a str,
    key: KeyHash,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let limits = if cli.lenient {
        Limits::lenient()
    } else {
        Limits::strict()
    };

    match run(cli.command, limits) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Option<Commands>, limits: Limits) -> KeyedResult<()> {
    let hasher = NameHasher::initialize();

    match command {
        Some(Commands::Version) | None => {
            println!("kjson v{}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Key { names }) => {
            for name in &names {
                let report = KeyReport {
                    name,
                    key: hasher.hash(name),
                };
                let line = serde_json::to_string(&report)
                    .map_err(|e| ErrorCode::E120_InvalidJSON(e.to_string()))?;
                println!("{}", line);
            }
        }
        Some(Commands::Get {
            file,
            path,
            coercion,
        }) => {
            let store = load(&file, &hasher, limits)?;
            let value = Accessor::new(&store, &hasher).get_path(&path);
            let text = match coercion {
                Coercion::Raw => Some(to_json(value)),
                Coercion::Long => Some(coerce::as_long(value)?.to_string()),
                Coercion::Bigint => Some(coerce::as_big_integer(value)?.to_string()),
                Coercion::Str => coerce::as_string(value),
                Coercion::Strings => match coerce::as_string_array(value) {
                    Some(items) => Some(
                        serde_json::to_string(&items)
                            .map_err(|e| ErrorCode::E120_InvalidJSON(e.to_string()))?,
                    ),
                    None => None,
                },
            };
            // No value at all is an empty output, distinct from the string "null".
            if let Some(text) = text {
                println!("{}", text);
            }
        }
        Some(Commands::Render { file, names }) => {
            let store = load(&file, &hasher, limits)?;
            let accessor = Accessor::new(&store, &hasher);
            let mut out = String::from("{");
            for name in &names {
                append_key(&mut out, name, accessor.get_path(name));
            }
            // append_key leaves a comma after every field
            if out.ends_with(',') {
                out.pop();
            }
            out.push('}');
            println!("{}", out);
        }
    }
    Ok(())
}

fn load<H: KeyHasher>(file: &Path, hasher: &H, limits: Limits) -> KeyedResult<ValueStore> {
    let input = if file == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .map_err(|e| ErrorCode::E130_Io(e.to_string()))?;
        buf
    } else {
        fs::read(file).map_err(|e| ErrorCode::E130_Io(format!("{}: {}", file.display(), e)))?
    };
    debug!(bytes = input.len(), source = %file.display(), "loading document");
    populate_from_slice(&input, hasher, limits)
}
