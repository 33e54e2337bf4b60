use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "persist-kit")]
#[command(about = "Read, write and encode ML project artifacts")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding config.toml (defaults to the platform config dir)
    #[arg(long, global = true, env = "PERSIST_KIT_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a YAML or JSON document as JSON
    Show {
        path: PathBuf,
        /// Input format (inferred from the extension when omitted)
        #[arg(long, value_enum)]
        format: Option<DocumentFormat>,
        /// Dotted path of a single value to print
        #[arg(long)]
        key: Option<String>,
    },
    /// Convert a YAML document to JSON
    Convert { input: PathBuf, output: PathBuf },
    /// Create directories and any missing parents
    Mkdirs {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Print the size of a file in KB
    Size { path: PathBuf },
    /// Print a file as base64
    Encode { input: PathBuf },
    /// Decode base64 text from a file (or `-` for stdin) into a file
    Decode { input: String, output: PathBuf },
    /// Print the effective settings as TOML
    Settings {
        /// Also write them to the settings file
        #[arg(long)]
        save: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}
