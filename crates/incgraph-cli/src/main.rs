//! incgraph CLI entry point

use anyhow::{bail, Context};
use clap::{ArgAction, Parser};
use incgraph::export::{export_dot, export_json};
use incgraph_c::{build_graph, ResolveError, Resolver, ScanConfig};
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "incgraph", version)]
#[command(about = "Show the include tree for a C or C++ file", long_about = None)]
struct Cli {
    /// File to start from, as a base name or a path
    #[arg(required_unless_present_any = ["json", "dot"])]
    file: Option<String>,

    /// Follow includes backwards: list the files that include FILE
    #[arg(short, long)]
    reverse: bool,

    /// Print the include chain from FILE to TO
    #[arg(short, long, value_name = "TO")]
    includes: Option<String>,

    /// Only list the files FILE includes directly
    #[arg(short, long)]
    norecurse: bool,

    /// Print the whole include graph as JSON
    #[arg(long, conflicts_with = "dot")]
    json: bool,

    /// Print the whole include graph in Graphviz DOT format
    #[arg(long)]
    dot: bool,

    /// Directory to scan
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Extensions to scan, replacing the configured ones (e.g. --ext c,h,inc)
    #[arg(long = "ext", value_name = "EXT", value_delimiter = ',')]
    extensions: Vec<String>,

    /// Directory name to skip while scanning (repeatable)
    #[arg(long, value_name = "NAME")]
    exclude: Vec<String>,

    /// Follow symbolic links while scanning
    #[arg(long)]
    follow_links: bool,

    /// Load scan settings from a JSON file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Scan settings: the config file (or defaults) overridden by flags.
    fn scan_config(&self) -> Result<ScanConfig, ResolveError> {
        let mut config = match &self.config {
            Some(path) => ScanConfig::from_json_file(path)?,
            None => ScanConfig::default(),
        };

        if !self.extensions.is_empty() {
            config = config.with_extensions(self.extensions.iter().cloned());
        }
        for dir in &self.exclude {
            config = config.with_excluded_dir(dir.clone());
        }
        if self.follow_links {
            config = config.with_follow_links(true);
        }

        config.validate()?;
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries the results
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let config = cli.scan_config()?;
    let graph = build_graph(&cli.root, &config, cli.reverse)
        .with_context(|| format!("failed to scan {}", cli.root.display()))?;

    if cli.json {
        writeln!(out, "{}", export_json(&graph)?)?;
        return Ok(());
    }
    if cli.dot {
        write!(out, "{}", export_dot(&graph))?;
        return Ok(());
    }

    let Some(file) = cli.file.as_deref() else {
        bail!("no file given");
    };

    // Direction is already baked into the graph
    let resolver = Resolver::from_graph(graph);
    let names = match (&cli.includes, cli.norecurse) {
        (Some(to), _) => resolver.resolve_path(file, to)?,
        (None, true) => resolver.resolve_direct(file)?,
        (None, false) => resolver.resolve_transitive(file, false)?,
    };

    for name in names {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    info!("incgraph v{}", env!("CARGO_PKG_VERSION"));
    info!("Scanning {}", cli.root.display());

    let stdout = io::stdout();
    run(&cli, &mut stdout.lock())
}
