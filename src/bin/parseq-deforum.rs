use std::{
    io::{Read as _, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "parseq-deforum", version)]
struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve Deforum camera movement for one frame of a Parseq payload.
    Resolve(ResolveArgs),
    /// Print the node registration table.
    Nodes(NodesArgs),
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Input Parseq JSON (`-` reads stdin).
    #[arg(long = "in", default_value = "-")]
    in_path: PathBuf,

    /// Target frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Pretty-print the output JSON.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct NodesArgs {
    /// Pretty-print the output JSON.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Resolve(args) => cmd_resolve(args),
        Command::Nodes(args) => cmd_nodes(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_payload(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut s = String::new();
        std::io::stdin()
            .read_to_string(&mut s)
            .context("read payload from stdin")?;
        return Ok(s);
    }
    std::fs::read_to_string(path).with_context(|| format!("read payload '{}'", path.display()))
}

fn write_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let s = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    let mut out = std::io::stdout().lock();
    writeln!(out, "{s}").context("write output")?;
    Ok(())
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let payload = read_payload(&args.in_path)?;
    let out = parseq_deforum::resolve(&payload, parseq_deforum::FrameIndex(args.frame));
    if let Some(err) = out.error() {
        tracing::warn!(frame = args.frame, "{err}");
    }
    write_json(&out, args.pretty)
}

fn cmd_nodes(args: NodesArgs) -> anyhow::Result<()> {
    write_json(&parseq_deforum::registration_table(), args.pretty)
}
