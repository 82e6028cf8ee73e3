use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::fs;
use std::io::{self, Read, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mindmap_outline::{render_mindmap, Indent, LeafOrder, Mindmap, RenderOptions};

fn cli() -> Command {
    Command::new("mindmap-outline")
        .about("Render a mindmap's leaf paths as an indented outline")
        .arg(
            Arg::new("input")
                .help("Mindmap JSON file ({\"title\": ..., \"leafs\": [{\"path\": ...}]}), or - for stdin")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("order")
                .long("order")
                .help("Order in which leaves are inserted; decides sibling order")
                .value_parser(["input", "id", "path", "path-desc"])
                .default_value("input"),
        )
        .arg(
            Arg::new("indent-spaces")
                .long("indent-spaces")
                .help("Indent with this many spaces per level instead of a tab")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("mark-terminal")
                .long("mark-terminal")
                .value_name("MARKER")
                .help("Append MARKER to branches that are also the end of a leaf path"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log tree construction to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn leaf_order(matches: &ArgMatches) -> LeafOrder {
    match matches.get_one::<String>("order").map(String::as_str) {
        Some("id") => LeafOrder::IdAscending,
        Some("path") => LeafOrder::PathAscending,
        Some("path-desc") => LeafOrder::PathDescending,
        _ => LeafOrder::Input,
    }
}

fn render_options(matches: &ArgMatches) -> RenderOptions {
    let mut options = RenderOptions::new();
    if let Some(width) = matches.get_one::<usize>("indent-spaces") {
        options = options.with_indent(Indent::Spaces(*width));
    }
    if let Some(marker) = matches.get_one::<String>("mark-terminal") {
        options = options.with_terminal_marker(marker.clone());
    }
    options
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read mindmap from stdin")?;
        Ok(content)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read mindmap file {}", input))
    }
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    let input = matches
        .get_one::<String>("input")
        .context("Missing input argument")?;

    let content = read_input(input)?;
    let mindmap = Mindmap::from_json(&content).with_context(|| format!("Invalid mindmap in {}", input))?;
    info!(title = %mindmap.title, leafs = mindmap.leafs.len(), "loaded mindmap");

    let outline = render_mindmap(&mindmap, leaf_order(&matches), &render_options(&matches))
        .with_context(|| format!("Failed to render mindmap {:?}", mindmap.title))?;

    io::stdout().write_all(outline.as_bytes())?;

    Ok(())
}
