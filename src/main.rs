//! navtree - Print the navigation tree of a nav fragment

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use navtree::{Header, NavConfig, NavigationNode, parse_html_bytes};

#[derive(Parser)]
#[command(name = "navtree")]
#[command(version, about = "Parse a nav fragment into a navigation tree", long_about = None)]
#[command(after_help = "EXAMPLES:
    navtree nav.plain.html                 Print the header as JSON
    navtree -f outline nav.plain.html      Print the navigation as an outline
    curl -s $SITE/nav.plain.html | navtree --base $SITE -")]
struct Cli {
    /// Input HTML file, or `-` for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// TOML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// CSS selector for the navigation container
    #[arg(short, long, value_name = "CSS")]
    selector: Option<String>,

    /// Base URL for resolving hrefs
    #[arg(long, value_name = "URL")]
    base: Option<String>,

    /// Inline icons loaded from this directory
    #[arg(long, value_name = "DIR")]
    icons: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Suppress the summary on stderr
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Outline,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let config = load_config(cli)?;
    let html = read_input(&cli.input).map_err(|e| format!("{}: {e}", cli.input))?;

    let dom = parse_html_bytes(&html);
    let mut header = Header::from_dom(&dom, &config).map_err(|e| e.to_string())?;
    let report = header.enrich_icons(&config);

    match cli.format {
        Format::Json => {
            let json = serde_json::to_string_pretty(&header).map_err(|e| e.to_string())?;
            println!("{json}");
        }
        Format::Outline => print!("{}", outline(header.forest())),
    }

    if !cli.quiet {
        let nodes = navtree::model::walk_forest(header.forest()).count();
        eprintln!(
            "{}: {} top-level items, {} nodes",
            cli.input,
            header.navigation.len(),
            nodes
        );
        if let Some(report) = report {
            eprintln!(
                "icons: {} inlined, {} failed, {} timed out",
                report.resolved, report.failed, report.timed_out
            );
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<NavConfig, String> {
    let mut config = match &cli.config {
        Some(path) => NavConfig::load_from_path(path)
            .map_err(|e| e.to_string())?
            .ok_or_else(|| format!("config file not found: {}", path.display()))?,
        None => NavConfig::default(),
    };

    if let Some(selector) = &cli.selector {
        config.sections_selector = Some(selector.clone());
    }
    if let Some(base) = &cli.base {
        config.base_url = Some(base.clone());
    }
    if let Some(icons) = &cli.icons {
        config.icons.root = Some(icons.clone());
    }

    Ok(config)
}

fn read_input(input: &str) -> navtree::Result<Vec<u8>> {
    if input == "-" {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read(input)?)
    }
}

fn outline(forest: &[NavigationNode]) -> String {
    let mut out = String::new();
    for node in navtree::model::walk_forest(forest) {
        let indent = "  ".repeat(usize::from(node.level.saturating_sub(1)));
        out.push_str(&indent);
        out.push_str(&node.text);
        if node.has_link {
            out.push_str(" -> ");
            out.push_str(&node.href);
        }
        out.push('\n');

        if let Some(description) = &node.description {
            out.push_str(&format!("{indent}  | {description}\n"));
        }
        if let Some(link) = &node.overview_link {
            out.push_str(&format!("{indent}  * {} -> {}\n", link.text, link.href));
        }
    }
    out
}
