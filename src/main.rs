//! mdcompose - render JSON entry trees to Markdown

use std::fs;
use std::io::Read;
use std::process::ExitCode;

use clap::Parser;

use mdcompose::{render, Entry, Fence, RenderOptions};

#[derive(Parser)]
#[command(name = "mdcompose")]
#[command(version, about = "Render a JSON entry tree to Markdown", long_about = None)]
#[command(after_help = "EXAMPLES:
    mdcompose document.json             Render a JSON file
    echo '[{\"h1\":\"Hi\"}]' | mdcompose   Render from stdin
    mdcompose --bold-indicator _ doc.json")]
struct Cli {
    /// Input JSON file (reads stdin when absent or "-")
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Delimiter character for bold entries
    #[arg(long, value_name = "CHAR", default_value_t = '*')]
    bold_indicator: char,

    /// Delimiter character for italic entries
    #[arg(long, value_name = "CHAR", default_value_t = '*')]
    italic_indicator: char,

    /// Bullet character for unordered list items
    #[arg(long, value_name = "CHAR", default_value_t = '-')]
    bullet: char,

    /// Underline h1 headers instead of prefixing #
    #[arg(long)]
    underline_h1: bool,

    /// Underline h2 headers instead of prefixing ##
    #[arg(long)]
    underline_h2: bool,

    /// Fence code blocks by default ("`" or "~")
    #[arg(long, value_name = "CHAR")]
    fence: Option<char>,
}

fn main() -> ExitCode {
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
    let source = match cli.input.as_deref() {
        Some("-") | None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| e.to_string())?;
            buffer
        }
        Some(path) => fs::read_to_string(path).map_err(|e| e.to_string())?,
    };

    let entries: Vec<Entry> = serde_json::from_str(&source).map_err(|e| e.to_string())?;

    let fence = match cli.fence {
        Some('`') => Some(Fence::Backtick),
        Some('~') => Some(Fence::Tilde),
        Some(other) => return Err(format!("unsupported fence character: {other}")),
        None => None,
    };

    let options = RenderOptions {
        bold_indicator: cli.bold_indicator,
        italic_indicator: cli.italic_indicator,
        unordered_list_item_indicator: cli.bullet,
        use_h1_underlining: cli.underline_h1,
        use_h2_underlining: cli.underline_h2,
        use_codeblock_fencing: fence,
        ..RenderOptions::default()
    };

    let markdown = render(&entries, &options).map_err(|e| e.to_string())?;
    println!("{markdown}");
    Ok(())
}
