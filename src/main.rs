use anyhow::{Context, Result};
use clap::Parser;
use pagewise::reader::{self, ReadStats};
use pagewise::{
    Command, DisplayState, NavKey, PaginationConfig, PaginationSession, PaginationSummary,
    WordsPerSection,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pagewise")]
#[command(about = "Paginate a plain-text document by word budget and page through it")]
#[command(version)]
struct Args {
    /// Plain-text UTF-8 document to paginate
    file: PathBuf,

    /// Target words per page (clamped to 100..=2000 unless --no-ceiling)
    #[arg(long, short = 'w', default_value_t = WordsPerSection::DEFAULT as i64, allow_negative_numbers = true)]
    words_per_section: i64,

    /// Accept budgets above 2000 words
    #[arg(long)]
    no_ceiling: bool,

    /// 1-based page to show first
    #[arg(long, default_value = "1")]
    page: String,

    /// Read navigation commands from stdin
    #[arg(long)]
    interactive: bool,

    /// Write pagination statistics as JSON to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

/// Contents of the --stats-out file
#[derive(Serialize, Debug)]
struct RunStats {
    read: ReadStats,
    pagination: PaginationSummary,
}

/// A line typed in interactive mode
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Command(Command),
    Help,
    Quit,
}

fn parse_input(line: &str) -> Option<Input> {
    let mut parts = line.split_whitespace();
    let verb = parts.next()?.to_ascii_lowercase();
    let argument = parts.collect::<Vec<_>>().join(" ");

    let input = match verb.as_str() {
        "n" | "next" => Input::Command(Command::Next),
        "p" | "prev" | "previous" => Input::Command(Command::Previous),
        "g" | "goto" | "jump" => Input::Command(Command::JumpTo(argument)),
        "w" | "words" => Input::Command(Command::SetWordsPerSection(argument)),
        "up" | "down" | "left" | "right" => Input::Command(Command::Key(NavKey::from_name(&verb))),
        "h" | "help" | "?" => Input::Help,
        "q" | "quit" | "exit" => Input::Quit,
        _ => return None,
    };
    Some(input)
}

fn render(display: &DisplayState) {
    if display.is_empty() {
        println!("(empty document)");
        println!("0 / 0");
        return;
    }
    let number = display.current_index.map_or(0, |index| index + 1);
    println!("── Page {}/{} · {} words ──", number, display.total_pages, display.word_count);
    println!("{}", display.content);
    println!(
        "── {} {} {} ──",
        if display.can_go_previous { "[p]rev" } else { "      " },
        display.page_label(),
        if display.can_go_next { "[n]ext" } else { "      " },
    );
}

fn print_help() {
    println!("n/next, p/prev, g N (jump to page N), w N (words per page),");
    println!("up/down/left/right (arrow keys), q/quit");
}

async fn write_stats(path: &Path, read: ReadStats, pagination: PaginationSummary) -> Result<()> {
    let stats = RunStats { read, pagination };
    let content = serde_json::to_string_pretty(&stats)?;
    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write stats to {}", path.display()))?;
    info!("Wrote stats to {}", path.display());
    Ok(())
}

async fn run_interactive(session: &mut PaginationSession) -> Result<()> {
    print_help();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            Some(Input::Command(command)) => {
                let outcome = session.dispatch(command);
                if let Some(notice) = outcome.notice {
                    println!("» {notice}");
                }
                render(&outcome.display);
            }
            Some(Input::Help) => print_help(),
            Some(Input::Quit) => break,
            None if line.trim().is_empty() => {}
            None => println!("» Unknown command: {}", line.trim()),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so page output on stdout stays clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter);
    if args.json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    info!(?args, "Parsed CLI arguments");

    let config = if args.no_ceiling {
        PaginationConfig::without_ceiling()
    } else {
        PaginationConfig::default()
    };
    let mut session = PaginationSession::new(config)?;
    if let Some(notice) = session.set_words_per_section(args.words_per_section) {
        println!("» {notice}");
    }

    let (text, read_stats) = reader::read_document(&args.file).await?;
    session.load_document(text);

    let file_name = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.display().to_string());
    println!("» {file_name} loaded");

    if let Some(stats_path) = &args.stats_out {
        write_stats(stats_path, read_stats, session.summary()).await?;
    }

    render(&session.jump_to(&args.page));

    if args.interactive {
        run_interactive(&mut session).await?;
    }

    Ok(())
}
