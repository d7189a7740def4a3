//! Command-line front end: decode shared links, print games, convert
//! between the link and SGF record formats.

mod render;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;

use hexreplay_core::{GridBoard, History};
use hexreplay_link::{decode, encode};
use hexreplay_sgf::{parse_record, write_record};

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect and convert hexreplay game links")]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a shared link and print the move list and board
    Show {
        /// Link fragment, with or without the leading '#'
        link: String,

        /// Machine-readable output
        #[arg(long)]
        json: bool,
    },
    /// Convert a shared link to an SGF record on stdout
    Sgf {
        /// Link fragment
        link: String,
    },
    /// Convert an SGF record to a shared link ('-' reads stdin)
    Link {
        /// Record file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .init();

    match args.command {
        Command::Show { link, json } => {
            let history = decode(&link);
            log::debug!("decoded {} of {} moves played", history.cursor(), history.log().len());
            show(&history, json)
        }
        Command::Sgf { link } => {
            println!("{}", write_record(&decode(&link)));
            Ok(())
        }
        Command::Link { input } => {
            let text = read_input(&input)?;
            let history = parse_record(&text)
                .context("unreadable game record")?
                .replay()
                .context("record does not replay to a legal game")?;
            println!("{}", encode(&history));
            Ok(())
        }
    }
}

fn show(history: &History<GridBoard>, json: bool) -> Result<()> {
    if json {
        let value = json!({
            "link": encode(history),
            "size": history.size().to_string(),
            "cursor": history.cursor(),
            "moves": history.log(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }
    for line in render::history_lines(history) {
        println!("{line}");
    }
    println!();
    for line in render::board_lines(history.view()) {
        println!("{line}");
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading record from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}
