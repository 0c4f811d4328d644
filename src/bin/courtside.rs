use std::env;
use std::error::Error;
use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail};
use clap::{Parser, Subcommand};
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use courtside::export::{history_rows, write_csv};
use courtside::print;
use courtside::roster::Roster;

#[derive(Debug, Parser, Clone)]
#[command(name = "courtside", about = "Basketball stat tallies and derived metrics")]
struct Args {
    /// roster data file
    #[arg(short = 'f', long, env = "COURTSIDE_DATA", default_value = "courtside.json")]
    file: PathBuf,

    /// print reports as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.file.as_os_str().is_empty() {
            bail!("data file must be specified");
        }
        if self.file.is_dir() {
            bail!("data file {} is a directory", self.file.display());
        }
        if let Command::Record { events, .. } = &self.command {
            if events.is_empty() {
                bail!("at least one event must be specified");
            }
        }
        Ok(())
    }
}

#[derive(Debug, Subcommand, Clone)]
enum Command {
    /// add a player with empty tallies
    Add { name: String },

    /// remove a player and their tallies
    Remove { name: String },

    /// rename a player, keeping their tallies
    Rename { old: String, new: String },

    /// record one or more events, e.g. shot:3pt:made:contested, assist, cut:pass
    Record { name: String, events: Vec<String> },

    /// revert the player's most recent event
    Undo { name: String },

    /// overwrite the assists, turnovers or rebounds total
    Edit {
        name: String,
        stat: String,
        value: String,
    },

    /// show a single player's metrics
    Player { name: String },

    /// show the team report
    Report,

    /// export the roster as CSV
    Export {
        /// output file; stdout if omitted
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },

    /// show or export a player's event history
    History {
        name: String,

        /// CSV output file; a table is printed if omitted
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },

    /// replace the roster with the contents of another data file
    Restore { file: PathBuf },
}
impl Command {
    fn mutates(&self) -> bool {
        matches!(
            self,
            Command::Add { .. }
                | Command::Remove { .. }
                | Command::Rename { .. }
                | Command::Record { .. }
                | Command::Undo { .. }
                | Command::Edit { .. }
                | Command::Restore { .. }
        )
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let mut roster = open_roster(&args.file)?;
    run(&args, &mut roster)?;
    if args.command.mutates() {
        roster.save(&args.file)?;
    }
    Ok(())
}

fn open_roster(path: &Path) -> anyhow::Result<Roster> {
    if path.exists() {
        Ok(Roster::load(path)?)
    } else {
        info!("{} not found; starting with an empty roster", path.display());
        Ok(Roster::default())
    }
}

fn run(args: &Args, roster: &mut Roster) -> Result<(), Box<dyn Error>> {
    match &args.command {
        Command::Add { name } => {
            roster.add_player(name)?;
        }
        Command::Remove { name } => {
            roster.remove_player(name)?;
        }
        Command::Rename { old, new } => roster.rename_player(old, new)?,
        Command::Record { name, events } => {
            for notation in events {
                let event = roster.record(name, notation)?;
                info!("recorded {event} for {name}");
            }
        }
        Command::Undo { name } => match roster.undo_last(name)? {
            Some(event) => info!("undid {event} for {name}"),
            None => info!("nothing to undo for {name}"),
        },
        Command::Edit { name, stat, value } => roster.edit_total(name, stat, value)?,
        Command::Player { name } => {
            let snapshot = roster.snapshot(name)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                println!("{}", Console::default().render(&print::tabulate_player(&snapshot)));
            }
        }
        Command::Report => {
            let report = roster.report();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", Console::default().render(&print::tabulate_report(&report)));
            }
        }
        Command::Export { out } => {
            let rows = roster.export();
            match out {
                Some(path) => {
                    write_csv(BufWriter::new(File::create(path)?), rows)?;
                    info!("exported {} players to {}", roster.len(), path.display());
                }
                None => {
                    write_csv(io::stdout().lock(), rows)?;
                }
            }
        }
        Command::History { name, out } => {
            let player = roster.player(name)?;
            match out {
                Some(path) => {
                    write_csv(BufWriter::new(File::create(path)?), history_rows(player))?;
                    info!(
                        "exported {} events for {name} to {}",
                        player.event_history().len(),
                        path.display()
                    );
                }
                None if args.json => {
                    println!("{}", serde_json::to_string_pretty(player.event_history())?);
                }
                None => {
                    println!("{}", Console::default().render(&print::tabulate_history(player)));
                }
            }
        }
        Command::Restore { file } => {
            let restored = Roster::load(file)
                .map_err(|err| anyhow!("cannot restore from {}: {err}", file.display()))?;
            roster.restore(restored);
        }
    }
    Ok(())
}
