//! Line-oriented script driver over a [`Budget`].
//!
//! Commands, one per line (blank lines and `#` comments are skipped):
//!
//! ```text
//! category NAME
//! deposit NAME AMOUNT [DESCRIPTION]
//! withdraw NAME AMOUNT [DESCRIPTION]
//! transfer FROM TO AMOUNT
//! balance NAME
//! show NAME
//! chart [NAME...]
//! ```

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    config::{ConfigManager, ReportSettings},
    errors::LedgerError,
    ledger::{Budget, Category},
    report::{layout::format_plain_decimal, SpendChart},
};

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("line {line}: {source}")]
    Script { line: usize, source: CommandError },
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Holds the budget built up by a script and the settings used to print it.
#[derive(Debug, Default)]
pub struct ScriptSession {
    budget: Budget,
    settings: ReportSettings,
}

impl ScriptSession {
    pub fn new(settings: ReportSettings) -> Self {
        Self {
            budget: Budget::new(),
            settings,
        }
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    /// Runs a single script line, writing any report text to `out`.
    pub fn process_line(&mut self, line: &str, out: &mut dyn Write) -> CommandResult {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(());
        }
        let tokens =
            shell_words::split(trimmed).map_err(|err| LedgerError::Parse(err.to_string()))?;
        let Some((command, rest)) = tokens.split_first() else {
            return Ok(());
        };
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        debug!(command = %command, ?args, "dispatching script command");
        self.dispatch(&command.to_lowercase(), &args, out)
    }

    fn dispatch(&mut self, command: &str, args: &[&str], out: &mut dyn Write) -> CommandResult {
        match command {
            "category" => {
                let name = single_name(args, "usage: category NAME")?;
                self.budget.add_category(Category::new(name))?;
                Ok(())
            }
            "deposit" => {
                let (name, amount, description) =
                    entry_args(args, "usage: deposit NAME AMOUNT [DESCRIPTION]")?;
                self.budget.category_mut(name)?.deposit(amount, description);
                Ok(())
            }
            "withdraw" => {
                let (name, amount, description) =
                    entry_args(args, "usage: withdraw NAME AMOUNT [DESCRIPTION]")?;
                let done = self.budget.category_mut(name)?.withdraw(amount, description);
                write_outcome(out, done)
            }
            "transfer" => {
                let [from, to, amount] = args else {
                    return Err(CommandError::InvalidArguments(
                        "usage: transfer FROM TO AMOUNT".into(),
                    ));
                };
                let done = self.budget.transfer(from, to, parse_amount(amount)?)?;
                write_outcome(out, done)
            }
            "balance" => {
                let name = single_name(args, "usage: balance NAME")?;
                let balance = self.budget.category(name)?.balance();
                writeln!(out, "{}", format_plain_decimal(balance))?;
                Ok(())
            }
            "show" => {
                let name = single_name(args, "usage: show NAME")?;
                let summary = self.budget.category(name)?.summary(&self.settings);
                writeln!(out, "{}", summary)?;
                Ok(())
            }
            "chart" => {
                let chart = if args.is_empty() {
                    self.budget.spend_chart(&self.settings)?
                } else {
                    let selected = args
                        .iter()
                        .map(|name| self.budget.category(name))
                        .collect::<Result<Vec<_>, _>>()?;
                    SpendChart::from_categories(&selected)?.render(&self.settings)
                };
                writeln!(out, "{}", chart)?;
                Ok(())
            }
            other => Err(CommandError::InvalidArguments(format!(
                "unknown command `{}`",
                other
            ))),
        }
    }
}

fn single_name<'a>(args: &[&'a str], usage: &str) -> Result<&'a str, CommandError> {
    match args {
        [name] => Ok(*name),
        _ => Err(CommandError::InvalidArguments(usage.into())),
    }
}

fn entry_args<'a>(
    args: &[&'a str],
    usage: &str,
) -> Result<(&'a str, f64, String), CommandError> {
    match args {
        [name, amount, description @ ..] => {
            Ok((*name, parse_amount(amount)?, description.join(" ")))
        }
        _ => Err(CommandError::InvalidArguments(usage.into())),
    }
}

fn parse_amount(raw: &str) -> Result<f64, CommandError> {
    raw.parse::<f64>()
        .map_err(|_| LedgerError::Parse(format!("invalid amount `{}`", raw)).into())
}

fn write_outcome(out: &mut dyn Write, done: bool) -> CommandResult {
    let label = if done { "ok" } else { "insufficient funds" };
    writeln!(out, "{}", label)?;
    Ok(())
}

/// Executes every line of `input`, stopping at the first failing command.
pub fn run_script<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    settings: ReportSettings,
) -> Result<ScriptSession, CliError> {
    let mut session = ScriptSession::new(settings);
    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        session
            .process_line(&line, output)
            .map_err(|source| CliError::Script {
                line: idx + 1,
                source,
            })?;
    }
    output.flush()?;
    Ok(session)
}

/// Entry point for the binary: `[--config PATH]`, script on stdin.
pub fn run_cli<I>(args: I) -> Result<(), CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut config_path: Option<PathBuf> = None;
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--config requires a path".into()))?;
                config_path = Some(PathBuf::from(path));
            }
            other => return Err(CliError::Usage(format!("unexpected argument `{}`", other))),
        }
    }

    let manager = match config_path {
        Some(path) => ConfigManager::new(path),
        None => ConfigManager::default_location(),
    };
    let config = manager.load()?;
    info!(path = %manager.config_path().display(), "configuration loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_script(stdin.lock(), &mut out, config.report)?;
    Ok(())
}
