pub mod entries;
pub mod init;
pub mod report;

use crate::libs::dates::{is_valid_range, to_iso_format, DayBound};
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error, msg_error_anyhow, msg_success};
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "List the time entries of a period")]
    Entries(entries::EntriesArgs),
    #[command(about = "Generate a timesheet report")]
    Report(report::ReportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Entries(args) => entries::cmd(args).await,
            Commands::Report(args) => report::cmd(args).await,
        }
    }
}

/// Turns the period bounds into canonical ISO boundaries.
///
/// With both bounds given on the command line the function validates once and
/// fails hard; otherwise it prompts, re-prompting on unparseable input or an
/// inverted range until the user supplies a valid period.
pub(crate) fn resolve_period(start: Option<String>, end: Option<String>) -> Result<(String, String)> {
    if let (Some(start), Some(end)) = (&start, &end) {
        let start_iso =
            to_iso_format(start, DayBound::Start).map_err(|_| msg_error_anyhow!(Message::InvalidDateInput(start.clone())))?;
        let end_iso = to_iso_format(end, DayBound::End).map_err(|_| msg_error_anyhow!(Message::InvalidDateInput(end.clone())))?;
        if !is_valid_range(&start_iso, &end_iso) {
            msg_bail_anyhow!(Message::EndBeforeStart);
        }
        return Ok((start_iso, end_iso));
    }

    loop {
        let raw_start: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStartDate.to_string())
            .interact_text()?;
        let raw_end: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEndDate.to_string())
            .interact_text()?;

        let start_iso = match to_iso_format(&raw_start, DayBound::Start) {
            Ok(iso) => iso,
            Err(_) => {
                msg_error!(Message::InvalidDateInput(raw_start));
                continue;
            }
        };
        let end_iso = match to_iso_format(&raw_end, DayBound::End) {
            Ok(iso) => iso,
            Err(_) => {
                msg_error!(Message::InvalidDateInput(raw_end));
                continue;
            }
        };
        if !is_valid_range(&start_iso, &end_iso) {
            msg_error!(Message::EndBeforeStart);
            continue;
        }

        msg_success!(Message::PeriodSelected(start_iso.clone(), end_iso.clone()));
        return Ok((start_iso, end_iso));
    }
}
