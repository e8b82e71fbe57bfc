//! Lists the normalized time entries of a period.

use crate::{
    api::clockify::Clockify,
    libs::{config::Config, messages::Message, selection::EntrySet, view::View},
    msg_bail_anyhow, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EntriesArgs {
    #[arg(long, help = "Start of the period (DD-MM or DD-MM-YYYY)")]
    start: Option<String>,
    #[arg(long, help = "End of the period (DD-MM or DD-MM-YYYY)")]
    end: Option<String>,
}

pub async fn cmd(args: EntriesArgs) -> Result<()> {
    let config = Config::read()?;
    let Some(clockify_config) = &config.clockify else {
        msg_bail_anyhow!(Message::ClockifyNotConfigured);
    };

    let (start_iso, end_iso) = super::resolve_period(args.start, args.end)?;

    msg_print!(Message::FetchingEntries);
    let entries = Clockify::new(clockify_config)?.fetch_entries(&start_iso, &end_iso).await?.sorted_by_date();

    if entries.is_empty() {
        msg_warning!(Message::NoEntriesInPeriod);
        return Ok(());
    }

    View::entries(&entries)?;
    Ok(())
}
