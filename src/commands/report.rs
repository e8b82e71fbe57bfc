//! Interactive report generation.
//!
//! The full pipeline of one report request: period selection, fetch, client
//! selection with ambiguous-identifier resolution, project multi-selection,
//! assembly, preview and output. Every recoverable condition loops back to
//! the respective prompt; only configuration and network failures abort.

use crate::{
    api::clockify::Clockify,
    libs::{
        config::Config,
        entry::TimeEntry,
        export::{Exporter, OutputFormat},
        messages::Message,
        months::GermanMonths,
        report::assemble,
        resolver::{NameIndex, Resolution},
        selection::{EntrySet, ProjectChoice, Selection},
        view::View,
    },
    msg_bail_anyhow, msg_error, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, MultiSelect, Select};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[arg(long, help = "Start of the period (DD-MM or DD-MM-YYYY)")]
    start: Option<String>,
    #[arg(long, help = "End of the period (DD-MM or DD-MM-YYYY)")]
    end: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Pdf, help = "Output format")]
    format: OutputFormat,
    #[arg(long, help = "Output file path (defaults to the generated report name)")]
    output: Option<PathBuf>,
}

pub async fn cmd(args: ReportArgs) -> Result<()> {
    let config = Config::read()?;
    let Some(clockify_config) = &config.clockify else {
        msg_bail_anyhow!(Message::ClockifyNotConfigured);
    };
    let company = config.company_or_default();

    let (start_iso, end_iso) = super::resolve_period(args.start, args.end)?;

    msg_print!(Message::FetchingEntries);
    let entries = Clockify::new(clockify_config)?.fetch_entries(&start_iso, &end_iso).await?;
    if entries.is_empty() {
        msg_warning!(Message::NoEntriesInPeriod);
        return Ok(());
    }
    msg_success!(Message::EntriesFetched(entries.len()));

    loop {
        // --- Client selection ---
        let Some((client_id, client_rows)) = select_client(&entries)? else {
            return Ok(());
        };
        let client_name = client_rows[0].client_name.clone();
        msg_success!(Message::ClientEntriesFound(client_rows.len(), client_name.clone()));

        // --- Project selection ---
        let available_projects = client_rows.project_names();
        if available_projects.is_empty() {
            msg_error!(Message::NoProjectsForClient);
            continue;
        }
        let projects = select_projects(&available_projects)?;
        let projects_label = match &projects {
            ProjectChoice::All => "Alle Projekte".to_string(),
            ProjectChoice::Named(names) => names.join("_"),
        };

        // --- Filter, assemble, render ---
        let rows = client_rows.by_projects(&projects);
        if rows.is_empty() {
            msg_error!(Message::NoEntriesForSelection(projects_label));
            continue;
        }

        let selection = Selection {
            client_id,
            client_name: client_name.clone(),
            projects,
        };
        let bundle = assemble(&selection, rows, &GermanMonths)?;

        View::bundle(&bundle)?;
        Exporter::new(args.format, args.output.clone(), &bundle).export(&bundle, &company)?;
        msg_success!(Message::ReportFinished(client_name, projects_label));

        let again = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptAnotherReport.to_string())
            .default(false)
            .interact()?;
        if !again {
            break;
        }
    }

    Ok(())
}

/// Lets the user pick a client from the period's data and resolves the
/// display name to a single identifier.
///
/// Ambiguous names (several identifiers sharing one display name) lead to a
/// second selection over the candidate identifiers, by list position only, so
/// a numeric identifier can never be mistaken for an index. Returns `None`
/// when the period contains no usable clients at all.
fn select_client(entries: &Vec<TimeEntry>) -> Result<Option<(String, Vec<TimeEntry>)>> {
    let pairs = entries.client_pairs();
    if pairs.is_empty() {
        msg_warning!(Message::NoClientsInPeriod);
        return Ok(None);
    }
    let index = NameIndex::build(pairs.iter().map(|(id, name)| (id.as_str(), name.as_str())));

    loop {
        let names = index.names();
        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectClient.to_string())
            .items(&names)
            .default(0)
            .interact()?;
        let chosen_name = &names[picked];

        let client_id = match index.resolve(chosen_name) {
            Resolution::Resolved(id) => id,
            Resolution::Ambiguous(candidates) => {
                let picked_id = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptSelectClientId(chosen_name.clone()).to_string())
                    .items(&candidates)
                    .default(0)
                    .interact()?;
                candidates[picked_id].clone()
            }
            // The menu only offers indexed names.
            Resolution::Unknown => continue,
        };

        let client_rows = entries.clone().by_client_id(&client_id);
        if client_rows.is_empty() {
            msg_error!(Message::NoEntriesForClient(chosen_name.clone()));
            continue;
        }
        return Ok(Some((client_id, client_rows)));
    }
}

/// Multi-selection over the client's projects; an empty selection is the
/// all-projects wildcard.
fn select_projects(available: &[String]) -> Result<ProjectChoice> {
    let picked = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectProjects.to_string())
        .items(available)
        .interact()?;

    if picked.is_empty() {
        msg_print!(Message::AllProjectsSelected);
        return Ok(ProjectChoice::All);
    }

    let names: Vec<String> = picked.iter().map(|&i| available[i].clone()).collect();
    msg_print!(Message::ProjectsSelected(names.join(", ")));
    Ok(ProjectChoice::from_names(names))
}
