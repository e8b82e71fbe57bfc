use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === PERIOD SELECTION ===
            Message::PromptStartDate => "Start period (DD-MM or DD-MM-YYYY)".to_string(),
            Message::PromptEndDate => "End period (DD-MM or DD-MM-YYYY)".to_string(),
            Message::InvalidDateInput(input) => format!("Invalid date: unsupported format '{}'. Please try again.", input),
            Message::EndBeforeStart => "End date is before start date. Please try again.".to_string(),
            Message::PeriodSelected(start, end) => format!("Selected period: {} … {}", start, end),

            // === DATA FETCH ===
            Message::FetchingEntries => "Lade Zeiteinträge aus Clockify …".to_string(),
            Message::EntriesFetched(count) => format!("{} Zeiteinträge geladen", count),
            Message::NoEntriesInPeriod => "Keine Daten im gewählten Zeitraum!".to_string(),

            // === CLIENT SELECTION ===
            Message::PromptSelectClient => "Client auswählen".to_string(),
            Message::PromptSelectClientId(name) => format!("Mehrere IDs für '{}' gefunden – bitte auswählen", name),
            Message::NoClientsInPeriod => "Keine Clients in diesem Zeitraum vorhanden.".to_string(),
            Message::NoEntriesForClient(name) => {
                format!("Keine Einträge für '{}' in diesem Zeitraum. Bitte anderen Client wählen.", name)
            }
            Message::ClientEntriesFound(count, name) => format!("{} Einträge gefunden für '{}'", count, name),

            // === PROJECT SELECTION ===
            Message::PromptSelectProjects => "Projekte auswählen (ENTER ohne Auswahl = alle Projekte)".to_string(),
            Message::NoProjectsForClient => "Keine Projekte für diesen Client gefunden. Bitte anderen Client wählen.".to_string(),
            Message::AllProjectsSelected => "Alle Projekte ausgewählt.".to_string(),
            Message::ProjectsSelected(names) => format!("Ausgewählte Projekte: {}", names),
            Message::NoEntriesForSelection(names) => {
                format!("Keine Einträge für die Auswahl {}. Bitte erneut versuchen.", names)
            }

            // === REPORT OUTPUT ===
            Message::ReportCreated(path) => format!("Report wurde erstellt: {}", path),
            Message::ReportFinished(client, projects) => format!("Kompletter Report für {} / {} fertig!", client, projects),
            Message::PromptAnotherReport => "Möchten Sie einen weiteren Report erstellen?".to_string(),

            // === CONFIGURATION ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ClockifyNotConfigured => "Clockify is not configured. Run 'stundenreport init' first.".to_string(),
            Message::ClockifyApiKeyMissing => {
                "No Clockify API key found. Set one with 'stundenreport init' or via CLOCKIFY_API_KEY.".to_string()
            }
            Message::PromptClockifyApiKey => "Enter your Clockify API key".to_string(),
            Message::PromptClockifyWorkspace => "Enter your Clockify workspace ID".to_string(),
            Message::PromptClockifyApiUrl => "Enter the Clockify API URL".to_string(),
            Message::PromptCompanyName => "Enter the company name shown on reports".to_string(),
            Message::PromptLogoPath => "Enter the path to the report logo (empty for none)".to_string(),
        };

        write!(f, "{}", text)
    }
}
