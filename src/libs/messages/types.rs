//! All user-facing message variants.
//!
//! Every prompt, confirmation and error text lives here so the wording stays
//! in one place. Interactive report prompts keep the German wording of the
//! business workflow; configuration and technical messages are English.

#[derive(Debug, Clone)]
pub enum Message {
    // === PERIOD SELECTION ===
    PromptStartDate,
    PromptEndDate,
    InvalidDateInput(String),
    EndBeforeStart,
    PeriodSelected(String, String),

    // === DATA FETCH ===
    FetchingEntries,
    EntriesFetched(usize),
    NoEntriesInPeriod,

    // === CLIENT SELECTION ===
    PromptSelectClient,
    PromptSelectClientId(String),
    NoClientsInPeriod,
    NoEntriesForClient(String),
    ClientEntriesFound(usize, String),

    // === PROJECT SELECTION ===
    PromptSelectProjects,
    NoProjectsForClient,
    AllProjectsSelected,
    ProjectsSelected(String),
    NoEntriesForSelection(String),

    // === REPORT OUTPUT ===
    ReportCreated(String),
    ReportFinished(String, String),
    PromptAnotherReport,

    // === CONFIGURATION ===
    PromptSelectModules,
    ConfigSaved,
    ClockifyNotConfigured,
    ClockifyApiKeyMissing,
    PromptClockifyApiKey,
    PromptClockifyWorkspace,
    PromptClockifyApiUrl,
    PromptCompanyName,
    PromptLogoPath,
}
