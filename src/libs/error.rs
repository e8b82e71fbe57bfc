//! Error taxonomy for the report pipeline.
//!
//! Every control-flow-relevant failure is resolved at the boundary where it
//! occurs: date parsing errors and resolution failures lead back into a
//! prompt, an empty result set ends the current report attempt. None of these
//! ever surface as a generic failure from the assembler.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ReportError {
    /// The date input matched neither `D[-./]M[[-./]YYYY]` nor `Y-M-D`.
    #[error("unsupported date format: '{0}'")]
    InvalidDateFormat(String),

    /// The requested name is absent from the current index.
    #[error("no such name: '{0}'")]
    UnknownName(String),

    /// More than one identifier shares the requested display name. The
    /// candidates are carried so the caller can present them for selection.
    #[error("ambiguous name '{name}': {candidates:?}")]
    AmbiguousName { name: String, candidates: Vec<String> },

    /// No entries remain after filtering. Terminal for the current report
    /// attempt, never for the process.
    #[error("no entries match the current selection")]
    EmptyResultSet,
}
