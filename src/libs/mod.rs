//! Core library modules for the stundenreport application.
//!
//! The report pipeline lives here, in dependency order: date-range
//! normalization, entry normalization, name resolution, selection filtering,
//! month-range summarization, filename construction and report assembly.
//! Around it sit the ambient pieces: configuration, messaging, rendering,
//! export and console views.

pub mod config;
pub mod data_storage;
pub mod dates;
pub mod entry;
pub mod error;
pub mod export;
pub mod filename;
pub mod messages;
pub mod months;
pub mod pdf;
pub mod report;
pub mod resolver;
pub mod selection;
pub mod view;
