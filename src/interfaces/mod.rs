//! Terminal front end: status regions on stdout and payment forms from JSON files.

pub mod console;
