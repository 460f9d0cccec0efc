//! Command-line front end for the crontab parser: file and stdin handling,
//! configuration loading and output selection.

pub mod cli;
