//! Library components for the worksheet flattener CLI.

pub mod logging;
