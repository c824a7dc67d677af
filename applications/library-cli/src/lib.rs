//! Soul Library CLI - command-line front end for the web API library endpoints
pub mod cli;
pub mod commands;
