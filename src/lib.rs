// Core modules
pub mod cli;
pub mod config;
pub mod git;
