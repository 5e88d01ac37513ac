//! Use cases for the application layer

pub mod run_agent;
