/// Command-line parsing and the top-level processor
pub mod cli;
/// Fixed defaults and styling constants
pub mod configuration;
/// Error types shared by every stage
pub mod error;
/// Child process execution and output validation
pub mod invoker;
/// JSON encoding, file output and console summary
pub mod writer;
