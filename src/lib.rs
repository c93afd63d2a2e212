//! Resume matcher library

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod extraction;
pub mod input;
pub mod matching;
pub mod nlp;
pub mod output;

pub use config::Config;
pub use error::{Result, ResumeMatcherError};
