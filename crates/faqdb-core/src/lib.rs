//! faqdb-core
//!
//! Domain types, search options, configuration and record loading shared by
//! the search engine, the session layer and the CLI.

#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod config;
pub mod error;
pub mod loader;
pub mod options;
pub mod traits;
pub mod types;
