//! Common modules used throughout the project, including the witness construction core,
//! the scripts, and testing code

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod backends;
pub mod constants;
pub mod errors;
pub mod field;
pub mod registers;
pub mod types;
