//! Wrapper around the YMW16 electron-density model executable.
//!
//! [`invoker`] builds the command line and runs the tool, [`record`] turns the
//! single line it prints into a [`crate::models::ModelRecord`].

pub mod invoker;
pub mod record;
