//! `clubhouse-console`
//!
//! **Responsibility:** the operator-facing side of the club member records.
//!
//! This crate provides:
//! - the top-level controller ([`ClubApp`]): create, search, edit, shutdown
//! - the [`Surface`] boundary the controller prompts and notifies through
//! - a line-oriented interactive [`Shell`] implementing that surface
//! - command-line/environment configuration
//!
//! The console is a **thin shell** around the member repository.

pub mod app;
pub mod command;
pub mod config;
pub mod shell;
pub mod surface;

pub use app::ClubApp;
pub use config::{AppConfig, ConsoleArgs};
pub use shell::Shell;
pub use surface::{Notice, Surface};
