//! CLI subcommands

pub mod challenges;
pub mod encode;
pub mod verify;
