//! CLI subcommands

pub mod demo;
pub mod evaluate;
pub mod export;
pub mod show;
pub mod train;
