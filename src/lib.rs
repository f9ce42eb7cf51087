#![allow(clippy::enum_variant_names)]

pub mod application;
pub mod cli;
pub mod commands;
pub mod filesystem;
