// src/lib.rs — Library root for CodeScribe

pub mod api;
pub mod cli;
pub mod generation;
pub mod infra;
pub mod provider;
pub mod util;
