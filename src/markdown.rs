//! Main module for mdhtml library functionality

pub mod ast;
pub mod building;
pub mod config;
pub mod formats;
pub mod parsing;
pub mod pipeline;
pub mod testing;
