//! Access to the curated sample documents under `samples/`

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::markdown::ast::Document;
use crate::markdown::parsing::{parse, ParseError};

pub struct Samples;

impl Samples {
    pub fn dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples")
    }

    /// Raw text of a sample, by file name
    pub fn get(name: &str) -> io::Result<String> {
        fs::read_to_string(Self::dir().join(name))
    }

    /// Sample file names, sorted
    pub fn list() -> io::Result<Vec<String>> {
        let mut names = fs::read_dir(Self::dir())?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.ends_with(".md"))
            .collect::<Vec<_>>();
        names.sort();
        Ok(names)
    }

    /// Parse a sample; panics if the file is missing
    pub fn parse(name: &str) -> Result<Document, ParseError> {
        let source = Self::get(name).unwrap_or_else(|err| panic!("sample {name}: {err}"));
        parse(&source)
    }
}
