//! Test utilities for the observation pipelines

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tempfile::TempDir;


/// Three FR records (meters, Kelvin) on a straight line, 5 km apart, in chronological order
pub const FR_FLIGHT: [&str; 3] = [
    "2014-12-31T13:44|0,0|250|FR",
    "2014-12-31T13:45|3000,4000|251|FR",
    "2014-12-31T13:46|6000,8000|252|FR",
];

/// Write `lines` to a file in `dir`, one per line
pub fn write_lines(dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(&path, content).unwrap();
    path
}

/// Files left in `dir`, sorted by name
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Reader that always fails, standing in for a broken input device
pub struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("device unplugged"))
    }
}
