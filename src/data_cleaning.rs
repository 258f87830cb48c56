use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::info;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::Result;

/// One `user,friend` row. Friendships are mutual, so a single row links both users.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Friendship {
    pub user: usize,
    pub friend: usize,
}

/// One `user,title` row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WatchedVideo {
    pub user: usize,
    pub title: String,
}

fn read_rows<R: Read, T: DeserializeOwned>(reader: R) -> Result<Vec<T>> {
    let mut csv_reader = csv::ReaderBuilder::new() // first line holds the column titles
        .trim(csv::Trim::All)
        .from_reader(reader);
    let rows = csv_reader.deserialize().collect::<std::result::Result<Vec<T>, csv::Error>>()?;
    Ok(rows)
}

pub fn read_friendships<R: Read>(reader: R) -> Result<Vec<Friendship>> {
    read_rows(reader)
}

pub fn read_watch_history<R: Read>(reader: R) -> Result<Vec<WatchedVideo>> {
    read_rows(reader)
}

pub fn load_friendships(file_path: impl AsRef<Path>) -> Result<Vec<Friendship>> {
    let file_path = file_path.as_ref();
    let rows = read_friendships(BufReader::new(File::open(file_path)?))?;
    info!("loaded {} friendships from {}", rows.len(), file_path.display());
    Ok(rows)
}

pub fn load_watch_history(file_path: impl AsRef<Path>) -> Result<Vec<WatchedVideo>> {
    let file_path = file_path.as_ref();
    let rows = read_watch_history(BufReader::new(File::open(file_path)?))?;
    info!("loaded {} watched videos from {}", rows.len(), file_path.display());
    Ok(rows)
}
