use crate::error;
use crate::lang::{Error, LineNumber};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// ## Program source
///
/// Lines are kept verbatim, blank and comment lines included, so a line
/// number in a jump is the position in the file counting from zero.

#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: Vec<String>,
}

impl Listing {
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn line(&self, num: LineNumber) -> Option<&str> {
        self.source.get(num).map(String::as_str)
    }

    pub fn load_str(&mut self, line: &str) {
        self.source
            .push(line.trim_end_matches(&['\r', '\n'][..]).to_string());
    }

    /// Used for loading a new Listing from a file.
    pub fn open<P: AsRef<Path>>(filename: P) -> Result<Listing, Error> {
        let filename = filename.as_ref();
        let reader = match File::open(filename) {
            Ok(file) => BufReader::new(file),
            Err(error) => {
                let msg = format!("{}: {}", filename.display(), error);
                match error.kind() {
                    ErrorKind::NotFound => return Err(error!(FileNotFound; &msg)),
                    _ => return Err(error!(Io; &msg)),
                }
            }
        };
        let mut listing = Listing::default();
        for (index, line) in reader.lines().enumerate() {
            match line {
                Err(error) => {
                    return Err(error!(Io, index; &error.to_string()));
                }
                Ok(line) => listing.load_str(&line),
            }
        }
        Ok(listing)
    }
}

impl std::str::FromStr for Listing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Listing, Error> {
        let mut listing = Listing::default();
        for line in s.lines() {
            listing.load_str(line);
        }
        Ok(listing)
    }
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (num, line) in self.source.iter().enumerate() {
            writeln!(f, "{:>4} {}", num, line)?;
        }
        Ok(())
    }
}
