use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dictionary::{Dictionary, PronouncingDictionary};
use crate::error::LoadError;
use crate::parser::split_lines;

/// Text encoding of a dictionary source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    /// ISO-8859-1, the legacy encoding of the published dictionary files
    #[default]
    Latin1,
    Utf8,
}

impl TextEncoding {
    /// Decode a whole buffer
    pub fn decode(self, bytes: Vec<u8>) -> Result<String, LoadError> {
        match self {
            // Every byte maps to the code point of the same value.
            TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            TextEncoding::Utf8 => String::from_utf8(bytes).map_err(|e| {
                let prefix = &e.as_bytes()[..e.utf8_error().valid_up_to()];
                let breaks = prefix
                    .iter()
                    .enumerate()
                    .filter(|&(i, &b)| {
                        b == b'\n' || (b == b'\r' && prefix.get(i + 1) != Some(&b'\n'))
                    })
                    .count();
                let line = breaks + 1;
                LoadError::Decode {
                    line,
                    encoding: self,
                }
            }),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextEncoding::Latin1 => f.write_str("Latin-1"),
            TextEncoding::Utf8 => f.write_str("UTF-8"),
        }
    }
}

impl FromStr for TextEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "latin1" | "iso88591" => Ok(TextEncoding::Latin1),
            "utf8" => Ok(TextEncoding::Utf8),
            other => Err(format!("unsupported encoding: {other}")),
        }
    }
}

/// Construction options shared by every entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Keep words with more than one pronunciation
    pub keep_ambiguous: bool,
    pub encoding: TextEncoding,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            keep_ambiguous: true,
            encoding: TextEncoding::default(),
        }
    }
}

impl LoadOptions {
    pub fn keep_ambiguous(mut self, keep: bool) -> Self {
        self.keep_ambiguous = keep;
        self
    }

    pub fn encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// Builds [`PronouncingDictionary`] values from files, streams or lines
pub struct CmuDictLoader;

impl CmuDictLoader {
    /// Load dictionary from file path
    pub fn load_from_file(
        path: &Path,
        options: LoadOptions,
    ) -> Result<PronouncingDictionary, LoadError> {
        tracing::info!(
            "Loading pronouncing dictionary from file: {} ({})",
            path.display(),
            options.encoding
        );
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dict = Self::load_from_reader(file, options).map_err(|e| match e {
            LoadError::Read(source) => LoadError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        let dict = match path.file_stem() {
            Some(stem) => dict.with_name(stem.to_string_lossy()),
            None => dict,
        };
        tracing::info!("Loaded {} words from file", dict.len());
        Ok(dict)
    }

    /// Load dictionary from an already-open stream, read to the end.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn load_from_reader<R: Read>(
        mut reader: R,
        options: LoadOptions,
    ) -> Result<PronouncingDictionary, LoadError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = options.encoding.decode(bytes)?;
        Ok(PronouncingDictionary::from_lines(split_lines(&text), options))
    }

    /// Build from lines already in memory
    pub fn load_from_lines<I, S>(lines: I, options: LoadOptions) -> PronouncingDictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        PronouncingDictionary::from_lines(lines, options)
    }
}
