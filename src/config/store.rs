//! INI-style key/value store.
//!
//! The grammar is deliberately small:
//!
//! ```ini
//! ; comment
//! # comment
//! [app]
//! name = "flask-echo"
//! port = 50100
//! ```
//!
//! Lines without `=` are skipped, and key/value lines that appear before the
//! first `[section]` header have nowhere to go and are dropped.

use std::collections::HashMap;
use std::io::BufRead;

/// Two-level mapping of `section -> key -> raw value`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    sections: HashMap<String, HashMap<String, String>>,
}

impl ConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a store from in-memory INI text.
    pub fn parse(content: &str) -> Self {
        let mut store = Self::new();
        let mut parser = LineParser::default();
        for line in content.lines() {
            parser.feed(&mut store, line);
        }
        store
    }

    /// Read INI lines from `reader` into this store.
    ///
    /// Lines are decoded lossily, so a comment in a legacy encoding does not
    /// end parsing. On an I/O error the sections parsed so far stay in the
    /// store and the error is returned to the caller.
    pub fn read_from<R: BufRead>(&mut self, mut reader: R) -> std::io::Result<()> {
        let mut parser = LineParser::default();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(());
            }
            let line = String::from_utf8_lossy(strip_line_ending(&buf));
            parser.feed(self, &line);
        }
    }

    /// Look up a raw value.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|keys| keys.get(key))
            .map(String::as_str)
    }

    /// Section names, sorted.
    pub fn section_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sections.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Total number of stored key/value pairs.
    pub fn len(&self) -> usize {
        self.sections.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn open_section(&mut self, name: &str) {
        self.sections.entry(name.to_string()).or_default();
    }

    fn insert(&mut self, section: &str, key: &str, value: &str) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }
}

/// Parser state carried across lines: the currently open section.
#[derive(Default)]
struct LineParser {
    current: Option<String>,
}

impl LineParser {
    fn feed(&mut self, store: &mut ConfigStore, raw: &str) {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            return;
        }

        if let Some(name) = section_header(line) {
            if name.is_empty() {
                self.current = None;
            } else {
                store.open_section(name);
                self.current = Some(name.to_string());
            }
            return;
        }

        let Some((key, value)) = line.split_once('=') else {
            return;
        };
        if let Some(section) = self.current.as_deref() {
            store.insert(section, key.trim(), strip_quotes(value.trim()));
        }
    }
}

fn section_header(line: &str) -> Option<&str> {
    if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
        Some(line[1..line.len() - 1].trim())
    } else {
        None
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn strip_quotes(value: &str) -> &str {
    value.trim_matches(|c| c == '"' || c == '\'')
}
