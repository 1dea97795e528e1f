// Derived from asciinema (https://github.com/asciinema/asciinema)
// Copyright (c) asciinema authors
// Licensed under GPL-3.0-or-later

//! asciicast recording parser
//!
//! References:
//! - https://docs.asciinema.org/manual/asciicast/v2/
//! - https://docs.asciinema.org/manual/asciicast/v3/
//!
//! Both versions are normalized into a [`Recording`] whose events carry
//! absolute timestamps in seconds.

mod theme;

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

pub use theme::{parse_hex_color, Theme};

/// Raw header line, covering the fields of both versions
#[derive(Debug, Deserialize)]
struct RawHeader {
    version: u8,
    width: Option<usize>,
    height: Option<usize>,
    term: Option<RawTerm>,
    theme: Option<Theme>,
    idle_time_limit: Option<f64>,
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawTerm {
    cols: usize,
    rows: usize,
    theme: Option<Theme>,
}

/// Normalized recording header
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub version: u8,
    /// Terminal width in columns
    pub width: usize,
    /// Terminal height in rows
    pub height: usize,
    pub theme: Option<Theme>,
    pub idle_time_limit: Option<f64>,
    pub title: Option<String>,
}

impl Header {
    fn from_raw(raw: RawHeader) -> Result<Self> {
        let (width, height, theme) = match raw.version {
            2 => {
                let width = raw.width.context("v2 header is missing \"width\"")?;
                let height = raw.height.context("v2 header is missing \"height\"")?;
                (width, height, raw.theme)
            }
            3 => {
                let term = raw.term.context("v3 header is missing \"term\"")?;
                (term.cols, term.rows, term.theme)
            }
            other => bail!(
                "Only asciicast v2 and v3 formats are supported (got version {})",
                other
            ),
        };

        if width == 0 || height == 0 {
            bail!("Terminal size must be non-zero (got {}x{})", width, height);
        }

        Ok(Self {
            version: raw.version,
            width,
            height,
            theme,
            idle_time_limit: raw.idle_time_limit,
            title: raw.title,
        })
    }
}

/// Event type codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    /// Output (data written to terminal)
    Output, // "o"
    /// Input (data read from terminal)
    Input, // "i"
    /// Marker (annotation)
    Marker, // "m"
    /// Resize (terminal resize)
    Resize, // "r"
    /// Exit (process exit code)
    Exit, // "x"
}

impl EventType {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "o" => Some(EventType::Output),
            "i" => Some(EventType::Input),
            "m" => Some(EventType::Marker),
            "r" => Some(EventType::Resize),
            "x" => Some(EventType::Exit),
            _ => None,
        }
    }

    pub fn to_code(&self) -> &'static str {
        match self {
            EventType::Output => "o",
            EventType::Input => "i",
            EventType::Marker => "m",
            EventType::Resize => "r",
            EventType::Exit => "x",
        }
    }
}

/// An event in the recording
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Seconds since the start of the recording
    pub time: f64,
    pub event_type: EventType,
    /// Event data (output text, marker label, etc.)
    pub data: String,
}

impl Event {
    pub fn new(time: f64, event_type: EventType, data: impl Into<String>) -> Self {
        Self {
            time,
            event_type,
            data: data.into(),
        }
    }

    pub fn output(time: f64, data: impl Into<String>) -> Self {
        Self::new(time, EventType::Output, data)
    }

    pub fn marker(time: f64, label: impl Into<String>) -> Self {
        Self::new(time, EventType::Marker, label)
    }

    pub fn is_output(&self) -> bool {
        self.event_type == EventType::Output
    }

    /// Parse an event from a JSON line. The time is taken as written.
    pub fn from_json(line: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(line).context("Failed to parse event JSON")?;

        let arr = value.as_array().context("Event must be a JSON array")?;

        if arr.len() < 3 {
            bail!("Event array must have at least 3 elements");
        }

        let time = arr[0].as_f64().context("Event time must be a number")?;
        if !time.is_finite() || time < 0.0 {
            bail!("Event time must be non-negative (got {})", time);
        }

        let code = arr[1].as_str().context("Event type must be a string")?;

        let event_type =
            EventType::from_code(code).with_context(|| format!("Unknown event type: {}", code))?;

        let data = arr[2]
            .as_str()
            .context("Event data must be a string")?
            .to_string();

        Ok(Event {
            time,
            event_type,
            data,
        })
    }
}

/// A parsed recording
#[derive(Debug, Clone)]
pub struct Recording {
    pub header: Header,
    /// Events in file order with absolute times
    pub events: Vec<Event>,
}

impl Recording {
    /// Parse a recording from a path
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file =
            fs::File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
        let reader = BufReader::new(file);

        Self::parse_reader(reader)
    }

    /// Parse a recording from a reader
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();

        // First line is the header
        let header_line = lines
            .next()
            .context("File is empty")?
            .context("Failed to read header line")?;

        let raw: RawHeader =
            serde_json::from_str(&header_line).context("Failed to parse header")?;
        let header = Header::from_raw(raw)?;

        // v3 stores intervals, v2 absolute times
        let relative = header.version == 3;
        let mut elapsed = 0.0;

        let mut events = Vec::new();
        for (line_num, line_result) in lines.enumerate() {
            let line =
                line_result.with_context(|| format!("Failed to read line {}", line_num + 2))?;

            if line.trim().is_empty() {
                continue;
            }

            let mut event = Event::from_json(&line)
                .with_context(|| format!("Failed to parse event on line {}", line_num + 2))?;
            if relative {
                elapsed += event.time;
                event.time = elapsed;
            }
            events.push(event);
        }

        Ok(Recording { header, events })
    }

    /// Parse from a string
    pub fn parse_str(content: &str) -> Result<Self> {
        let reader = BufReader::new(content.as_bytes());
        Self::parse_reader(reader)
    }

    /// Get all output events
    pub fn outputs(&self) -> Vec<&Event> {
        self.events.iter().filter(|e| e.is_output()).collect()
    }

    /// Timestamp of the last event, 0 for an empty recording
    pub fn duration(&self) -> f64 {
        self.events.last().map_or(0.0, |e| e.time)
    }
}
