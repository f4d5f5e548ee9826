// Copyright (c) 2025 - Cowboy AI, Inc.
//! Console Transport
//!
//! Writes one line per event to stdout or any other writer.
//!
//! ```text
//! text: [2026-01-19T12:00:00Z] analytics bookAdded book=Dune
//! json: {"sent_at":"2026-01-19T12:00:00Z","name":"bookAdded","metadata":{"book":"Dune"}}
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

use super::Transport;
use crate::errors::TransportError;
use crate::events::Metadata;

/// Line format for [`ConsoleTransport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleFormat {
    /// Human readable `key=value` line
    #[default]
    Text,

    /// One JSON object per line
    Json,
}

impl fmt::Display for ConsoleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleFormat::Text => write!(f, "text"),
            ConsoleFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ConsoleFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ConsoleFormat::Text),
            "json" => Ok(ConsoleFormat::Json),
            other => Err(format!("unknown console format '{}'", other)),
        }
    }
}

#[derive(Serialize)]
struct JsonLine<'a> {
    sent_at: DateTime<Utc>,
    name: &'a str,
    metadata: &'a Metadata,
}

/// Transport that prints each event as a line
pub struct ConsoleTransport {
    format: ConsoleFormat,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleTransport {
    /// Print to stdout
    pub fn stdout(format: ConsoleFormat) -> Self {
        Self::with_writer(io::stdout(), format)
    }

    /// Print to the given writer
    pub fn with_writer(writer: impl Write + Send + 'static, format: ConsoleFormat) -> Self {
        Self {
            format,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Line format in use
    pub fn format(&self) -> ConsoleFormat {
        self.format
    }

    fn render(&self, name: &str, metadata: &Metadata) -> Result<String, TransportError> {
        let now = Utc::now();

        match self.format {
            ConsoleFormat::Text => {
                let mut line = format!(
                    "[{}] analytics {}",
                    now.to_rfc3339_opts(SecondsFormat::Secs, true),
                    name
                );
                for (key, value) in metadata {
                    line.push_str(&format!(" {}={}", key, value));
                }
                Ok(line)
            }
            ConsoleFormat::Json => Ok(serde_json::to_string(&JsonLine {
                sent_at: now,
                name,
                metadata,
            })?),
        }
    }
}

impl Transport for ConsoleTransport {
    fn send(&self, name: &str, metadata: &Metadata) -> Result<(), TransportError> {
        let line = self.render(name, metadata)?;

        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

impl fmt::Debug for ConsoleTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleTransport")
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}
