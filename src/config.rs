// Copyright (c) 2025 - Cowboy AI, Inc.
//! Analytics Configuration
//!
//! Selects which sinks an application wires into its composites and how
//! events look on the wire.
//!
//! | Variable                   | Values                         | Default   |
//! |----------------------------|--------------------------------|-----------|
//! | `ANALYTICS_EVENT_NAMING`   | `plain`, `scoped`              | `plain`   |
//! | `ANALYTICS_CONSOLE_FORMAT` | `text`, `json`                 | `text`    |
//! | `ANALYTICS_SINKS`          | comma list of `console`, `tracing`, `debug` | `console` |

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

use crate::errors::{AnalyticsError, AnalyticsResult};
use crate::events::{EventNaming, ToWire};
use crate::sink::{CompositeSink, DebugSink, TransportSink};
use crate::transport::{ConsoleFormat, ConsoleTransport, TracingTransport, Transport};

/// Environment variable selecting the naming convention
pub const ENV_EVENT_NAMING: &str = "ANALYTICS_EVENT_NAMING";

/// Environment variable selecting the console line format
pub const ENV_CONSOLE_FORMAT: &str = "ANALYTICS_CONSOLE_FORMAT";

/// Environment variable listing the sinks to build
pub const ENV_SINKS: &str = "ANALYTICS_SINKS";

/// Kind of sink to assemble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// [`TransportSink`] over [`ConsoleTransport`] on stdout
    Console,

    /// [`TransportSink`] over [`TracingTransport`]
    Tracing,

    /// [`DebugSink`]
    Debug,
}

impl FromStr for SinkKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "console" => Ok(SinkKind::Console),
            "tracing" => Ok(SinkKind::Tracing),
            "debug" => Ok(SinkKind::Debug),
            other => Err(format!("unknown sink '{}'", other)),
        }
    }
}

/// Configuration for analytics sinks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Wire naming convention for closed events
    pub naming: EventNaming,
    /// Line format of the console sink
    pub console_format: ConsoleFormat,
    /// Sinks to build, in dispatch order
    pub sinks: Vec<SinkKind>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            naming: EventNaming::Plain,
            console_format: ConsoleFormat::Text,
            sinks: vec![SinkKind::Console],
        }
    }
}

impl AnalyticsConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> AnalyticsResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup, defaulting missing keys
    pub fn from_lookup<F>(lookup: F) -> AnalyticsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let naming = match lookup(ENV_EVENT_NAMING) {
            Some(value) => value.parse().map_err(AnalyticsError::Configuration)?,
            None => defaults.naming,
        };

        let console_format = match lookup(ENV_CONSOLE_FORMAT) {
            Some(value) => value.parse().map_err(AnalyticsError::Configuration)?,
            None => defaults.console_format,
        };

        let sinks = match lookup(ENV_SINKS) {
            Some(value) => parse_sink_list(&value)?,
            None => defaults.sinks,
        };

        Ok(Self {
            naming,
            console_format,
            sinks,
        })
    }

    /// Assemble the configured sinks into one composite, in listed order
    ///
    /// Transports are created once per call; build one composite per event
    /// family.
    pub fn build_sink<E>(&self) -> CompositeSink<E>
    where
        E: ToWire + Debug + 'static,
    {
        let builder = self
            .sinks
            .iter()
            .fold(CompositeSink::builder().named("analytics"), |builder, kind| {
                match kind {
                    SinkKind::Console => {
                        let transport: Arc<dyn Transport> =
                            Arc::new(ConsoleTransport::stdout(self.console_format));
                        builder.with(TransportSink::new(transport).with_naming(self.naming))
                    }
                    SinkKind::Tracing => {
                        let transport: Arc<dyn Transport> = Arc::new(TracingTransport::new());
                        builder.with(TransportSink::new(transport).with_naming(self.naming))
                    }
                    SinkKind::Debug => builder.with(DebugSink::new()),
                }
            });

        let sink = builder.build();
        info!(sinks = ?sink.member_names(), naming = %self.naming, "Analytics sinks assembled");
        sink
    }
}

fn parse_sink_list(value: &str) -> AnalyticsResult<Vec<SinkKind>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| item.parse().map_err(AnalyticsError::Configuration))
        .collect()
}
