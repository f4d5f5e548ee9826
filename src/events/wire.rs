// Copyright (c) 2025 - Cowboy AI, Inc.
//! Wire Conversion
//!
//! Transports only understand the open `(name, metadata)` shape. [`ToWire`]
//! derives that shape from any event type, closed or open.
//!
//! # Naming Conventions
//!
//! ```text
//! Plain:   bookAdded
//! Scoped:  bookList_bookAdded
//!          ───┬───  ────┬────
//!          family    action
//! ```
//!
//! Open [`Event`]s have no family and keep their name under both conventions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::event::{Event, EventName};
use super::metadata::Metadata;

/// How closed events are named on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventNaming {
    /// Action name only
    #[default]
    Plain,

    /// Family prefix, underscore, action name
    Scoped,
}

impl fmt::Display for EventNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventNaming::Plain => write!(f, "plain"),
            EventNaming::Scoped => write!(f, "scoped"),
        }
    }
}

impl FromStr for EventNaming {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(EventNaming::Plain),
            "scoped" => Ok(EventNaming::Scoped),
            other => Err(format!("unknown event naming '{}'", other)),
        }
    }
}

/// Conversion of an event into its wire shape
pub trait ToWire {
    /// Family prefix used by [`EventNaming::Scoped`], `None` for open events
    fn family(&self) -> Option<&'static str>;

    /// Action name
    fn action(&self) -> EventName;

    /// Metadata carried on the wire
    fn wire_metadata(&self) -> Metadata;

    /// Wire shape under [`EventNaming::Plain`]
    fn to_wire(&self) -> Event {
        self.to_wire_with(EventNaming::Plain)
    }

    /// Wire shape under the given naming convention
    fn to_wire_with(&self, naming: EventNaming) -> Event {
        let action = self.action();
        let name = match (naming, self.family()) {
            (EventNaming::Scoped, Some(family)) => action.scoped(family),
            _ => action,
        };

        Event::with_name(name, self.wire_metadata())
    }
}

impl ToWire for Event {
    fn family(&self) -> Option<&'static str> {
        None
    }

    fn action(&self) -> EventName {
        self.event_name().clone()
    }

    fn wire_metadata(&self) -> Metadata {
        self.metadata().clone()
    }

    fn to_wire_with(&self, _naming: EventNaming) -> Event {
        self.clone()
    }
}
