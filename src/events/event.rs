// Copyright (c) 2025 - Cowboy AI, Inc.
//! Open Event
//!
//! The open form of an analytics event: a validated name plus arbitrary
//! metadata. This is also the wire shape every transport receives; closed
//! event families convert into it through [`ToWire`](super::ToWire).

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

use super::metadata::Metadata;

/// Event construction error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event name is empty")]
    EmptyName,
}

/// Non-empty event name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventName(Cow<'static, str>);

impl EventName {
    /// Create a new event name
    ///
    /// # Invariants
    /// - Non-empty
    pub fn new(name: impl Into<String>) -> Result<Self, EventError> {
        let name = name.into();

        if name.is_empty() {
            return Err(EventError::EmptyName);
        }

        Ok(Self(Cow::Owned(name)))
    }

    /// Name known at compile time
    ///
    /// Evaluated in a const context, an empty name fails the build.
    pub const fn from_static(name: &'static str) -> Self {
        assert!(!name.is_empty(), "event name is empty");
        Self(Cow::Borrowed(name))
    }

    /// Prefix this name with an event family: `family_name`
    pub fn scoped(&self, family: &str) -> Self {
        Self(Cow::Owned(format!("{}_{}", family, self.0)))
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EventName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EventName {
    type Error = EventError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EventName {
    type Error = EventError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EventName> for String {
    fn from(value: EventName) -> Self {
        value.0.into_owned()
    }
}

/// An immutable, named record of something that happened
///
/// Fields are private: once built, an event cannot be changed.
///
/// ```rust
/// use library_analytics::events::{metadata, Event};
///
/// let event = Event::new("bookAdded", metadata([("book", "Dune")])).unwrap();
/// assert_eq!(event.name(), "bookAdded");
///
/// assert!(Event::new("", metadata::<&str, &str, _>([])).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    name: EventName,
    metadata: Metadata,
}

impl Event {
    /// Create an event, rejecting an empty name
    pub fn new(name: impl Into<String>, metadata: Metadata) -> Result<Self, EventError> {
        Ok(Self {
            name: EventName::new(name)?,
            metadata,
        })
    }

    /// Create an event from an already validated name
    pub fn with_name(name: EventName, metadata: Metadata) -> Self {
        Self { name, metadata }
    }

    /// Event name
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Validated event name
    pub fn event_name(&self) -> &EventName {
        &self.name
    }

    /// Event metadata
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Split into the `(name, metadata)` wire pair
    pub fn into_parts(self) -> (EventName, Metadata) {
        (self.name, self.metadata)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for (key, value) in &self.metadata {
            write!(f, " {}={}", key, value)?;
        }
        Ok(())
    }
}
