//! Identifier newtypes for tickets and agents
//!
//! Both ids are sequential integers assigned by the store on first save,
//! never by the caller.

use crate::error::TicketFlowError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(u64);

impl TicketId {
    /// Create a ticket id from a raw value
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TicketId {
    type Err = TicketFlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| TicketFlowError::InvalidInput(format!("Invalid ticket id: '{s}'")))
    }
}

/// Unique identifier for an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(u64);

impl AgentId {
    /// Create an agent id from a raw value
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AgentId {
    type Err = TicketFlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| TicketFlowError::InvalidInput(format!("Invalid agent id: '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_id_display_and_parse() {
        let id = TicketId::new(7);
        assert_eq!(id.to_string(), "7");
        assert_eq!("7".parse::<TicketId>().unwrap(), id);
        assert_eq!(" 7 ".parse::<TicketId>().unwrap(), id);
    }

    #[test]
    fn test_invalid_id_is_rejected() {
        assert!("not-a-number".parse::<TicketId>().is_err());
        assert!("".parse::<AgentId>().is_err());
        assert!("-3".parse::<AgentId>().is_err());
    }

    #[test]
    fn test_ids_order_by_value() {
        assert!(TicketId::new(1) < TicketId::new(2));
    }
}
