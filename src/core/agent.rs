//! Support agent reference
//!
//! Agents are owned by the agent directory; the lifecycle engine only ever
//! reads them.

use super::AgentId;
use serde::{Deserialize, Serialize};

/// A support agent a ticket can be assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Directory-assigned identifier
    pub id: AgentId,
    /// Display name, used by the agent-name filter criterion
    pub name: String,
}

impl Agent {
    /// Create an agent
    pub fn new(id: AgentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_serde_round_trip() {
        let agent = Agent::new(AgentId::new(1), "Agent001");
        let yaml = serde_yaml::to_string(&agent).unwrap();
        let parsed: Agent = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, agent);
    }
}
