//! Multi-criteria ticket filter
//!
//! A filter is a conjunction of optional criteria; criteria that are absent
//! simply drop out of the conjunction. An empty filter matches every
//! ticket.

use super::{Status, Ticket};
use chrono::{DateTime, Utc};

/// Filter criteria for listing tickets
///
/// Date bounds apply to the creation timestamp and are inclusive on both
/// ends. No validation that `since <= until` is performed; an inverted
/// range matches nothing.
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    /// Statuses to include; empty means no status criterion
    pub statuses: Vec<Status>,
    /// Lower creation-time bound, inclusive
    pub since: Option<DateTime<Utc>>,
    /// Upper creation-time bound, inclusive
    pub until: Option<DateTime<Utc>>,
    /// Assigned agent name to match exactly; blank means no criterion
    pub assigned_agent: Option<String>,
}

impl TicketFilter {
    /// Check whether a ticket matches every present criterion
    #[must_use]
    pub fn matches(&self, ticket: &Ticket) -> bool {
        if !self.statuses.is_empty() && !self.statuses.contains(&ticket.status) {
            return false;
        }

        match (self.since, self.until) {
            (Some(since), Some(until)) => {
                if ticket.created_at < since || ticket.created_at > until {
                    return false;
                }
            },
            (Some(since), None) => {
                if ticket.created_at < since {
                    return false;
                }
            },
            (None, Some(until)) => {
                if ticket.created_at > until {
                    return false;
                }
            },
            (None, None) => {},
        }

        if let Some(name) = self.agent_criterion() {
            if ticket.assigned_agent_name() != Some(name) {
                return false;
            }
        }

        true
    }

    /// The agent-name criterion, with blank input treated as absent
    fn agent_criterion(&self) -> Option<&str> {
        self.assigned_agent
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Agent, AgentId, TicketBuilder};
    use chrono::Duration;

    fn ticket_created_days_ago(days: i64) -> Ticket {
        TicketBuilder::new()
            .description("ticket")
            .created_at(Utc::now() - Duration::days(days))
            .build()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = TicketFilter::default();
        assert!(filter.matches(&ticket_created_days_ago(0)));
        assert!(filter.matches(&ticket_created_days_ago(100)));
    }

    #[test]
    fn test_status_criterion() {
        let filter = TicketFilter {
            statuses: vec![Status::InProgress, Status::Resolved],
            ..Default::default()
        };

        let ticket = TicketBuilder::new().status(Status::InProgress).build();
        assert!(filter.matches(&ticket));

        let ticket = TicketBuilder::new().status(Status::New).build();
        assert!(!filter.matches(&ticket));
    }

    #[test]
    fn test_both_bounds_are_inclusive_between() {
        let now = Utc::now();
        let filter = TicketFilter {
            since: Some(now - Duration::days(3)),
            until: Some(now),
            ..Default::default()
        };

        assert!(filter.matches(&ticket_created_days_ago(0)));
        assert!(filter.matches(&ticket_created_days_ago(2)));
        assert!(!filter.matches(&ticket_created_days_ago(4)));
    }

    #[test]
    fn test_only_since_means_greater_or_equal() {
        let boundary = Utc::now() - Duration::days(3);
        let filter = TicketFilter {
            since: Some(boundary),
            ..Default::default()
        };

        assert!(filter.matches(&ticket_created_days_ago(1)));
        let on_boundary = TicketBuilder::new().created_at(boundary).build();
        assert!(filter.matches(&on_boundary));
        assert!(!filter.matches(&ticket_created_days_ago(5)));
    }

    #[test]
    fn test_only_until_means_less_or_equal() {
        let boundary = Utc::now() - Duration::days(3);
        let filter = TicketFilter {
            until: Some(boundary),
            ..Default::default()
        };

        assert!(filter.matches(&ticket_created_days_ago(5)));
        let on_boundary = TicketBuilder::new().created_at(boundary).build();
        assert!(filter.matches(&on_boundary));
        assert!(!filter.matches(&ticket_created_days_ago(1)));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let now = Utc::now();
        let filter = TicketFilter {
            since: Some(now),
            until: Some(now - Duration::days(3)),
            ..Default::default()
        };

        for days in 0..6 {
            assert!(!filter.matches(&ticket_created_days_ago(days)));
        }
    }

    #[test]
    fn test_agent_name_criterion() {
        let filter = TicketFilter {
            assigned_agent: Some("Agent002".to_string()),
            ..Default::default()
        };

        let assigned = TicketBuilder::new()
            .status(Status::InProgress)
            .assigned_agent(Agent::new(AgentId::new(2), "Agent002"))
            .build();
        assert!(filter.matches(&assigned));

        let other = TicketBuilder::new()
            .status(Status::InProgress)
            .assigned_agent(Agent::new(AgentId::new(1), "Agent001"))
            .build();
        assert!(!filter.matches(&other));

        let unassigned = TicketBuilder::new().build();
        assert!(!filter.matches(&unassigned));
    }

    #[test]
    fn test_blank_agent_name_is_no_criterion() {
        let filter = TicketFilter {
            assigned_agent: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&ticket_created_days_ago(0)));
    }

    #[test]
    fn test_criteria_combine_as_conjunction() {
        let now = Utc::now();
        let filter = TicketFilter {
            statuses: vec![Status::InProgress],
            since: Some(now - Duration::days(3)),
            until: Some(now),
            assigned_agent: Some("Agent002".to_string()),
        };

        let matching = TicketBuilder::new()
            .status(Status::InProgress)
            .created_at(now - Duration::days(1))
            .assigned_agent(Agent::new(AgentId::new(2), "Agent002"))
            .build();
        assert!(filter.matches(&matching));

        let wrong_status = TicketBuilder::new()
            .status(Status::Resolved)
            .created_at(now - Duration::days(1))
            .assigned_agent(Agent::new(AgentId::new(2), "Agent002"))
            .build();
        assert!(!filter.matches(&wrong_status));
    }
}
