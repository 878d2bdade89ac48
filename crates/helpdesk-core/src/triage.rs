//! Ticket triage: status buckets for list filtering and dashboard
//! counts.
//!
//! Buckets are a pure derived view over `status` — recomputed from
//! scratch on every read, never maintained incrementally. `Open` and
//! `Closed` partition the full collection; `InProgress` and `Waiting`
//! are finer slices of `Open`.

use serde::{Deserialize, Serialize};

use crate::models::ticket::{Ticket, TicketStatus};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TicketBucket {
    Open,
    InProgress,
    Waiting,
    Closed,
    All,
}

impl TicketBucket {
    pub fn contains(self, status: TicketStatus) -> bool {
        match self {
            Self::Open => !status.is_closed(),
            Self::InProgress => {
                matches!(status, TicketStatus::InService | TicketStatus::Scheduled)
            }
            Self::Waiting => matches!(
                status,
                TicketStatus::AwaitingClient | TicketStatus::PreparingQuote
            ),
            Self::Closed => status.is_closed(),
            Self::All => true,
        }
    }
}

/// Tickets belonging to `bucket`, in collection order.
pub fn filter(tickets: &[Ticket], bucket: TicketBucket) -> Vec<&Ticket> {
    tickets
        .iter()
        .filter(|t| bucket.contains(t.status))
        .collect()
}

/// Aggregate per-bucket counts for the dashboard.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BucketCounts {
    pub open: usize,
    pub in_progress: usize,
    pub waiting: usize,
    pub closed: usize,
    pub all: usize,
}

pub fn counts(tickets: &[Ticket]) -> BucketCounts {
    let mut c = BucketCounts {
        all: tickets.len(),
        ..Default::default()
    };
    for t in tickets {
        if TicketBucket::Open.contains(t.status) {
            c.open += 1;
        }
        if TicketBucket::InProgress.contains(t.status) {
            c.in_progress += 1;
        }
        if TicketBucket::Waiting.contains(t.status) {
            c.waiting += 1;
        }
        if TicketBucket::Closed.contains(t.status) {
            c.closed += 1;
        }
    }
    c
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::models::ticket::{DemandType, TicketLabel};
    use crate::models::user::UserRef;

    const ALL_STATUSES: [TicketStatus; 7] = [
        TicketStatus::AwaitingService,
        TicketStatus::InService,
        TicketStatus::AwaitingClient,
        TicketStatus::PreparingQuote,
        TicketStatus::Scheduled,
        TicketStatus::Completed,
        TicketStatus::Cancelled,
    ];

    fn ticket(status: TicketStatus) -> Ticket {
        let now = Utc::now();
        Ticket {
            id: Uuid::new_v4(),
            title: "t".into(),
            description: "d".into(),
            client_id: Uuid::new_v4(),
            requester_id: Uuid::new_v4(),
            asset_ids: Vec::new(),
            label: TicketLabel::Network,
            status,
            demand: DemandType::IncidentReport,
            assignee_id: None,
            last_updated_by: UserRef {
                id: Uuid::new_v4(),
                name: "agent".into(),
            },
            created_at: now,
            updated_at: now,
            attachments: Vec::new(),
        }
    }

    #[test]
    fn open_and_closed_partition_every_status() {
        for status in ALL_STATUSES {
            let open = TicketBucket::Open.contains(status);
            let closed = TicketBucket::Closed.contains(status);
            assert_ne!(open, closed, "{status:?} must be in exactly one of open/closed");
        }
    }

    #[test]
    fn open_union_closed_is_the_full_set() {
        let tickets: Vec<Ticket> = ALL_STATUSES.into_iter().map(ticket).collect();
        let open = filter(&tickets, TicketBucket::Open);
        let closed = filter(&tickets, TicketBucket::Closed);
        assert_eq!(open.len() + closed.len(), tickets.len());
    }

    #[test]
    fn in_progress_and_waiting_are_open_subsets() {
        for status in ALL_STATUSES {
            if TicketBucket::InProgress.contains(status) || TicketBucket::Waiting.contains(status)
            {
                assert!(TicketBucket::Open.contains(status));
            }
        }
    }

    #[test]
    fn bucket_membership_matches_statuses() {
        assert!(TicketBucket::InProgress.contains(TicketStatus::InService));
        assert!(TicketBucket::InProgress.contains(TicketStatus::Scheduled));
        assert!(TicketBucket::Waiting.contains(TicketStatus::AwaitingClient));
        assert!(TicketBucket::Waiting.contains(TicketStatus::PreparingQuote));
        assert!(TicketBucket::Closed.contains(TicketStatus::Completed));
        assert!(TicketBucket::Closed.contains(TicketStatus::Cancelled));
        assert!(!TicketBucket::InProgress.contains(TicketStatus::AwaitingService));
    }

    #[test]
    fn counts_agree_with_filter() {
        let tickets: Vec<Ticket> = ALL_STATUSES
            .into_iter()
            .chain(ALL_STATUSES)
            .map(ticket)
            .collect();
        let c = counts(&tickets);
        assert_eq!(c.open, filter(&tickets, TicketBucket::Open).len());
        assert_eq!(
            c.in_progress,
            filter(&tickets, TicketBucket::InProgress).len()
        );
        assert_eq!(c.waiting, filter(&tickets, TicketBucket::Waiting).len());
        assert_eq!(c.closed, filter(&tickets, TicketBucket::Closed).len());
        assert_eq!(c.all, tickets.len());
    }
}
