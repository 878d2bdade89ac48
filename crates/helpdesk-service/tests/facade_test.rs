//! Integration tests for the domain API facade, run against the
//! in-memory store.

use helpdesk_core::error::HelpdeskError;
use helpdesk_core::models::activity::{ActivityKind, NewActivity};
use helpdesk_core::models::ticket::{DemandType, NewTicket, TicketLabel, TicketPatch, TicketStatus};
use helpdesk_core::models::user::{Permissions, UpdateUser, User};
use helpdesk_service::Helpdesk;
use helpdesk_store::MemoryStore;
use uuid::Uuid;

/// Facade over a fresh in-memory store plus the seeded admin user.
async fn setup() -> (Helpdesk<MemoryStore>, User) {
    let desk = Helpdesk::new(MemoryStore::new());
    let admin = desk.list_users().await.unwrap().remove(0);
    (desk, admin)
}

fn new_ticket() -> NewTicket {
    NewTicket {
        title: "File server slow".into(),
        description: "Transfers crawl after the last patch window".into(),
        client_id: Uuid::new_v4(),
        requester_id: Uuid::new_v4(),
        asset_ids: vec!["220001".into()],
        label: TicketLabel::Network,
        status: TicketStatus::AwaitingService,
        demand: DemandType::IncidentReport,
        assignee_id: None,
    }
}

#[tokio::test]
async fn create_ticket_stamps_and_logs_opening() {
    let (desk, admin) = setup().await;

    let before_tickets = desk.list_tickets().await.unwrap().len();
    let ticket = desk.create_ticket(new_ticket(), &admin).await.unwrap();

    let tickets = desk.list_tickets().await.unwrap();
    assert_eq!(tickets.len(), before_tickets + 1);

    assert_eq!(ticket.created_at, ticket.updated_at);
    assert_eq!(ticket.last_updated_by.id, admin.id);
    assert_eq!(ticket.last_updated_by.name, admin.name);
    assert!(ticket.attachments.is_empty());

    let activities = desk.activities_for(ticket.id).await.unwrap();
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].kind, ActivityKind::StatusChange);
    assert_eq!(activities[0].ticket_id, ticket.id);
}

#[tokio::test]
async fn status_change_appends_exactly_one_activity() {
    let (desk, admin) = setup().await;
    let ticket = desk.create_ticket(new_ticket(), &admin).await.unwrap();

    let updated = desk
        .update_ticket(
            ticket.id,
            TicketPatch {
                status: Some(TicketStatus::InService),
                ..Default::default()
            },
            &admin,
        )
        .await
        .unwrap();
    assert_eq!(updated.status, TicketStatus::InService);

    let activities = desk.activities_for(ticket.id).await.unwrap();
    // Opening entry + one transition entry.
    assert_eq!(activities.len(), 2);
    let last = activities.last().unwrap();
    assert_eq!(last.kind, ActivityKind::StatusChange);
    assert!(last.content.contains(TicketStatus::AwaitingService.label()));
    assert!(last.content.contains(TicketStatus::InService.label()));
}

#[tokio::test]
async fn unchanged_or_absent_status_appends_nothing() {
    let (desk, admin) = setup().await;
    let ticket = desk.create_ticket(new_ticket(), &admin).await.unwrap();

    // Same status explicitly provided.
    desk.update_ticket(
        ticket.id,
        TicketPatch {
            status: Some(ticket.status),
            ..Default::default()
        },
        &admin,
    )
    .await
    .unwrap();

    // Status omitted entirely.
    desk.update_ticket(
        ticket.id,
        TicketPatch {
            title: Some("File server very slow".into()),
            ..Default::default()
        },
        &admin,
    )
    .await
    .unwrap();

    let activities = desk.activities_for(ticket.id).await.unwrap();
    assert_eq!(activities.len(), 1, "only the opening entry");
}

#[tokio::test]
async fn update_merges_only_provided_fields() {
    let (desk, admin) = setup().await;
    let ticket = desk.create_ticket(new_ticket(), &admin).await.unwrap();
    let agent = desk.list_users().await.unwrap().remove(1);

    let updated = desk
        .update_ticket(
            ticket.id,
            TicketPatch {
                title: Some("Renamed".into()),
                ..Default::default()
            },
            &agent,
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.description, ticket.description);
    assert_eq!(updated.status, ticket.status);
    // last_updated_by is overwritten regardless of the fields touched.
    assert_eq!(updated.last_updated_by.id, agent.id);
    assert!(updated.updated_at >= updated.created_at);
}

#[tokio::test]
async fn assignee_can_be_set_and_cleared() {
    let (desk, admin) = setup().await;
    let ticket = desk.create_ticket(new_ticket(), &admin).await.unwrap();

    let assigned = desk
        .update_ticket(
            ticket.id,
            TicketPatch {
                assignee_id: Some(Some(admin.id)),
                ..Default::default()
            },
            &admin,
        )
        .await
        .unwrap();
    assert_eq!(assigned.assignee_id, Some(admin.id));

    let cleared = desk
        .update_ticket(
            ticket.id,
            TicketPatch {
                assignee_id: Some(None),
                ..Default::default()
            },
            &admin,
        )
        .await
        .unwrap();
    assert_eq!(cleared.assignee_id, None);
}

#[tokio::test]
async fn update_unknown_ticket_is_not_found() {
    let (desk, admin) = setup().await;
    let result = desk
        .update_ticket(Uuid::new_v4(), TicketPatch::default(), &admin)
        .await;
    assert!(matches!(result, Err(HelpdeskError::NotFound { .. })));
}

#[tokio::test]
async fn comments_keep_insertion_order() {
    let (desk, admin) = setup().await;
    let ticket = desk.create_ticket(new_ticket(), &admin).await.unwrap();

    for content in ["first", "second", "third"] {
        desk.add_activity(NewActivity {
            ticket_id: ticket.id,
            author: admin.user_ref(),
            content: content.into(),
            kind: ActivityKind::Comment,
        })
        .await
        .unwrap();
    }

    let activities = desk.activities_for(ticket.id).await.unwrap();
    let contents: Vec<&str> = activities
        .iter()
        .skip(1) // opening entry
        .map(|a| a.content.as_str())
        .collect();
    assert_eq!(contents, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn comment_on_unknown_ticket_is_not_found() {
    let (desk, admin) = setup().await;
    let result = desk
        .add_activity(NewActivity {
            ticket_id: Uuid::new_v4(),
            author: admin.user_ref(),
            content: "lost".into(),
            kind: ActivityKind::Comment,
        })
        .await;
    assert!(matches!(result, Err(HelpdeskError::NotFound { .. })));
}

#[tokio::test]
async fn login_is_case_insensitive() {
    let (desk, admin) = setup().await;

    let user = desk.login(&admin.email.to_uppercase()).await.unwrap();
    assert_eq!(user.id, admin.id);

    let session = desk.current_session().await.unwrap().unwrap();
    assert_eq!(session.id, admin.id);
}

#[tokio::test]
async fn login_unknown_email_fails() {
    let (desk, _) = setup().await;
    let result = desk.login("missing@horizonte.net.br").await;
    assert!(matches!(result, Err(HelpdeskError::InvalidCredentials)));
    assert!(desk.current_session().await.unwrap().is_none());
}

#[tokio::test]
async fn logout_clears_the_session() {
    let (desk, admin) = setup().await;
    desk.login(&admin.email).await.unwrap();
    desk.logout().await.unwrap();
    assert!(desk.current_session().await.unwrap().is_none());
}

#[tokio::test]
async fn permission_update_round_trips_into_session() {
    let (desk, admin) = setup().await;
    desk.login(&admin.email).await.unwrap();

    let mut permissions = admin.permissions;
    permissions.can_view_admin = false;
    desk.update_user(
        admin.id,
        UpdateUser {
            permissions: Some(permissions),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let listed = desk
        .list_users()
        .await
        .unwrap()
        .into_iter()
        .find(|u| u.id == admin.id)
        .unwrap();
    assert!(!listed.permissions.can_view_admin);

    // The active session resolves by id, so it sees the change at once.
    let session = desk.current_session().await.unwrap().unwrap();
    assert!(!session.permissions.can_view_admin);
}

#[tokio::test]
async fn update_unknown_user_is_not_found() {
    let (desk, _) = setup().await;
    let result = desk
        .update_user(
            Uuid::new_v4(),
            UpdateUser {
                permissions: Some(Permissions::default()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(HelpdeskError::NotFound { .. })));
}

#[tokio::test]
async fn seed_catalogs_are_consistent() {
    let (desk, _) = setup().await;

    let clients = desk.list_clients().await.unwrap();
    let assets = desk.list_assets().await.unwrap();
    assert!(!clients.is_empty());
    assert!(!assets.is_empty());

    // Every asset belongs to a seeded client; every client has
    // requesters to populate ticket forms from.
    for asset in &assets {
        assert!(clients.iter().any(|c| c.id == asset.client_id));
    }
    for client in &clients {
        assert!(!client.requesters.is_empty());
    }

    // Unseeded reads are stable across calls.
    let again = desk.list_clients().await.unwrap();
    assert_eq!(
        clients.iter().map(|c| c.id).collect::<Vec<_>>(),
        again.iter().map(|c| c.id).collect::<Vec<_>>()
    );
}
