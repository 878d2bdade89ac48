//! Seed reference data.
//!
//! Returned by reads whose storage key has never been written. Ids are
//! fixed so that repeated unseeded reads agree with each other — a
//! session persisted against a seed user must still resolve on the
//! next read.

use helpdesk_core::models::asset::Asset;
use helpdesk_core::models::client::{Client, Requester};
use helpdesk_core::models::user::{Permissions, User, UserRole};
use uuid::Uuid;

const ADMIN_ID: Uuid = Uuid::from_u128(0x01);
const AGENT_RAFAEL_ID: Uuid = Uuid::from_u128(0x02);
const AGENT_TIAGO_ID: Uuid = Uuid::from_u128(0x03);

const CLIENT_BANK_ID: Uuid = Uuid::from_u128(0x10);
const CLIENT_LOGISTICS_ID: Uuid = Uuid::from_u128(0x11);
const CLIENT_MARKET_ID: Uuid = Uuid::from_u128(0x12);

pub fn initial_users() -> Vec<User> {
    vec![
        User {
            id: ADMIN_ID,
            name: "Gabriela Rocha".into(),
            email: "gabriela@horizonte.net.br".into(),
            role: UserRole::Admin,
            permissions: Permissions::all(),
        },
        User {
            id: AGENT_RAFAEL_ID,
            name: "Rafael Lima".into(),
            email: "rafael@horizonte.net.br".into(),
            role: UserRole::Agent,
            permissions: Permissions {
                can_view_dashboard: true,
                can_view_tickets: true,
                can_view_assets: true,
                ..Default::default()
            },
        },
        User {
            id: AGENT_TIAGO_ID,
            name: "Tiago Costa".into(),
            email: "tiago@horizonte.net.br".into(),
            role: UserRole::Agent,
            permissions: Permissions {
                can_view_dashboard: true,
                can_view_tickets: true,
                ..Default::default()
            },
        },
    ]
}

pub fn initial_clients() -> Vec<Client> {
    vec![
        Client {
            id: CLIENT_BANK_ID,
            name: "Banco Meridional".into(),
            contact_person: "Maria Andrade".into(),
            requesters: requesters(0x100, &["Maria Andrade", "Carlos Nunes", "Felipe Santos"]),
        },
        Client {
            id: CLIENT_LOGISTICS_ID,
            name: "Transportes Alvorada".into(),
            contact_person: "João Mendes".into(),
            requesters: requesters(0x110, &["João Mendes", "Beatriz Souza", "Ricardo Prado"]),
        },
        Client {
            id: CLIENT_MARKET_ID,
            name: "Mercado Aurora".into(),
            contact_person: "Ana Paula Dias".into(),
            requesters: requesters(0x120, &["Ana Paula Dias", "Marcos Leite", "Patrícia Gomes"]),
        },
    ]
}

pub fn initial_assets() -> Vec<Asset> {
    let specs: [(&str, Uuid, &str, &str, &str, &str); 6] = [
        ("220001", CLIENT_BANK_ID, "Server", "Dell", "PowerEdge R740", "SN-BM-001"),
        ("220002", CLIENT_BANK_ID, "Switch", "Cisco", "Catalyst 2960", "SN-BM-002"),
        ("220003", CLIENT_LOGISTICS_ID, "Desktop", "HP", "EliteDesk 800", "SN-TA-101"),
        ("220004", CLIENT_LOGISTICS_ID, "Notebook", "Lenovo", "ThinkPad T14", "SN-TA-102"),
        ("220005", CLIENT_MARKET_ID, "NVR", "Intelbras", "NVR 5000", "SN-MA-501"),
        ("220006", CLIENT_MARKET_ID, "IP Camera", "Hikvision", "DS-2CD", "SN-MA-502"),
    ];
    specs
        .into_iter()
        .map(|(id, client_id, kind, brand, model, serial)| Asset {
            id: id.into(),
            client_id,
            kind: kind.into(),
            brand: brand.into(),
            model: model.into(),
            serial_number: serial.into(),
            last_maintenance: None,
        })
        .collect()
}

fn requesters(base: u128, names: &[&str]) -> Vec<Requester> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Requester {
            id: Uuid::from_u128(base + i as u128),
            name: (*name).into(),
        })
        .collect()
}
