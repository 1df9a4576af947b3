//! Static zendesk-shaped fixtures used across harnesses.

use jsearch::TableSchema;
use serde_json::{json, Value};

use super::builders::{fk, DatabaseBuilder};

pub fn users_json() -> Value {
    json!([
        {
            "_id": 71, "name": "Francisca Rasmussen", "email": "francisca@example.com",
            "organization_id": 104, "role": "admin", "tags": ["Springville", "Sutton"],
            "active": true
        },
        {
            "_id": 72, "name": "Cross Barlow", "email": "cross@example.com",
            "organization_id": 106, "role": "agent", "tags": ["Foxworth"], "active": false
        },
        {
            "_id": 73, "name": "Ingrid Wagner", "organization_id": 104, "role": "end-user",
            "tags": [], "active": true
        },
        { "_id": 74, "name": "Rose Newton", "role": "admin", "active": true }
    ])
}

pub fn organizations_json() -> Value {
    json!([
        { "_id": 104, "name": "zendesk", "domain_names": ["zendesk.com"] },
        { "_id": 106, "name": "Qualitern", "domain_names": ["qualitern.com"] },
        { "_id": 107, "name": "Kage" }
    ])
}

pub fn tickets_json() -> Value {
    json!([
        {
            "_id": "436bf9b0-1147-4c0a-8439-6f79833bff5b", "subject": "A Catastrophe in Korea",
            "submitter_id": 71, "assignee_id": 72, "organization_id": 104, "status": "pending"
        },
        {
            "_id": "1a227508-9f39-427c-8f57-1b72f3fab87c", "subject": "A Problem in Morocco",
            "submitter_id": 72, "organization_id": 106, "status": "open"
        },
        {
            "_id": "2217c7dc-7371-4401-8738-0a8a8aedc08d", "subject": "A Nuisance in Ghana",
            "submitter_id": 71, "assignee_id": 99, "status": "hold", "description": ""
        }
    ])
}

pub fn users_schema() -> TableSchema {
    TableSchema::new("users")
        .primary_key("_id")
        .index(["_id", "organization_id"])
        .foreign_key(fk("organization_id", "organizations", "_id", &[("name", "organization_name")]))
        .foreign_key(fk("_id", "tickets", "submitter_id", &[("subject", "ticket_subject")]))
}

pub fn organizations_schema() -> TableSchema {
    TableSchema::new("organizations").primary_key("_id")
}

pub fn tickets_schema() -> TableSchema {
    TableSchema::new("tickets")
        .primary_key("_id")
        .index(["submitter_id", "organization_id"])
        .foreign_key(fk(
            "submitter_id",
            "users",
            "_id",
            &[("name", "user_name"), ("email", "user_email")],
        ))
        .foreign_key(
            fk("assignee_id", "users", "_id", &[("name", "assignee_name")]).named("assignee"),
        )
        .foreign_key(fk("organization_id", "organizations", "_id", &[("name", "organization_name")]))
}

/// The three zendesk tables, all present.
pub fn zendesk() -> DatabaseBuilder {
    DatabaseBuilder::new()
        .table(users_schema(), users_json())
        .table(organizations_schema(), organizations_json())
        .table(tickets_schema(), tickets_json())
}

/// Write the zendesk snapshots into `dir` as `<table>.json`.
pub fn write_snapshots(dir: &std::path::Path) -> std::io::Result<()> {
    for (name, rows) in [
        ("users", users_json()),
        ("organizations", organizations_json()),
        ("tickets", tickets_json()),
    ] {
        let body = serde_json::to_string_pretty(&rows).map_err(std::io::Error::other)?;
        std::fs::write(dir.join(format!("{name}.json")), body)?;
    }
    Ok(())
}
