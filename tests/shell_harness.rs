//! Shell integration harness: parsed commands executed against a loaded
//! database, rendered without colour.
//!
//! # Running
//!
//! ```sh
//! cargo test --test shell_harness
//! ```

mod common;
use common::*;

use jsearch::config::DisplayConfig;
use jsearch::shell::theme::Theme;
use jsearch::shell::{Command, Outcome, Session};
use pretty_assertions::assert_eq;

fn session() -> Session {
    Session::new(zendesk().build(), DisplayConfig::default(), Theme::plain())
}

fn run(line: &str) -> String {
    let command = Command::parse(line).expect("valid command");
    let mut out = Vec::new();
    let outcome = session().execute(&command, &mut out).unwrap();
    assert_eq!(outcome, Outcome::Continue);
    String::from_utf8(out).unwrap()
}

#[test]
fn search_line_renders_organization_join() {
    let out = run("search users _id 71");
    insta::assert_snapshot!(out, @r#"
    Searching users for _id = "71"
    _id                 |                                                71
    name                |                               Francisca Rasmussen
    email               |                             francisca@example.com
    organization_id     |                                               104
    role                |                                             admin
    tags                |                               Springville, Sutton
    active              |                                              true
    organizations:
      organization_name |                                           zendesk
    tickets:
      ticket_subject    |                            A Catastrophe in Korea

      ticket_subject    |                               A Nuisance in Ghana

    1 result found.
    "#);
}

#[test]
fn multi_word_values_are_searched_verbatim() {
    let out = run("search tickets subject A Problem in Morocco");
    assert!(out.contains("1 result found."));
    assert!(out.contains("Qualitern"));
}

#[test]
fn empty_value_search() {
    let out = run("search tickets description");
    assert!(out.contains("3 results found."));
}

#[test]
fn miss_renders_no_results() {
    let out = run("search users _id 999");
    assert!(out.ends_with("No results found.\n"));
}

#[test]
fn unknown_table_is_reported() {
    let out = run("search groups _id 1");
    assert!(out.contains("error: table `groups` not found"));
}

#[test]
fn fields_lists_every_table() {
    let out = run("fields");
    for heading in ["organizations:", "tickets:", "users:"] {
        assert!(out.lines().any(|l| l == heading), "missing {heading}");
    }
}
