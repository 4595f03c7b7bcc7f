//! Lists public GitHub events, then the events of a single user.
//!
//! Run with: `cargo run -p fluent-rest --example github_events -- <username>`

use fluent_rest::{Error, MediaType, RestClient};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Event {
    #[serde(rename = "type")]
    kind: String,
    public: bool,
    payload: serde_json::Value,
    repo: Repository,
    actor: Actor,
    #[serde(default)]
    org: Option<Actor>,
    created_at: String,
    id: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Repository {
    id: u64,
    name: String,
    url: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Actor {
    id: u64,
    login: String,
    gravatar_id: String,
    avatar_url: String,
    url: String,
}

/// GitHub's error body, e.g. for an unknown user.
#[derive(Debug, Default, Deserialize)]
struct ApiMessage {
    message: String,
}

fn github() -> RestClient {
    RestClient::new("https://api.github.com/")
        .accept(MediaType::Json)
        .header("User-Agent", "fluent-rest-example")
}

/// GET /events
fn events(events: &mut Vec<Event>) -> Result<(), Error> {
    github().path(["events"]).get(&mut [events])?;
    Ok(())
}

/// GET /users/:username/events
///
/// Either the event list or an error message decodes, depending on
/// whether the user exists.
fn user_events(username: &str, events: &mut Vec<Event>, message: &mut ApiMessage) -> Result<(), Error> {
    github()
        .path(["users", username, "events"])
        .get(&mut [events, message])?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = std::env::args().nth(1).unwrap_or_else(|| "octocat".to_string());

    let mut all_events = Vec::new();
    events(&mut all_events)?;

    if let Some(first) = all_events.first() {
        println!("First event: {first:?}\n");
    }
    println!("All events:\n{}\n", serde_json::to_string_pretty(&all_events)?);

    let mut users_events = Vec::new();
    let mut message = ApiMessage::default();
    user_events(&username, &mut users_events, &mut message)?;

    if !message.message.is_empty() {
        println!("GitHub says: {}", message.message);
    } else {
        println!(
            "Events for {username}:\n{}",
            serde_json::to_string_pretty(&users_events)?
        );
    }

    Ok(())
}
