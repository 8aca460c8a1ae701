use std::time::Duration;

use axum_test::TestServer;
use leptos::prelude::*;

use maanasa::prefs::Preferences;
use maanasa::server;
use maanasa::thread::Thread;
use maanasa::ui::chat::{ChatComposer, ChatHeader, ChatMessageList, PreferencesSummary};

/// Run a render closure under its own reactive owner, as the server does
/// per request.
fn render(f: impl FnOnce() -> String) -> String {
    let owner = Owner::new();
    let html = owner.with(f);
    drop(owner);
    html
}

fn spicy_prefs() -> Preferences {
    Preferences {
        spice_level: "spicy".to_string(),
        preferred_cuisines: vec![
            "south_indian".to_string(),
            "bengali".to_string(),
            "gujarati".to_string(),
        ],
        allergies: vec!["nuts".to_string()],
        health_goals: vec![
            "low_carb".to_string(),
            "low_sugar".to_string(),
            "vegan".to_string(),
        ],
        ..Preferences::default()
    }
}

#[test]
fn test_summary_renders_nothing_at_defaults() {
    let html = render(|| {
        view! { <PreferencesSummary preferences=Preferences::default() /> }.to_html()
    });
    assert!(!html.contains("Active filters:"));
}

#[test]
fn test_summary_lists_expected_chips() {
    let html = render(|| view! { <PreferencesSummary preferences=spicy_prefs() /> }.to_html());

    assert!(html.contains("Active filters:"));
    assert!(html.contains("Spicy"));
    assert!(html.contains("South Indian"));
    assert!(html.contains("Bengali"));
    assert!(html.contains("+1 more"));
    assert!(html.contains("No nuts"));
    assert!(html.contains("low carb"));
    assert!(html.contains("low sugar"));
    // Third cuisine is folded into the overflow chip, third goal is
    // silently dropped.
    assert!(!html.contains("Gujarati"));
    assert!(!html.contains("vegan"));
}

#[test]
fn test_summary_displays_unknown_spice_raw() {
    let prefs = Preferences {
        spice_level: "volcanic".to_string(),
        ..Preferences::default()
    };
    let html = render(|| view! { <PreferencesSummary preferences=prefs /> }.to_html());
    assert!(html.contains("volcanic"));
}

#[test]
fn test_header_hides_clear_chat_without_messages() {
    let html = render(|| {
        view! {
            <ChatHeader
                preferences=Preferences::default()
                on_update_preferences=Callback::new(|_| {})
                on_clear_chat=Callback::new(|()| {})
                has_messages=false
            />
        }
        .to_html()
    });
    assert!(html.contains("Maanasa"));
    assert!(html.contains("System Online"));
    assert!(!html.contains("Clear Chat"));
}

#[test]
fn test_header_shows_clear_chat_with_messages() {
    let html = render(|| {
        view! {
            <ChatHeader
                preferences=Preferences::default()
                on_update_preferences=Callback::new(|_| {})
                on_clear_chat=Callback::new(|()| {})
                has_messages=true
            />
        }
        .to_html()
    });
    assert!(html.contains("Clear Chat"));
}

#[test]
fn test_composer_swaps_send_icon_for_spinner_while_busy() {
    let idle = render(|| {
        view! { <ChatComposer on_send=Callback::new(|_| {}) disabled=false /> }.to_html()
    });
    assert!(!idle.contains("animate-spin"));

    let busy = render(|| {
        view! { <ChatComposer on_send=Callback::new(|_| {}) disabled=true /> }.to_html()
    });
    assert!(busy.contains("animate-spin"));
    assert!(busy.contains("disabled"));
}

#[test]
fn test_message_list_empty_state() {
    let html = render(|| view! { <ChatMessageList thread=Thread::new() /> }.to_html());
    assert!(html.contains("Namaste!"));
}

#[test]
fn test_message_list_renders_messages() {
    let mut thread = Thread::new();
    thread.push_user("What should I cook tonight?");
    thread.push_assistant("How about a Gujarati kadhi with khichdi?");

    let html = render(|| view! { <ChatMessageList thread=thread /> }.to_html());
    assert!(html.contains("What should I cook tonight?"));
    assert!(html.contains("Gujarati kadhi"));
    assert!(!html.contains("Namaste!"));
}

#[tokio::test]
async fn test_index_serves_app_shell() {
    let server = TestServer::new(server::router(Duration::from_secs(30)))
        .expect("router should start");

    let response = server.get("/").await;
    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("Maanasa"));
    assert!(body.contains("Ask about Indian dishes"));
    assert!(body.contains("System Online"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = TestServer::new(server::router(Duration::from_secs(30)))
        .expect("router should start");

    let response = server.get("/definitely-not-here").await;
    assert_eq!(response.status_code(), 404);
}
