//! Main application component.

use leptos::prelude::*;

use crate::prefs::Preferences;
use crate::thread::Thread;
use crate::ui::chat::ChatShell;

/// Main application component.
///
/// Owns the coordinator state (conversation thread, busy flag, preference
/// record) and wires the chat components' callbacks to it. Message
/// transport lives behind `on_send`; this shell keeps the conversation
/// local. The busy flag flips only here, never inside the composer.
#[component]
pub fn App() -> impl IntoView {
    let thread = RwSignal::new(Thread::new());
    let busy = RwSignal::new(false);
    let preferences = RwSignal::new(Preferences::default());

    let on_send = Callback::new(move |message: String| {
        thread.update(|t| t.push_user(message));
    });
    let on_update_preferences = Callback::new(move |next: Preferences| preferences.set(next));
    let on_clear_chat = Callback::new(move |()| thread.update(Thread::clear));

    view! {
        <!doctype html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content="Maanasa - Indian food recommendation assistant" />

                <title>"Maanasa - Indian Food Expert"</title>

                <link rel="stylesheet" href="/static/app.css" />
            </head>

            <body class="min-h-screen bg-background text-textPrimary antialiased">
                <ChatShell
                    preferences=preferences
                    thread=thread
                    busy=busy
                    on_send=on_send
                    on_update_preferences=on_update_preferences
                    on_clear_chat=on_clear_chat
                />
            </body>
        </html>
    }
}
