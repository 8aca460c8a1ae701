//! Chat shell layout component.

use leptos::prelude::*;

use crate::prefs::Preferences;
use crate::thread::Thread;

use super::{ChatComposer, ChatHeader, ChatMessageList, PreferencesSummary};

/// Main chat surface.
///
/// Composes the chat layout top to bottom: header with actions, the
/// active-filter strip, the scrollable message area, and the composer.
/// All state lives with the caller; this component only wires it through.
#[component]
pub fn ChatShell(
    /// Current preference record.
    #[prop(into)]
    preferences: Signal<Preferences>,
    /// Conversation to display.
    #[prop(into)]
    thread: Signal<Thread>,
    /// True while a request is outstanding.
    #[prop(into)]
    busy: Signal<bool>,
    /// Invoked with each submitted message.
    #[prop(into)]
    on_send: Callback<String>,
    /// Invoked with the edited preference record.
    #[prop(into)]
    on_update_preferences: Callback<Preferences>,
    /// Invoked when the user clears the conversation.
    #[prop(into)]
    on_clear_chat: Callback<()>,
) -> impl IntoView {
    let has_messages = Signal::derive(move || !thread.with(Thread::is_empty));

    view! {
        <div class="flex flex-col h-screen">
            <ChatHeader
                preferences=preferences
                on_update_preferences=on_update_preferences
                on_clear_chat=on_clear_chat
                has_messages=has_messages
            />

            <PreferencesSummary preferences=preferences />

            <ChatMessageList thread=thread />

            <ChatComposer on_send=on_send disabled=busy />
        </div>
    }
}
