//! Chat message list component.

use leptos::prelude::*;

use crate::thread::{Message, MessageRole, Thread};
use crate::ui::components::{Avatar, BotIcon, ScrollArea, UserIcon};

fn message_view(message: Message) -> impl IntoView {
    let is_user = message.role == MessageRole::User;

    let row = if is_user {
        "flex gap-3 justify-end"
    } else {
        "flex gap-3"
    };
    let bubble = if is_user {
        "max-w-[75%] rounded-2xl rounded-tr-sm bg-gradient-to-br from-orange-500/90 \
         to-amber-600/90 px-4 py-2.5 text-sm text-white whitespace-pre-wrap"
    } else {
        "max-w-[75%] rounded-2xl rounded-tl-sm bg-panel border border-panelBorder \
         px-4 py-2.5 text-sm text-textPrimary whitespace-pre-wrap"
    };

    view! {
        <div class=row>
            {(!is_user).then(|| view! {
                <Avatar><BotIcon class="h-4 w-4 text-orange-400" /></Avatar>
            })}
            <div class=bubble>{message.content}</div>
            {is_user.then(|| view! {
                <Avatar><UserIcon class="h-4 w-4 text-textMuted" /></Avatar>
            })}
        </div>
    }
}

/// Scrollable list of conversation messages.
///
/// Shows a quiet empty-state hint until the first message arrives.
#[component]
pub fn ChatMessageList(
    /// Conversation to display.
    #[prop(into)]
    thread: Signal<Thread>,
) -> impl IntoView {
    view! {
        <ScrollArea class="flex-1 px-6 py-4">
            <div class="max-w-3xl mx-auto space-y-4">
                <Show
                    when=move || !thread.with(Thread::is_empty)
                    fallback=|| view! {
                        <div class="flex flex-col items-center justify-center py-16 text-center">
                            <p class="text-textMuted text-sm">
                                "Namaste! Ask about Indian dishes, ingredients, or get recommendations."
                            </p>
                        </div>
                    }
                >
                    {move || {
                        thread
                            .get()
                            .messages()
                            .iter()
                            .cloned()
                            .map(message_view)
                            .collect_view()
                    }}
                </Show>
            </div>
        </ScrollArea>
    }
}
