//! Chat composer input component.

use leptos::prelude::*;
use web_sys::KeyboardEvent;

use crate::ui::components::{Button, ButtonSize, LoaderIcon, SendIcon};

/// Decide what, if anything, a submit gesture should send.
///
/// Whitespace-only input never submits, and nothing submits while a
/// request is outstanding.
fn outgoing_message(buffer: &str, busy: bool) -> Option<String> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() || busy {
        return None;
    }
    Some(trimmed.to_string())
}

/// Chat message input area.
///
/// Owns the text buffer. Enter submits; Shift+Enter inserts a line break.
/// A successful submit hands the trimmed text to `on_send` exactly once,
/// clears the buffer, and returns focus to the field.
#[component]
pub fn ChatComposer(
    /// Invoked with the finalized message text.
    #[prop(into)]
    on_send: Callback<String>,
    /// True while a request is outstanding; blocks submission.
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let input = RwSignal::new(String::new());
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    let submit = move || {
        let Some(message) = outgoing_message(&input.get_untracked(), disabled.get_untracked())
        else {
            return;
        };
        on_send.run(message);
        input.set(String::new());
        if let Some(el) = textarea_ref.get_untracked() {
            let _ = el.focus();
        }
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            submit();
        }
    };

    // The send control is inert while busy or while the buffer trims to
    // nothing.
    let send_blocked =
        Signal::derive(move || disabled.get() || input.with(|s| s.trim().is_empty()));

    view! {
        <div class="border-t border-panelBorder p-4 bg-panel/50 backdrop-blur-sm">
            <div class="flex gap-3">
                <div class="flex-1 relative">
                    <textarea
                        node_ref=textarea_ref
                        placeholder="Ask about Indian dishes, ingredients, or get recommendations..."
                        class="w-full min-h-[56px] max-h-32 px-4 py-3 rounded-xl \
                               border border-panelBorder bg-background text-textPrimary \
                               placeholder:text-textMuted resize-none \
                               focus:outline-none focus:ring-2 focus:ring-orange-500/50 \
                               focus:border-transparent"
                        rows="1"
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                        disabled=move || disabled.get()
                    />
                </div>

                <Button
                    size=ButtonSize::Icon
                    disabled=send_blocked
                    on_click=Callback::new(move |()| submit())
                    class="shrink-0 h-14 w-14 rounded-xl"
                >
                    <Show
                        when=move || disabled.get()
                        fallback=|| view! { <SendIcon class="h-5 w-5" /> }
                    >
                        <LoaderIcon class="h-5 w-5" />
                    </Show>
                </Button>
            </div>

            <p class="text-xs text-textMuted mt-2 text-center">
                "Press Enter to send, Shift+Enter for new line"
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_text_is_sent() {
        assert_eq!(
            outgoing_message("  paneer tikka?  ", false),
            Some("paneer tikka?".to_string())
        );
    }

    #[test]
    fn test_whitespace_only_never_sends() {
        assert_eq!(outgoing_message("", false), None);
        assert_eq!(outgoing_message("   ", false), None);
        assert_eq!(outgoing_message("\n\t  \n", false), None);
    }

    #[test]
    fn test_busy_blocks_sending() {
        assert_eq!(outgoing_message("what about biryani", true), None);
    }

    #[test]
    fn test_inner_whitespace_is_preserved() {
        assert_eq!(
            outgoing_message(" line one\nline two ", false),
            Some("line one\nline two".to_string())
        );
    }
}
