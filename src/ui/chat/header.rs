//! Chat header component.

use leptos::prelude::*;

use crate::prefs::Preferences;
use crate::ui::chat::PreferencesDialog;
use crate::ui::components::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Separator, SeparatorOrientation,
};

/// Application header: brand block, status pill, and delegated actions.
///
/// Preference editing is delegated to [`PreferencesDialog`]; clearing the
/// conversation is forwarded verbatim to `on_clear_chat`. The clear-chat
/// control only exists while the conversation has messages.
#[component]
pub fn ChatHeader(
    /// Current preference record, edited via the dialog.
    #[prop(into)]
    preferences: Signal<Preferences>,
    /// Invoked with the edited record when the user saves the dialog.
    #[prop(into)]
    on_update_preferences: Callback<Preferences>,
    /// Invoked when the user clears the conversation.
    #[prop(into)]
    on_clear_chat: Callback<()>,
    /// Whether any chat messages currently exist.
    #[prop(into, default = Signal::stored(false))]
    has_messages: Signal<bool>,
) -> impl IntoView {
    view! {
        <header class="sticky top-0 z-40 w-full border-b border-panelBorder bg-background/80 backdrop-blur-xl">
            <div class="flex h-16 items-center justify-between px-6 max-w-7xl mx-auto w-full">
                <div class="flex items-center gap-4">
                    <div class="relative w-9 h-9">
                        <div class="absolute inset-0 rounded-xl bg-gradient-to-br from-orange-500 to-amber-600 opacity-90" />
                        <div class="absolute inset-[1px] rounded-[11px] bg-background/90 flex items-center justify-center">
                            <span class="text-lg font-bold bg-gradient-to-br from-orange-400 to-amber-200 bg-clip-text text-transparent">
                                "M"
                            </span>
                        </div>
                    </div>
                    <div class="flex flex-col">
                        <h1 class="text-base font-semibold text-textPrimary tracking-tight leading-none">
                            "Maanasa"
                        </h1>
                        <span class="text-[10px] uppercase tracking-wider font-medium text-textMuted">
                            "Indian Food Expert"
                        </span>
                    </div>
                </div>

                <div class="flex items-center gap-3">
                    // Always-on status pill; not wired to real connectivity.
                    <Badge variant=BadgeVariant::Online class="hidden md:inline-flex px-3 py-1.5 rounded-full">
                        <span class="w-1.5 h-1.5 rounded-full bg-emerald-500 animate-pulse" />
                        <span class="text-xs font-medium">"System Online"</span>
                    </Badge>

                    <Separator orientation=SeparatorOrientation::Vertical class="h-6 mx-2" />

                    <PreferencesDialog preferences=preferences on_update=on_update_preferences />

                    <Show when=move || has_messages.get()>
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Sm
                            on_click=Callback::new(move |()| on_clear_chat.run(()))
                            class="hover:text-red-400 hover:bg-red-500/10 text-xs font-medium"
                        >
                            "Clear Chat"
                        </Button>
                    </Show>
                </div>
            </div>
        </header>
    }
}
