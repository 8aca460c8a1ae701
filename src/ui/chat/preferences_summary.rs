//! Active-filter summary strip.

use leptos::prelude::*;

use crate::prefs::{self, Chip, ChipKind, Preferences};
use crate::ui::components::{Badge, BadgeVariant, BanIcon};

fn chip_variant(kind: ChipKind) -> BadgeVariant {
    match kind {
        ChipKind::Spice => BadgeVariant::Spice,
        ChipKind::Cuisine => BadgeVariant::Cuisine,
        ChipKind::Overflow => BadgeVariant::Muted,
        ChipKind::Allergy => BadgeVariant::Allergy,
        ChipKind::HealthGoal => BadgeVariant::Goal,
    }
}

fn chip_view(chip: Chip) -> impl IntoView {
    let variant = chip_variant(chip.kind);
    let icon = matches!(chip.kind, ChipKind::Allergy)
        .then(|| view! { <BanIcon class="w-3 h-3" /> });
    let suffix = matches!(chip.kind, ChipKind::Spice).then_some(" spice");

    view! {
        <Badge variant=variant>
            {icon}
            {chip.label}
            {suffix}
        </Badge>
    }
}

/// Compact summary of the active preference filters.
///
/// A pure view over the preference record: renders nothing at all while
/// every summarized field is at its default, otherwise one chip per entry
/// of [`prefs::summary_chips`].
#[component]
pub fn PreferencesSummary(
    /// Preference record to summarize.
    #[prop(into)]
    preferences: Signal<Preferences>,
) -> impl IntoView {
    let chips = Memo::new(move |_| prefs::summary_chips(&preferences.get()));

    view! {
        <Show when=move || !chips.get().is_empty()>
            <div class="px-6 py-3 bg-panel/50 border-b border-panelBorder">
                <div class="max-w-3xl mx-auto flex flex-wrap items-center gap-2 text-xs">
                    <span class="text-textMuted">"Active filters:"</span>
                    {move || chips.get().into_iter().map(chip_view).collect_view()}
                </div>
            </div>
        </Show>
    }
}
