//! Badge component for status pills and preference chips.

use leptos::prelude::*;

/// Badge visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Neutral badge style.
    #[default]
    Muted,
    /// Live-status pill.
    Online,
    /// Spice-level chip.
    Spice,
    /// Preferred-cuisine chip.
    Cuisine,
    /// Allergy exclusion chip.
    Allergy,
    /// Health-goal chip.
    Goal,
}

impl BadgeVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Muted => "bg-panel text-textMuted",
            Self::Online => "bg-panel/50 text-textMuted border border-panelBorder",
            Self::Spice => "bg-orange-500/10 text-orange-400 border border-orange-500/20",
            Self::Cuisine => "bg-emerald-500/10 text-emerald-400 border border-emerald-500/20",
            Self::Allergy => "bg-red-500/10 text-red-400 border border-red-500/20",
            Self::Goal => "bg-blue-500/10 text-blue-400 border border-blue-500/20",
        }
    }
}

/// Badge component for displaying a status or a preference chip.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Badge variant=BadgeVariant::Allergy>"No nuts"</Badge>
/// }
/// ```
#[component]
pub fn Badge(
    /// Badge variant.
    #[prop(default = BadgeVariant::Muted)]
    variant: BadgeVariant,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Badge content.
    children: Children,
) -> impl IntoView {
    let base_classes = "inline-flex items-center gap-1 rounded-md px-2 py-1 text-xs \
                        transition-colors";

    let classes = format!("{} {} {}", base_classes, variant.classes(), class);

    view! {
        <span class=classes>
            {children()}
        </span>
    }
}
