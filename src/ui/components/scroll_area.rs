//! Scrollable area component.

use leptos::prelude::*;

/// Scrollable container component.
///
/// Provides a styled scrollable area with custom scrollbar styling.
#[component]
pub fn ScrollArea(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Scrollable content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "relative overflow-y-auto overflow-x-hidden scrollbar-thin \
         scrollbar-thumb-panelBorder scrollbar-track-transparent {}",
        class
    );

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}
