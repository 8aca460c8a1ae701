//! Avatar component for message authors.

use leptos::prelude::*;

/// Round glyph container identifying a message author.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Avatar><BotIcon class="h-4 w-4" /></Avatar>
/// }
/// ```
#[component]
pub fn Avatar(
    /// Size class (e.g., "h-8 w-8").
    #[prop(default = "h-8 w-8")]
    size: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Avatar glyph.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "relative flex shrink-0 items-center justify-center overflow-hidden rounded-full \
         bg-panel border border-panelBorder {size} {class}"
    );

    view! {
        <span class=classes>
            {children()}
        </span>
    }
}
