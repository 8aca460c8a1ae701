//! Preference editing dialog.

use leptos::prelude::*;

use crate::prefs::{self, Preferences};
use crate::ui::components::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardFooter, CardHeader, SlidersIcon,
    XIcon,
};

fn option_classes(selected: bool) -> String {
    let state = if selected {
        "bg-orange-500/20 text-orange-300 border-orange-500/40"
    } else {
        "bg-panel text-textMuted border-panelBorder hover:text-textPrimary"
    };
    format!("px-2.5 py-1 rounded-md border text-xs transition-colors {state}")
}

fn toggle(list: &mut Vec<String>, tag: &str) {
    if let Some(pos) = list.iter().position(|t| t == tag) {
        list.remove(pos);
    } else {
        list.push(tag.to_string());
    }
}

/// Render one row of selectable tag chips bound to the draft record.
fn tag_options(
    tags: &'static [&'static str],
    label_of: impl Fn(&'static str) -> String + Copy + Send + Sync + 'static,
    is_on: impl Fn(&Preferences, &str) -> bool + Copy + Send + Sync + 'static,
    flip: impl Fn(&mut Preferences, &'static str) + Copy + Send + Sync + 'static,
    draft: RwSignal<Preferences>,
) -> impl IntoView {
    tags.iter()
        .map(|&tag| {
            view! {
                <button
                    type="button"
                    class=move || option_classes(draft.with(|d| is_on(d, tag)))
                    on:click=move |_| draft.update(|d| flip(d, tag))
                >
                    {label_of(tag)}
                </button>
            }
        })
        .collect_view()
}

/// Modal editor for the preference record.
///
/// Edits a draft copy seeded from the current value when the dialog opens;
/// nothing propagates until "Save Preferences" forwards the draft through
/// `on_update`.
#[component]
pub fn PreferencesDialog(
    /// Current preference record.
    #[prop(into)]
    preferences: Signal<Preferences>,
    /// Invoked with the edited record on save.
    #[prop(into)]
    on_update: Callback<Preferences>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let draft = RwSignal::new(Preferences::default());

    let open_dialog = move |()| {
        draft.set(preferences.get_untracked());
        open.set(true);
    };

    let save = move |()| {
        on_update.run(draft.get_untracked());
        open.set(false);
    };

    view! {
        <Button
            variant=ButtonVariant::Secondary
            size=ButtonSize::Sm
            on_click=Callback::new(open_dialog)
        >
            <SlidersIcon class="h-3.5 w-3.5" />
            "Preferences"
        </Button>

        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/60 backdrop-blur-sm">
                <Card class="w-full max-w-lg mx-4 max-h-[85vh] overflow-y-auto">
                    <CardHeader class="flex-row items-center justify-between space-y-0">
                        <h2 class="text-lg font-semibold">"Your Preferences"</h2>
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Icon
                            on_click=Callback::new(move |()| open.set(false))
                            class="h-8 w-8"
                        >
                            <XIcon />
                        </Button>
                    </CardHeader>

                    <CardContent class="space-y-5">
                        <section>
                            <h3 class="text-xs font-medium uppercase tracking-wider text-textMuted mb-2">
                                "Spice Level"
                            </h3>
                            <div class="flex flex-wrap gap-2">
                                {tag_options(
                                    &prefs::SPICE_LEVELS,
                                    |t| prefs::spice_label(t).to_string(),
                                    |d, t| d.spice_level == t,
                                    |d, t| d.spice_level = t.to_string(),
                                    draft,
                                )}
                            </div>
                        </section>

                        <section>
                            <h3 class="text-xs font-medium uppercase tracking-wider text-textMuted mb-2">
                                "Dietary Type"
                            </h3>
                            <div class="flex flex-wrap gap-2">
                                {tag_options(
                                    &prefs::DIETARY_TYPES,
                                    |t| prefs::dietary_label(t).to_string(),
                                    |d, t| d.dietary_type == t,
                                    |d, t| d.dietary_type = t.to_string(),
                                    draft,
                                )}
                            </div>
                        </section>

                        <section>
                            <h3 class="text-xs font-medium uppercase tracking-wider text-textMuted mb-2">
                                "Preferred Cuisines"
                            </h3>
                            <div class="flex flex-wrap gap-2">
                                {tag_options(
                                    &prefs::CUISINES,
                                    |t| prefs::cuisine_label(t).to_string(),
                                    |d, t| d.preferred_cuisines.iter().any(|c| c == t),
                                    |d, t| toggle(&mut d.preferred_cuisines, t),
                                    draft,
                                )}
                            </div>
                        </section>

                        <section>
                            <h3 class="text-xs font-medium uppercase tracking-wider text-textMuted mb-2">
                                "Allergies"
                            </h3>
                            <div class="flex flex-wrap gap-2">
                                {tag_options(
                                    &prefs::ALLERGENS,
                                    |t| t.to_string(),
                                    |d, t| d.allergies.iter().any(|a| a == t),
                                    |d, t| toggle(&mut d.allergies, t),
                                    draft,
                                )}
                            </div>
                        </section>

                        <section>
                            <h3 class="text-xs font-medium uppercase tracking-wider text-textMuted mb-2">
                                "Health Goals"
                            </h3>
                            <div class="flex flex-wrap gap-2">
                                {tag_options(
                                    &prefs::HEALTH_GOALS,
                                    |t| prefs::health_goal_label(t),
                                    |d, t| d.health_goals.iter().any(|g| g == t),
                                    |d, t| toggle(&mut d.health_goals, t),
                                    draft,
                                )}
                            </div>
                        </section>
                    </CardContent>

                    <CardFooter class="justify-end gap-2">
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Sm
                            on_click=Callback::new(move |()| open.set(false))
                        >
                            "Cancel"
                        </Button>
                        <Button size=ButtonSize::Sm on_click=Callback::new(save)>
                            "Save Preferences"
                        </Button>
                    </CardFooter>
                </Card>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut list = Vec::new();
        toggle(&mut list, "nuts");
        assert_eq!(list, vec!["nuts".to_string()]);

        toggle(&mut list, "dairy");
        assert_eq!(list, vec!["nuts".to_string(), "dairy".to_string()]);

        toggle(&mut list, "nuts");
        assert_eq!(list, vec!["dairy".to_string()]);
    }
}
