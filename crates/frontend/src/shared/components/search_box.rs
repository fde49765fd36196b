use leptos::prelude::*;

/// SearchBox component - text input plus search/refresh buttons
///
/// The input is uncontrolled until the search button (or Enter) fires;
/// clearing the text does not refetch by itself, the refresh button does.
#[component]
pub fn SearchBox(
    /// Placeholder text for the input
    #[prop(into)]
    placeholder: String,

    /// Current search text
    #[prop(into)]
    value: Signal<String>,

    /// Callback on every keystroke
    on_input: Callback<String>,

    /// Callback when a search is requested
    on_search: Callback<()>,

    /// Callback when the unfiltered list should be reloaded
    on_refresh: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="search-box">
            <input
                class="search-box__input"
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        on_search.run(());
                    }
                }
            />
            <button class="search-box__btn" on:click=move |_| on_search.run(())>
                "Search"
            </button>
            <button
                class="search-box__btn search-box__btn--secondary"
                on:click=move |_| on_refresh.run(())
            >
                "Refresh"
            </button>
        </div>
    }
}
