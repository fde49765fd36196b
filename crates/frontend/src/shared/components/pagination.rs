use leptos::prelude::*;

/// Pagination component - shared paging footer for the list screens
///
/// The displayed numbers are always 1-based regardless of the screen's
/// internal page convention; the callbacks carry the screen's own page
/// numbers untouched.
#[component]
pub fn Pagination(
    /// Whether a previous page exists
    #[prop(into)]
    has_prev: Signal<bool>,

    /// Whether a next page exists
    #[prop(into)]
    has_next: Signal<bool>,

    /// 1-based "Showing X to Y of Z" range, None when the page is empty
    #[prop(into)]
    shown_range: Signal<Option<(usize, usize, usize)>>,

    /// Callback for the previous button
    on_prev: Callback<()>,

    /// Callback for the next button
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <span class="pagination__info">
                {move || match shown_range.get() {
                    Some((from, to, total)) => {
                        format!("Showing {} to {} of {} entries", from, to, total)
                    }
                    None => "No entries to show".to_string(),
                }}
            </span>
            <div class="pagination__buttons">
                <button
                    class="pagination__btn"
                    on:click=move |_| on_prev.run(())
                    disabled=move || !has_prev.get()
                >
                    "Previous"
                </button>
                <button
                    class="pagination__btn"
                    on:click=move |_| on_next.run(())
                    disabled=move || !has_next.get()
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
