use leptos::prelude::*;

/// Indicator for a sortable column: ▲/▼ on the active field, both dimmed
/// arrows otherwise.
pub fn sort_indicator(current_field: Option<&str>, field: &str, ascending: bool) -> &'static str {
    if current_field == Some(field) {
        if ascending {
            "▲"
        } else {
            "▼"
        }
    } else {
        "⇅"
    }
}

pub fn sort_class(current_field: Option<&str>, field: &str) -> &'static str {
    if current_field == Some(field) {
        "sort-indicator sort-indicator--active"
    } else {
        "sort-indicator"
    }
}

/// SortableHeader component - clickable table header cell
///
/// Clicking reports the field name; the owning screen decides whether
/// that flips the direction or switches the sorted field.
#[component]
pub fn SortableHeader(
    /// Header text
    #[prop(into)]
    label: String,

    /// Field this column sorts by
    #[prop(into)]
    field: String,

    /// Currently sorted field, if any
    #[prop(into)]
    current_field: Signal<Option<String>>,

    /// Current sort direction
    #[prop(into)]
    ascending: Signal<bool>,

    /// Callback when the header is clicked
    on_sort: Callback<String>,
) -> impl IntoView {
    let field_for_click = field.clone();
    let field_for_indicator = field.clone();
    let field_for_class = field;

    view! {
        <th
            class="table__sortable-header"
            on:click=move |_| on_sort.run(field_for_click.clone())
        >
            {label}
            <span class=move || {
                current_field.with(|f| sort_class(f.as_deref(), &field_for_class))
            }>
                {move || {
                    current_field.with(|f| {
                        sort_indicator(f.as_deref(), &field_for_indicator, ascending.get())
                    })
                }}
            </span>
        </th>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_tracks_the_active_field() {
        assert_eq!(sort_indicator(Some("name"), "name", true), "▲");
        assert_eq!(sort_indicator(Some("name"), "name", false), "▼");
        assert_eq!(sort_indicator(Some("name"), "price", true), "⇅");
        assert_eq!(sort_indicator(None, "price", true), "⇅");
    }
}
