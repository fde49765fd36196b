//! Menu screen: food list plus the add-item form.
//! Pages are counted from 0 on this screen and hold five rows each.

use std::cmp::Ordering;

use contracts::domain::category::Category;
use contracts::domain::food::{FoodItem, NewFoodItem};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::{Pagination, SortableHeader};
use crate::shared::list_view::{ListView, PageIndexing, Searchable, Sortable};
use crate::shared::mutation::MutationCoordinator;
use crate::system::auth::context::use_session;

const PAGE_SIZE: usize = 5;

impl Sortable for FoodItem {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "name" => self.name.cmp(&other.name),
            // None prices sort before priced items.
            "price" => self
                .price
                .partial_cmp(&other.price)
                .unwrap_or(Ordering::Equal),
            "category_name" => self.category_name.cmp(&other.category_name),
            "status" => self.status.code().cmp(&other.status.code()),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for FoodItem {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.category_name.to_lowercase().contains(&needle)
    }
}

#[component]
pub fn MenuPage() -> impl IntoView {
    let session = use_session();
    let view = RwSignal::new(ListView::<FoodItem>::new(PAGE_SIZE, PageIndexing::ZeroBased));
    let categories = RwSignal::new(Vec::<Category>::new());
    let loading = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let form = RwSignal::new(NewFoodItem::default());
    let mutation = MutationCoordinator::new();

    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));

    let fetch_all = move |reset_page: bool| {
        loading.set(true);
        load_error.set(None);
        spawn_local(async move {
            let result = api::fetch_all().await;
            if !alive.get_value() {
                return;
            }
            match result {
                Ok(rows) => view.update(|v| {
                    if reset_page {
                        v.replace(rows)
                    } else {
                        v.refresh(rows)
                    }
                }),
                Err(e) => load_error.set(Some(e.surface("failed to fetch menu items"))),
            }
            loading.set(false);
        });
    };

    let fetch_categories = move || {
        let user_id = session.get_untracked().map(|s| s.user_id).unwrap_or(0);
        spawn_local(async move {
            match api::fetch_categories(user_id).await {
                Ok(rows) => {
                    if alive.get_value() {
                        categories.set(rows);
                    }
                }
                // The form can still submit without the dropdown; leave
                // the list error banner for the main fetch.
                Err(e) => {
                    e.surface("failed to fetch categories for the menu form");
                }
            }
        });
    };

    fetch_all(true);
    fetch_categories();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let item = form.get_untracked();
        if let Err(msg) = item.validate() {
            mutation.reject(msg);
            return;
        }
        let Some(current) = session.get_untracked() else {
            mutation.reject("Not signed in");
            return;
        };
        mutation.run(
            async move { api::create(&item, &current).await },
            move || {
                form.set(NewFoodItem::default());
                fetch_all(false);
            },
        );
    };

    let visible = Signal::derive(move || view.with(|v| v.visible()));
    let sort_field =
        Signal::derive(move || view.with(|v| v.sort_spec().map(|s| s.field.clone())));
    let ascending =
        Signal::derive(move || view.with(|v| v.sort_spec().map(|s| s.ascending).unwrap_or(true)));
    let on_sort = Callback::new(move |field: String| view.update(|v| v.toggle_sort(&field)));

    view! {
        <div class="page">
            <h2>"Menu"</h2>

            <form class="entity-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Description"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                />
                <input
                    type="number"
                    step="0.01"
                    placeholder="Price"
                    prop:value=move || {
                        form.with(|f| f.price.map(|p| p.to_string()).unwrap_or_default())
                    }
                    on:input=move |ev| {
                        let parsed = event_target_value(&ev).parse::<f64>().ok();
                        form.update(|f| f.price = parsed);
                    }
                />
                <select on:change=move |ev| {
                    let parsed = event_target_value(&ev).parse::<i64>().ok();
                    form.update(|f| f.category_id = parsed);
                }>
                    <option value="">"Select category"</option>
                    <For each=move || categories.get() key=|c| c.id let:category>
                        <option value=category.id.to_string()>{category.name.clone()}</option>
                    </For>
                </select>
                <button type="submit" disabled=move || mutation.is_submitting()>
                    {move || if mutation.is_submitting() { "Adding..." } else { "Add item" }}
                </button>
            </form>

            <Show when=move || mutation.error_message().is_some()>
                <div class="error-message">
                    {move || mutation.error_message().unwrap_or_default()}
                </div>
            </Show>

            <Show when=move || load_error.get().is_some()>
                <div class="error-message">{move || load_error.get().unwrap_or_default()}</div>
            </Show>

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <SortableHeader label="ID" field="id"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <SortableHeader label="Name" field="name"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <th>"Description"</th>
                        <SortableHeader label="Price" field="price"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <SortableHeader label="Category" field="category_name"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <SortableHeader label="Status" field="status"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                    </tr>
                </thead>
                <tbody>
                    <For each=move || visible.get() key=|f| f.id let:food>
                        <tr>
                            <td>{food.id}</td>
                            <td>{food.name.clone()}</td>
                            <td>{food.description.clone()}</td>
                            <td>
                                {food
                                    .price
                                    .map(|p| format!("{p:.2}"))
                                    .unwrap_or_else(|| "-".to_string())}
                            </td>
                            <td>{food.category_name.clone()}</td>
                            <td>{food.status.label()}</td>
                        </tr>
                    </For>
                </tbody>
            </table>

            <Pagination
                has_prev=Signal::derive(move || view.with(|v| v.has_prev()))
                has_next=Signal::derive(move || view.with(|v| v.has_next()))
                shown_range=Signal::derive(move || view.with(|v| v.shown_range()))
                on_prev=Callback::new(move |_| view.update(|v| v.prev_page()))
                on_next=Callback::new(move |_| view.update(|v| v.next_page()))
            />
        </div>
    }
}
