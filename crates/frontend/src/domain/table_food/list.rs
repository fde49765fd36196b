//! Table food screen: orders placed at tables, with search, the add-order
//! form and the serve/cancel buttons. Pages are counted from 1.
//!
//! Which buttons render for a row follows the status transition table:
//! an ordered item can be served or cancelled, a served item can only be
//! cancelled, a cancelled item gets no buttons.

use std::cmp::Ordering;

use contracts::domain::food::FoodItem;
use contracts::domain::status::TableFoodStatus;
use contracts::domain::table_food::{NewTableFood, TableFood};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::domain::foods;
use crate::shared::components::{Pagination, SearchBox, SortableHeader};
use crate::shared::list_view::{ListView, PageIndexing, Searchable, Sortable};
use crate::shared::mutation::MutationCoordinator;
use crate::system::auth::context::use_session;

const PAGE_SIZE: usize = 10;

impl Sortable for TableFood {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "table_number" => self.table_number.cmp(&other.table_number),
            "customer_name" => self.customer_name.cmp(&other.customer_name),
            "customer_phone" => self.customer_phone.cmp(&other.customer_phone),
            "food_name" => self.food_name.cmp(&other.food_name),
            "status" => self.status.code().cmp(&other.status.code()),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for TableFood {
    fn matches_filter(&self, filter: &str) -> bool {
        self.customer_phone.contains(filter)
            || self
                .food_name
                .to_lowercase()
                .contains(&filter.to_lowercase())
    }
}

#[component]
pub fn TableFoodPage() -> impl IntoView {
    let session = use_session();
    let view = RwSignal::new(ListView::<TableFood>::new(PAGE_SIZE, PageIndexing::OneBased));
    let foods = RwSignal::new(Vec::<FoodItem>::new());
    let loading = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let search_term = RwSignal::new(String::new());
    let form = RwSignal::new(NewTableFood::default());
    let mutation = MutationCoordinator::new();

    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));

    let fetch_all = move |reset_page: bool| {
        loading.set(true);
        load_error.set(None);
        let current = session.get_untracked();
        spawn_local(async move {
            let result = api::fetch_all(current.as_ref()).await;
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
                Err(e) => load_error.set(Some(e.surface("failed to fetch table foods"))),
            }
            loading.set(false);
        });
    };

    let fetch_foods = move || {
        spawn_local(async move {
            match foods::api::fetch_all().await {
                Ok(rows) => {
                    if alive.get_value() {
                        foods.set(rows);
                    }
                }
                Err(e) => {
                    e.surface("failed to fetch foods for the order form");
                }
            }
        });
    };

    fetch_all(true);
    fetch_foods();

    let search = move |_| {
        let term = search_term.get_untracked();
        if term.trim().is_empty() {
            return;
        }
        loading.set(true);
        load_error.set(None);
        let current = session.get_untracked();
        spawn_local(async move {
            let result = api::search(&term, current.as_ref()).await;
            if !alive.get_value() {
                return;
            }
            match result {
                Ok(rows) => view.update(|v| v.replace(rows)),
                Err(e) => load_error.set(Some(e.surface("failed to search table foods"))),
            }
            loading.set(false);
        });
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let order = match form.get_untracked().build() {
            Ok(order) => order,
            Err(msg) => {
                mutation.reject(msg);
                return;
            }
        };
        let Some(current) = session.get_untracked() else {
            mutation.reject("Not signed in");
            return;
        };
        mutation.run(
            async move { api::create(&order, &current).await },
            move || {
                form.set(NewTableFood::default());
                fetch_all(false);
            },
        );
    };

    let change_status = move |id: i64, from: TableFoodStatus, to: TableFoodStatus| {
        if !from.can_transition_to(to) {
            mutation.reject(format!("Cannot change a {} order to {}", from.label(), to.label()));
            return;
        }
        let Some(current) = session.get_untracked() else {
            mutation.reject("Not signed in");
            return;
        };
        mutation.run(
            async move { api::change_status(id, to, &current).await },
            move || fetch_all(false),
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
            <h2>"Table Food"</h2>

            <SearchBox
                placeholder="Search by phone or food"
                value=search_term
                on_input=Callback::new(move |s| search_term.set(s))
                on_search=Callback::new(search)
                on_refresh=Callback::new(move |_| fetch_all(true))
            />

            <form class="entity-form" on:submit=submit>
                <input
                    type="number"
                    placeholder="Table ID"
                    prop:value=move || {
                        form.with(|f| f.table_id.map(|n| n.to_string()).unwrap_or_default())
                    }
                    on:input=move |ev| {
                        let parsed = event_target_value(&ev).parse::<i64>().ok();
                        form.update(|f| f.table_id = parsed);
                    }
                />
                <select on:change=move |ev| {
                    let parsed = event_target_value(&ev).parse::<i64>().ok();
                    form.update(|f| f.food_id = parsed);
                }>
                    <option value="">"Select food"</option>
                    <For each=move || foods.get() key=|f| f.id let:food>
                        <option value=food.id.to_string()>{food.name.clone()}</option>
                    </For>
                </select>
                <input
                    type="number"
                    placeholder="Booking ID"
                    prop:value=move || {
                        form.with(|f| f.booking_id.map(|n| n.to_string()).unwrap_or_default())
                    }
                    on:input=move |ev| {
                        let parsed = event_target_value(&ev).parse::<i64>().ok();
                        form.update(|f| f.booking_id = parsed);
                    }
                />
                <button type="submit" disabled=move || mutation.is_submitting()>
                    {move || if mutation.is_submitting() { "Adding..." } else { "Add order" }}
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
                        <SortableHeader label="Table" field="table_number"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <SortableHeader label="Customer" field="customer_name"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <SortableHeader label="Phone" field="customer_phone"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <SortableHeader label="Food" field="food_name"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <SortableHeader label="Status" field="status"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || visible.get() key=|t| t.id let:order>
                        {
                            let id = order.id;
                            let status = order.status;
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>{order.table_number}</td>
                                    <td>{order.customer_name.clone()}</td>
                                    <td>{order.customer_phone.clone()}</td>
                                    <td>{order.food_name.clone()}</td>
                                    <td>{status.label()}</td>
                                    <td>
                                        <Show when=move || {
                                            status.can_transition_to(TableFoodStatus::Served)
                                        }>
                                            <button
                                                disabled=move || mutation.is_submitting()
                                                on:click=move |_| {
                                                    change_status(id, status, TableFoodStatus::Served)
                                                }
                                            >
                                                "Serve"
                                            </button>
                                        </Show>
                                        <Show when=move || {
                                            status.can_transition_to(TableFoodStatus::Cancelled)
                                        }>
                                            <button
                                                disabled=move || mutation.is_submitting()
                                                on:click=move |_| {
                                                    change_status(id, status, TableFoodStatus::Cancelled)
                                                }
                                            >
                                                "Cancel"
                                            </button>
                                        </Show>
                                    </td>
                                </tr>
                            }
                        }
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
