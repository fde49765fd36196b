//! Tables screen: dining table list, add form and the enable/disable
//! toggle. Pages are counted from 0 and hold five rows each.

use std::cmp::Ordering;

use contracts::domain::table::{DiningTable, NewTable};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::{Pagination, SortableHeader};
use crate::shared::list_view::{ListView, PageIndexing, Searchable, Sortable};
use crate::shared::mutation::MutationCoordinator;
use crate::system::auth::context::use_session;

const PAGE_SIZE: usize = 5;

impl Sortable for DiningTable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "number" => self.number.cmp(&other.number),
            "description" => self.description.cmp(&other.description),
            "status" => self.status.code().cmp(&other.status.code()),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for DiningTable {
    fn matches_filter(&self, filter: &str) -> bool {
        self.number.to_string().contains(filter)
            || self
                .description
                .to_lowercase()
                .contains(&filter.to_lowercase())
    }
}

#[component]
pub fn TablesPage() -> impl IntoView {
    let session = use_session();
    let view = RwSignal::new(ListView::<DiningTable>::new(
        PAGE_SIZE,
        PageIndexing::ZeroBased,
    ));
    let loading = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let form = RwSignal::new(NewTable::default());
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
                Err(e) => load_error.set(Some(e.surface("failed to fetch tables"))),
            }
            loading.set(false);
        });
    };

    fetch_all(true);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let table = form.get_untracked();
        if let Err(msg) = table.validate() {
            mutation.reject(msg);
            return;
        }
        let Some(current) = session.get_untracked() else {
            mutation.reject("Not signed in");
            return;
        };
        mutation.run(
            async move { api::create(&table, &current).await },
            move || {
                form.set(NewTable::default());
                fetch_all(false);
            },
        );
    };

    let toggle_status = move |id: i64| {
        let Some(current) = session.get_untracked() else {
            mutation.reject("Not signed in");
            return;
        };
        mutation.run(
            async move { api::change_status(id, &current).await },
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
            <h2>"Tables"</h2>

            <form class="entity-form" on:submit=submit>
                <input
                    type="number"
                    placeholder="Table number"
                    prop:value=move || {
                        form.with(|f| f.number.map(|n| n.to_string()).unwrap_or_default())
                    }
                    on:input=move |ev| {
                        let parsed = event_target_value(&ev).parse::<i32>().ok();
                        form.update(|f| f.number = parsed);
                    }
                />
                <input
                    type="text"
                    placeholder="Description"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                />
                <button type="submit" disabled=move || mutation.is_submitting()>
                    {move || if mutation.is_submitting() { "Adding..." } else { "Add table" }}
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
                        <SortableHeader label="Number" field="number"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <SortableHeader label="Description" field="description"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <SortableHeader label="Status" field="status"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || visible.get() key=|t| t.id let:table>
                        {
                            let id = table.id;
                            let status = table.status;
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>{table.number}</td>
                                    <td>{table.description.clone()}</td>
                                    <td>{status.label()}</td>
                                    <td>
                                        <button
                                            disabled=move || mutation.is_submitting()
                                            on:click=move |_| toggle_status(id)
                                        >
                                            {status.toggled().label()}
                                        </button>
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
