//! Categories screen: list with inline row editing, an add form and the
//! enable/disable toggle. Pages are counted from 0 on this screen.

use std::cmp::Ordering;

use contracts::domain::category::{Category, NewCategory};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::{Pagination, SortableHeader};
use crate::shared::list_view::{ListView, PageIndexing, Searchable, Sortable};
use crate::shared::mutation::MutationCoordinator;
use crate::system::auth::context::use_session;

const PAGE_SIZE: usize = 10;

impl Sortable for Category {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "name" => self.name.cmp(&other.name),
            "description" => self.description.cmp(&other.description),
            "status" => self.status.code().cmp(&other.status.code()),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for Category {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(&filter.to_lowercase())
    }
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let session = use_session();
    let view = RwSignal::new(ListView::<Category>::new(PAGE_SIZE, PageIndexing::ZeroBased));
    let loading = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let form = RwSignal::new(NewCategory::default());
    // A copy of the row being edited; None when no row is in edit mode.
    let editing = RwSignal::new(None::<Category>);
    let mutation = MutationCoordinator::new();

    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));

    let fetch_all = move |reset_page: bool| {
        loading.set(true);
        load_error.set(None);
        let user_id = session.get_untracked().map(|s| s.user_id).unwrap_or(0);
        spawn_local(async move {
            let result = api::fetch_all(user_id).await;
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
                Err(e) => load_error.set(Some(e.surface("failed to fetch categories"))),
            }
            loading.set(false);
        });
    };

    fetch_all(true);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let category = form.get_untracked();
        if let Err(msg) = category.validate() {
            mutation.reject(msg);
            return;
        }
        let Some(current) = session.get_untracked() else {
            mutation.reject("Not signed in");
            return;
        };
        mutation.run(
            async move { api::create(&category, &current).await },
            move || {
                form.set(NewCategory::default());
                fetch_all(false);
            },
        );
    };

    let save_edit = move |_| {
        let Some(edited) = editing.get_untracked() else {
            return;
        };
        if let Err(msg) = edited.validate() {
            mutation.reject(msg);
            return;
        }
        let Some(current) = session.get_untracked() else {
            mutation.reject("Not signed in");
            return;
        };
        mutation.run(
            async move { api::update(&edited, &current).await },
            move || {
                editing.set(None);
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
            <h2>"Categories"</h2>

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
                <button type="submit" disabled=move || mutation.is_submitting()>
                    {move || if mutation.is_submitting() { "Adding..." } else { "Add category" }}
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
                        <SortableHeader label="Description" field="description"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <SortableHeader label="Status" field="status"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || visible.get() key=|c| c.id let:category>
                        {
                            let id = category.id;
                            let status = category.status;
                            let row = category.clone();
                            let is_editing =
                                Signal::derive(move || {
                                    editing.with(|e| e.as_ref().map(|c| c.id) == Some(id))
                                });
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>
                                        <Show
                                            when=move || is_editing.get()
                                            fallback={
                                                let name = row.name.clone();
                                                move || name.clone()
                                            }
                                        >
                                            <input
                                                type="text"
                                                prop:value=move || {
                                                    editing.with(|e| {
                                                        e.as_ref().map(|c| c.name.clone()).unwrap_or_default()
                                                    })
                                                }
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    editing.update(|e| {
                                                        if let Some(c) = e {
                                                            c.name = value;
                                                        }
                                                    });
                                                }
                                            />
                                        </Show>
                                    </td>
                                    <td>
                                        <Show
                                            when=move || is_editing.get()
                                            fallback={
                                                let description = row.description.clone();
                                                move || description.clone()
                                            }
                                        >
                                            <input
                                                type="text"
                                                prop:value=move || {
                                                    editing.with(|e| {
                                                        e.as_ref()
                                                            .map(|c| c.description.clone())
                                                            .unwrap_or_default()
                                                    })
                                                }
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    editing.update(|e| {
                                                        if let Some(c) = e {
                                                            c.description = value;
                                                        }
                                                    });
                                                }
                                            />
                                        </Show>
                                    </td>
                                    <td>{status.label()}</td>
                                    <td>
                                        <Show
                                            when=move || is_editing.get()
                                            fallback={
                                                let row = row.clone();
                                                move || {
                                                    let row = row.clone();
                                                    view! {
                                                        <button on:click=move |_| {
                                                            editing.set(Some(row.clone()))
                                                        }>
                                                            "Edit"
                                                        </button>
                                                        <button
                                                            disabled=move || mutation.is_submitting()
                                                            on:click=move |_| toggle_status(id)
                                                        >
                                                            {status.toggled().label()}
                                                        </button>
                                                    }
                                                }
                                            }
                                        >
                                            <button
                                                disabled=move || mutation.is_submitting()
                                                on:click=save_edit
                                            >
                                                "Save"
                                            </button>
                                            <button on:click=move |_| editing.set(None)>
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
