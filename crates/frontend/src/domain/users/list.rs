//! Users screen: account list with gmail/phone search, the add-user form
//! and the enable/disable toggle. Manager-only; the route guard keeps
//! other roles out. Pages are counted from 1.

use std::cmp::Ordering;

use contracts::domain::user::{NewUser, User, UserRole};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::{Pagination, SearchBox, SortableHeader};
use crate::shared::list_view::{ListView, PageIndexing, Searchable, Sortable};
use crate::shared::mutation::MutationCoordinator;
use crate::system::auth::context::use_session;

const PAGE_SIZE: usize = 10;

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "fullname" => self.fullname.cmp(&other.fullname),
            "gmail" => self.gmail.cmp(&other.gmail),
            "phone" => self.phone.cmp(&other.phone),
            "role" => self.role.code().cmp(&other.role.code()),
            "status" => self.status.code().cmp(&other.status.code()),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for User {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.gmail.to_lowercase().contains(&needle) || self.phone.contains(filter)
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let session = use_session();
    let view = RwSignal::new(ListView::<User>::new(PAGE_SIZE, PageIndexing::OneBased));
    let loading = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let search_term = RwSignal::new(String::new());
    let form = RwSignal::new(NewUser::default());
    let mutation = MutationCoordinator::new();

    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));

    let fetch_all = move |reset_page: bool| {
        let Some(current) = session.get_untracked() else {
            return;
        };
        loading.set(true);
        load_error.set(None);
        spawn_local(async move {
            let result = api::fetch_all(&current).await;
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
                Err(e) => load_error.set(Some(e.surface("failed to fetch users"))),
            }
            loading.set(false);
        });
    };

    fetch_all(true);

    let search = move |_| {
        let term = search_term.get_untracked();
        if term.trim().is_empty() {
            return;
        }
        let Some(current) = session.get_untracked() else {
            return;
        };
        loading.set(true);
        load_error.set(None);
        spawn_local(async move {
            let result = api::search(&term, &current).await;
            if !alive.get_value() {
                return;
            }
            match result {
                Ok(rows) => view.update(|v| v.replace(rows)),
                Err(e) => load_error.set(Some(e.surface("failed to search users"))),
            }
            loading.set(false);
        });
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = match form.get_untracked().build() {
            Ok(payload) => payload,
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
            async move { api::create(&payload, &current).await },
            move || {
                form.set(NewUser::default());
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
            <h2>"Users"</h2>

            <SearchBox
                placeholder="Search by gmail or phone"
                value=search_term
                on_input=Callback::new(move |s| search_term.set(s))
                on_search=Callback::new(search)
                on_refresh=Callback::new(move |_| fetch_all(true))
            />

            <form class="entity-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Full name"
                    prop:value=move || form.with(|f| f.fullname.clone())
                    on:input=move |ev| form.update(|f| f.fullname = event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || form.with(|f| f.gmail.clone())
                    on:input=move |ev| form.update(|f| f.gmail = event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Phone"
                    prop:value=move || form.with(|f| f.phone.clone())
                    on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Address"
                    prop:value=move || form.with(|f| f.address.clone())
                    on:input=move |ev| form.update(|f| f.address = event_target_value(&ev))
                />
                <select on:change=move |ev| {
                    let role = event_target_value(&ev).parse::<i32>().ok().map(UserRole::from);
                    form.update(|f| f.role = role);
                }>
                    <option value="">"Select role"</option>
                    <option value="0">"Staff"</option>
                    <option value="1">"Manager"</option>
                    <option value="2">"Customer"</option>
                </select>
                <button type="submit" disabled=move || mutation.is_submitting()>
                    {move || if mutation.is_submitting() { "Adding..." } else { "Add user" }}
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
                        <SortableHeader label="Name" field="fullname"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <SortableHeader label="Email" field="gmail"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <SortableHeader label="Phone" field="phone"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <th>"Address"</th>
                        <SortableHeader label="Role" field="role"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <SortableHeader label="Status" field="status"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || visible.get() key=|u| u.id let:user>
                        {
                            let id = user.id;
                            let status = user.status;
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>{user.fullname.clone()}</td>
                                    <td>{user.gmail.clone()}</td>
                                    <td>{user.phone.clone()}</td>
                                    <td>{user.address.clone()}</td>
                                    <td>{user.role.label()}</td>
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
