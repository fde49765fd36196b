//! Bills screen: bill list, create-by-phone form and the mark-paid button.
//! Pages are counted from 0 on this screen.
//!
//! A bill is settled exactly once; the pay button renders only while the
//! transition to Paid is still allowed.

use std::cmp::Ordering;

use contracts::domain::bill::Bill;
use contracts::domain::status::BillStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::{Pagination, SortableHeader};
use crate::shared::date_utils::format_datetime;
use crate::shared::list_view::{ListView, PageIndexing, Searchable, Sortable};
use crate::shared::mutation::MutationCoordinator;
use crate::system::auth::context::use_session;

const PAGE_SIZE: usize = 10;

impl Sortable for Bill {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "customer_name" => self.customer_name.cmp(&other.customer_name),
            "customer_phone" => self.customer_phone.cmp(&other.customer_phone),
            "total_price" => self
                .total_price
                .partial_cmp(&other.total_price)
                .unwrap_or(Ordering::Equal),
            "created_time" => self.created_time.cmp(&other.created_time),
            "status" => self.status.code().cmp(&other.status.code()),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for Bill {
    fn matches_filter(&self, filter: &str) -> bool {
        self.customer_phone.contains(filter)
            || self
                .customer_name
                .to_lowercase()
                .contains(&filter.to_lowercase())
    }
}

#[component]
pub fn BillsPage() -> impl IntoView {
    let session = use_session();
    let view = RwSignal::new(ListView::<Bill>::new(PAGE_SIZE, PageIndexing::ZeroBased));
    let loading = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let customer_phone = RwSignal::new(String::new());
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
                Err(e) => load_error.set(Some(e.surface("failed to fetch bills"))),
            }
            loading.set(false);
        });
    };

    fetch_all(true);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let phone = customer_phone.get_untracked();
        if phone.trim().is_empty() {
            mutation.reject("Customer phone is required");
            return;
        }
        let Some(current) = session.get_untracked() else {
            mutation.reject("Not signed in");
            return;
        };
        mutation.run(
            async move { api::create(&phone, &current).await },
            move || {
                customer_phone.set(String::new());
                fetch_all(false);
            },
        );
    };

    let mark_paid = move |id: i64, from: BillStatus| {
        if !from.can_transition_to(BillStatus::Paid) {
            mutation.reject("Bill is already paid");
            return;
        }
        let Some(current) = session.get_untracked() else {
            mutation.reject("Not signed in");
            return;
        };
        mutation.run(
            async move { api::update_status(id, BillStatus::Paid, &current).await },
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
            <h2>"Bills"</h2>

            <form class="entity-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Customer phone"
                    prop:value=move || customer_phone.get()
                    on:input=move |ev| customer_phone.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || mutation.is_submitting()>
                    {move || if mutation.is_submitting() { "Creating..." } else { "Create bill" }}
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
                        <SortableHeader label="Customer" field="customer_name"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <SortableHeader label="Phone" field="customer_phone"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <SortableHeader label="Total" field="total_price"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <SortableHeader label="Created" field="created_time"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <th>"Created by"</th>
                        <th>"Paid at"</th>
                        <SortableHeader label="Status" field="status"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || visible.get() key=|b| b.id let:bill>
                        {
                            let id = bill.id;
                            let status = bill.status;
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>{bill.customer_name.clone()}</td>
                                    <td>{bill.customer_phone.clone()}</td>
                                    <td>{format!("{:.2}", bill.total_price)}</td>
                                    <td>{format_datetime(&bill.created_time)}</td>
                                    <td>{bill.created_staff_name.clone()}</td>
                                    <td>
                                        {bill
                                            .paid_time
                                            .as_deref()
                                            .map(format_datetime)
                                            .unwrap_or_else(|| "-".to_string())}
                                    </td>
                                    <td>{status.label()}</td>
                                    <td>
                                        <Show when=move || {
                                            status.can_transition_to(BillStatus::Paid)
                                        }>
                                            <button
                                                disabled=move || mutation.is_submitting()
                                                on:click=move |_| mark_paid(id, status)
                                            >
                                                "Mark paid"
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
