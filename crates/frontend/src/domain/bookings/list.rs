//! Bookings screen: read-only list with phone and date-range search.
//! Pages are counted from 1 on this screen.

use std::cmp::Ordering;

use contracts::domain::booking::Booking;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::{Pagination, SearchBox, SortableHeader};
use crate::shared::date_utils::format_datetime;
use crate::shared::list_view::{ListView, PageIndexing, Searchable, Sortable};
use crate::system::auth::context::use_session;

const PAGE_SIZE: usize = 10;

impl Sortable for Booking {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "customer_name" => self.customer_name.cmp(&other.customer_name),
            "customer_phone" => self.customer_phone.cmp(&other.customer_phone),
            "eating_time" => self.eating_time.cmp(&other.eating_time),
            "total_people" => self.total_people.cmp(&other.total_people),
            "total_table" => self.total_table.cmp(&other.total_table),
            "status" => self.status.code().cmp(&other.status.code()),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for Booking {
    fn matches_filter(&self, filter: &str) -> bool {
        self.customer_phone.contains(filter)
            || self
                .customer_name
                .to_lowercase()
                .contains(&filter.to_lowercase())
    }
}

#[component]
pub fn BookingsPage() -> impl IntoView {
    let session = use_session();
    let view = RwSignal::new(ListView::<Booking>::new(PAGE_SIZE, PageIndexing::OneBased));
    let loading = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let search_phone = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());

    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));

    let fetch_all = move || {
        loading.set(true);
        load_error.set(None);
        let current = session.get_untracked();
        spawn_local(async move {
            let result = api::fetch_all(current.as_ref()).await;
            if !alive.get_value() {
                return;
            }
            match result {
                Ok(rows) => view.update(|v| v.replace(rows)),
                Err(e) => load_error.set(Some(e.surface("failed to fetch bookings"))),
            }
            loading.set(false);
        });
    };

    let search = move |_| {
        let phone = search_phone.get_untracked();
        if phone.trim().is_empty() {
            return;
        }
        loading.set(true);
        load_error.set(None);
        let current = session.get_untracked();
        spawn_local(async move {
            let result = api::search_by_phone(&phone, current.as_ref()).await;
            if !alive.get_value() {
                return;
            }
            match result {
                Ok(rows) => view.update(|v| v.replace(rows)),
                Err(e) => load_error.set(Some(e.surface("failed to search bookings by phone"))),
            }
            loading.set(false);
        });
    };

    let search_dates = move |_| {
        let start = start_date.get_untracked();
        let end = end_date.get_untracked();
        if start.is_empty() || end.is_empty() {
            load_error.set(Some("Select both a start and an end date".to_string()));
            return;
        }
        loading.set(true);
        load_error.set(None);
        let current = session.get_untracked();
        spawn_local(async move {
            let result = api::search_by_date(&start, &end, current.as_ref()).await;
            if !alive.get_value() {
                return;
            }
            match result {
                Ok(rows) => view.update(|v| v.replace(rows)),
                Err(e) => load_error.set(Some(e.surface("failed to search bookings by date"))),
            }
            loading.set(false);
        });
    };

    fetch_all();

    let visible = Signal::derive(move || view.with(|v| v.visible()));
    let sort_field =
        Signal::derive(move || view.with(|v| v.sort_spec().map(|s| s.field.clone())));
    let ascending =
        Signal::derive(move || view.with(|v| v.sort_spec().map(|s| s.ascending).unwrap_or(true)));
    let on_sort = Callback::new(move |field: String| view.update(|v| v.toggle_sort(&field)));

    view! {
        <div class="page">
            <h2>"Bookings"</h2>

            <SearchBox
                placeholder="Search by customer phone"
                value=search_phone
                on_input=Callback::new(move |s| search_phone.set(s))
                on_search=Callback::new(search)
                on_refresh=Callback::new(move |_| fetch_all())
            />

            <div class="date-search">
                <input
                    type="date"
                    prop:value=move || start_date.get()
                    on:input=move |ev| start_date.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || end_date.get()
                    on:input=move |ev| end_date.set(event_target_value(&ev))
                />
                <button class="search-box__btn" on:click=search_dates>
                    "Search by date"
                </button>
            </div>

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
                        <SortableHeader label="Eating time" field="eating_time"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <SortableHeader label="People" field="total_people"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <SortableHeader label="Tables" field="total_table"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                        <SortableHeader label="Status" field="status"
                            current_field=sort_field ascending=ascending on_sort=on_sort />
                    </tr>
                </thead>
                <tbody>
                    <For each=move || visible.get() key=|b| b.id let:booking>
                        <tr>
                            <td>{booking.id}</td>
                            <td>{booking.customer_name.clone()}</td>
                            <td>{booking.customer_phone.clone()}</td>
                            <td>{format_datetime(&booking.eating_time)}</td>
                            <td>{booking.total_people}</td>
                            <td>{booking.total_table}</td>
                            <td>{booking.status.label()}</td>
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
