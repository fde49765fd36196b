//! Dashboard: headline counts plus bookings-per-weekday and users-per-role
//! breakdowns. The three source lists are fetched concurrently.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use contracts::domain::booking::Booking;
use contracts::domain::user::{User, UserRole};
use futures::join;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::{bookings, tables, users};
use crate::system::auth::context::use_session;

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub total_bookings: usize,
    pub total_tables: usize,
    pub total_users: usize,
    pub bookings_by_day: Vec<(String, usize)>,
    pub users_by_role: Vec<(String, usize)>,
    pub popular_dishes: Vec<(String, usize)>,
}

fn weekday_index(eating_time: &str) -> Option<usize> {
    let date = NaiveDateTime::parse_from_str(eating_time, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.date())
        .or_else(|_| {
            NaiveDateTime::parse_from_str(eating_time, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
        })
        .or_else(|_| NaiveDate::parse_from_str(eating_time, "%Y-%m-%d"))
        .ok()?;
    Some(date.weekday().num_days_from_sunday() as usize)
}

/// Bookings bucketed by weekday, Sunday first. Unparseable timestamps are
/// skipped rather than miscounted.
pub fn bookings_by_day(bookings: &[Booking]) -> Vec<(String, usize)> {
    let mut counts = [0usize; 7];
    for booking in bookings {
        if let Some(day) = weekday_index(&booking.eating_time) {
            counts[day] += 1;
        }
    }
    WEEKDAYS
        .iter()
        .zip(counts)
        .map(|(name, count)| (name.to_string(), count))
        .collect()
}

pub fn users_by_role(users: &[User]) -> Vec<(String, usize)> {
    let mut staff = 0;
    let mut managers = 0;
    let mut customers = 0;
    for user in users {
        match user.role {
            UserRole::Staff => staff += 1,
            UserRole::Manager => managers += 1,
            UserRole::Customer => customers += 1,
        }
    }
    vec![
        ("Staff".to_string(), staff),
        ("Manager".to_string(), managers),
        ("Customer".to_string(), customers),
    ]
}

/// Placeholder until the kitchen reports real order counts.
fn sample_popular_dishes() -> Vec<(String, usize)> {
    vec![
        ("Pizza".to_string(), 30),
        ("Burger".to_string(), 25),
        ("Pasta".to_string(), 20),
        ("Salad".to_string(), 15),
        ("Steak".to_string(), 10),
    ]
}

#[component]
fn BreakdownCard(title: &'static str, rows: Vec<(String, usize)>) -> impl IntoView {
    let max = rows.iter().map(|(_, v)| *v).max().unwrap_or(0).max(1);
    view! {
        <div class="dashboard__card">
            <h3>{title}</h3>
            <ul class="dashboard__bars">
                {rows
                    .into_iter()
                    .map(|(name, value)| {
                        let width = value * 100 / max;
                        view! {
                            <li>
                                <span class="dashboard__bar-label">{name}</span>
                                <span
                                    class="dashboard__bar"
                                    style=format!("width: {width}%")
                                ></span>
                                <span class="dashboard__bar-value">{value}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let data = RwSignal::new(None::<DashboardData>);
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);

    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));

    let current = session.get_untracked();
    spawn_local(async move {
        let bookings_fut = bookings::api::fetch_all(current.as_ref());
        let tables_fut = tables::api::fetch_all();
        let users_fut = async {
            match &current {
                Some(s) => users::api::fetch_all(s).await,
                None => Ok(Vec::new()),
            }
        };
        let (bookings_res, tables_res, users_res) = join!(bookings_fut, tables_fut, users_fut);
        if !alive.get_value() {
            return;
        }
        match (bookings_res, tables_res, users_res) {
            (Ok(booking_rows), Ok(table_rows), Ok(user_rows)) => {
                data.set(Some(DashboardData {
                    total_bookings: booking_rows.len(),
                    total_tables: table_rows.len(),
                    total_users: user_rows.len(),
                    bookings_by_day: bookings_by_day(&booking_rows),
                    users_by_role: users_by_role(&user_rows),
                    popular_dishes: sample_popular_dishes(),
                }));
            }
            (b, t, u) => {
                let message = [
                    b.err().map(|e| e.surface("failed to fetch bookings for the dashboard")),
                    t.err().map(|e| e.surface("failed to fetch tables for the dashboard")),
                    u.err().map(|e| e.surface("failed to fetch users for the dashboard")),
                ]
                .into_iter()
                .flatten()
                .next()
                .unwrap_or_else(|| "Unable to load dashboard data".to_string());
                load_error.set(Some(message));
            }
        }
        loading.set(false);
    });

    view! {
        <div class="page dashboard">
            <h2>"Dashboard"</h2>

            <Show when=move || loading.get()>
                <div class="loading">"Loading dashboard..."</div>
            </Show>

            <Show when=move || load_error.get().is_some()>
                <div class="error-message">{move || load_error.get().unwrap_or_default()}</div>
            </Show>

            <Show when=move || data.get().is_some()>
                {move || {
                    let d = data.get().unwrap_or_default();
                    view! {
                        <div class="dashboard__totals">
                            <div class="dashboard__card">
                                <h3>"Bookings"</h3>
                                <span class="dashboard__total">{d.total_bookings}</span>
                            </div>
                            <div class="dashboard__card">
                                <h3>"Tables"</h3>
                                <span class="dashboard__total">{d.total_tables}</span>
                            </div>
                            <div class="dashboard__card">
                                <h3>"Users"</h3>
                                <span class="dashboard__total">{d.total_users}</span>
                            </div>
                        </div>
                        <div class="dashboard__charts">
                            <BreakdownCard title="Bookings by day" rows=d.bookings_by_day.clone() />
                            <BreakdownCard title="Users by role" rows=d.users_by_role.clone() />
                            <BreakdownCard title="Popular dishes" rows=d.popular_dishes.clone() />
                        </div>
                    }
                }}
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::status::{ActiveStatus, BookingStatus};

    fn booking(eating_time: &str) -> Booking {
        Booking {
            id: 1,
            customer_name: "x".into(),
            customer_phone: "0".into(),
            eating_time: eating_time.into(),
            total_people: 2,
            total_table: 1,
            status: BookingStatus::Active,
        }
    }

    fn user(role: UserRole) -> User {
        User {
            id: 1,
            fullname: "x".into(),
            phone: "0".into(),
            gmail: "x@y.z".into(),
            password: String::new(),
            address: String::new(),
            role,
            status: ActiveStatus::Active,
        }
    }

    #[test]
    fn bookings_bucket_by_weekday_sunday_first() {
        // 2024-05-05 was a Sunday, 2024-05-06 a Monday.
        let rows = vec![
            booking("2024-05-05T12:00:00"),
            booking("2024-05-06T18:30:00"),
            booking("2024-05-06T19:00:00"),
            booking("not a date"),
        ];
        let by_day = bookings_by_day(&rows);
        assert_eq!(by_day.len(), 7);
        assert_eq!(by_day[0], ("Sunday".to_string(), 1));
        assert_eq!(by_day[1], ("Monday".to_string(), 2));
        assert_eq!(by_day[2].1, 0);
    }

    #[test]
    fn fractional_seconds_still_parse() {
        assert_eq!(weekday_index("2024-05-05T12:00:00.123"), Some(0));
        assert_eq!(weekday_index("2024-05-05"), Some(0));
        assert_eq!(weekday_index("garbage"), None);
    }

    #[test]
    fn users_group_by_role() {
        let rows = vec![
            user(UserRole::Staff),
            user(UserRole::Customer),
            user(UserRole::Customer),
            user(UserRole::Manager),
        ];
        let by_role = users_by_role(&rows);
        assert_eq!(by_role[0], ("Staff".to_string(), 1));
        assert_eq!(by_role[1], ("Manager".to_string(), 1));
        assert_eq!(by_role[2], ("Customer".to_string(), 2));
    }
}
