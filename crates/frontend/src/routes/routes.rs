use leptos::prelude::*;

use crate::dashboards::overview::DashboardPage;
use crate::domain::bills::list::BillsPage;
use crate::domain::bookings::list::BookingsPage;
use crate::domain::categories::list::CategoriesPage;
use crate::domain::foods::list::MenuPage;
use crate::domain::table_food::list::TableFoodPage;
use crate::domain::tables::list::TablesPage;
use crate::domain::users::list::UsersPage;
use crate::layout::Shell;
use crate::routes::screen::Screen;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireManager;
use crate::system::pages::login::LoginPage;

#[component]
fn MainLayout() -> impl IntoView {
    let active = RwSignal::new(Screen::Dashboard);

    view! {
        <Shell
            active=active
            content=move || {
                view! {
                    <Show when=move || active.get() == Screen::Dashboard>
                        <DashboardPage />
                    </Show>
                    <Show when=move || active.get() == Screen::Bookings>
                        <BookingsPage />
                    </Show>
                    <Show when=move || active.get() == Screen::Menu>
                        <MenuPage />
                    </Show>
                    <Show when=move || active.get() == Screen::Categories>
                        <CategoriesPage />
                    </Show>
                    <Show when=move || active.get() == Screen::Tables>
                        <TablesPage />
                    </Show>
                    <Show when=move || active.get() == Screen::TableFood>
                        <TableFoodPage />
                    </Show>
                    <Show when=move || active.get() == Screen::Bills>
                        <BillsPage />
                    </Show>
                    <Show when=move || active.get() == Screen::Users>
                        <RequireManager>
                            <UsersPage />
                        </RequireManager>
                    </Show>
                }
                .into_any()
            }
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.with(|s| s.is_some())
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
