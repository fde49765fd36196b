//! Sidebar with the screen links, the signed-in name and the logout button

use leptos::prelude::*;

use crate::routes::screen::Screen;
use crate::system::auth::context::{do_logout, use_session};

#[component]
pub fn Sidebar(active: RwSignal<Screen>) -> impl IntoView {
    let session = use_session();

    let role = Signal::derive(move || session.with(|s| s.as_ref().map(|s| s.role)));
    let fullname =
        Signal::derive(move || session.with(|s| s.as_ref().map(|s| s.fullname.clone())));

    view! {
        <nav class="sidebar">
            <h1 class="sidebar__title">"Restaurant Admin"</h1>
            <ul class="sidebar__menu">
                {Screen::ALL
                    .iter()
                    .map(|&screen| {
                        view! {
                            <Show when=move || {
                                role.get().map(|r| screen.visible_to(r)).unwrap_or(false)
                            }>
                                <li
                                    class=move || {
                                        if active.get() == screen {
                                            "sidebar__item sidebar__item--active"
                                        } else {
                                            "sidebar__item"
                                        }
                                    }
                                    on:click=move |_| active.set(screen)
                                >
                                    {screen.label()}
                                </li>
                            </Show>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="sidebar__footer">
                <span class="sidebar__welcome">
                    {move || format!("Welcome, {}", fullname.get().unwrap_or_default())}
                </span>
                <button class="sidebar__logout" on:click=move |_| do_logout(session)>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
