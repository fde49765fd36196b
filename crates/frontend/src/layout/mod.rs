pub mod sidebar;

use leptos::prelude::*;

use crate::routes::screen::Screen;
use sidebar::Sidebar;

/// Application shell: sidebar on the left, the active screen's content
/// on the right.
///
/// ```text
/// +-----------+------------------------+
/// |  Sidebar  |       Content          |
/// +-----------+------------------------+
/// ```
#[component]
pub fn Shell<C>(active: RwSignal<Screen>, content: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <Sidebar active=active />
            <main class="app-content">
                {content()}
            </main>
        </div>
    }
}
