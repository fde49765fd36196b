use leptos::prelude::*;

use super::context::use_session;

/// Component that requires the manager role
/// Shows fallback for staff and customers
#[component]
pub fn RequireManager(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || {
                session.with(|s| s.as_ref().map(|s| s.role.can_manage_users()).unwrap_or(false))
            }
            fallback=|| view! { <div>"Access denied. Manager role required."</div> }
        >
            {children()}
        </Show>
    }
}
