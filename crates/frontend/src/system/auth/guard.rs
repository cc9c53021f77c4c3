use leptos::prelude::*;

use super::context::use_auth;

/// Renders children only for administrators
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_admin()
            fallback=|| view! { <div class="alert alert--warning">"Acesso restrito a administradores."</div> }
        >
            {children()}
        </Show>
    }
}
