//! Application Shell - корневые компоненты приложения
//!
//! Содержит:
//! - `AppShell` - auth gate (экран входа/восстановления или MainLayout)
//! - `MainLayout` - Header + Sidebar + активная страница

use crate::layout::global_context::AppGlobalContext;
use crate::layout::registry::render_page;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::recover_password::RecoverPasswordPage;
use leptos::prelude::*;
use thaw::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Reads `?active=` once and keeps it in sync afterwards
    ctx.init_router_integration();

    view! {
        <Shell>
            {move || render_page(&ctx.active.get())}
        </Shell>
    }
}

/// Login and password recovery, the only screens without a session
#[component]
fn PublicScreens() -> impl IntoView {
    let recovering = RwSignal::new(false);

    view! {
        <Show
            when=move || recovering.get()
            fallback=move || view! {
                <LoginPage on_forgot_password=Callback::new(move |_| recovering.set(true)) />
            }
        >
            <RecoverPasswordPage on_back=Callback::new(move |_| recovering.set(false)) />
        </Show>
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let auth = use_auth();
    // Session restore in progress: no user yet, but not a login screen either
    let restoring = move || auth.is_loading() && !auth.is_authenticated();
    let restoring_initially = Memo::new(move |prev: Option<&bool>| match prev {
        Some(false) => false,
        _ => restoring(),
    });

    view! {
        <Show
            when=move || auth.is_authenticated()
            fallback=move || view! {
                <Show
                    when=move || restoring_initially.get()
                    fallback=|| view! { <PublicScreens /> }
                >
                    <div class="app-loading">
                        <Spinner />
                    </div>
                </Show>
            }
        >
            <MainLayout />
        </Show>
    }
}
