use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth = use_auth();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <button class="button button--ghost" aria-label="Menu" on:click=move |_| ctx.toggle_sidebar()>
                    {icon("menu")}
                </button>
                <span class="header__title">"Charter Admin"</span>
            </div>
            <div class="header__actions">
                {move || auth.user().map(|user| view! {
                    <div class="header__user">
                        <span class="header__user-name">{user.full_name.clone()}</span>
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                            {user.role.label()}
                        </Badge>
                    </div>
                })}
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| auth.logout()
                    disabled=Signal::derive(move || auth.is_loading())
                >
                    {icon("log-out")}
                    " Sair"
                </Button>
            </div>
        </header>
    }
}
