use leptos::prelude::*;
use thaw::*;

use crate::system::auth::context::use_auth;

#[component]
pub fn LoginPage(on_forgot_password: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_loading = Signal::derive(move || auth.is_loading());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        auth.login(username.get_untracked(), password.get_untracked());
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Charter Admin"</h1>
                <h2>"Acesso ao painel"</h2>

                {move || auth.error().map(|e| view! { <div class="error-message">{e}</div> })}

                <form on:submit=on_submit>
                    <div class="form__group">
                        <Label>"Usuário"</Label>
                        <Input value=username placeholder="admin" disabled=is_loading />
                    </div>

                    <div class="form__group">
                        <Label>"Senha"</Label>
                        <Input value=password input_type=InputType::Password disabled=is_loading />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>

                <button class="button button--link" on:click=move |_| on_forgot_password.run(())>
                    "Esqueci minha senha"
                </button>
            </div>
        </div>
    }
}
