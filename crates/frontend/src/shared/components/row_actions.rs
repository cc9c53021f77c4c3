use leptos::prelude::*;

use crate::shared::icons::icon;

/// Edit/delete buttons of a table row. Clicks do not reach the row handler.
#[component]
pub fn RowActions(on_edit: Callback<()>, on_delete: Callback<()>) -> impl IntoView {
    view! {
        <div class="row-actions">
            <button
                class="button button--icon"
                title="Editar"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_edit.run(());
                }
            >
                {icon("edit")}
            </button>
            <button
                class="button button--icon button--danger"
                title="Excluir"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_delete.run(());
                }
            >
                {icon("delete")}
            </button>
        </div>
    }
}
