use leptos::prelude::*;
use thaw::*;

use super::modal::Modal;
use crate::shared::crud::state::DialogState;

/// Create/edit dialog around an entity form.
///
/// Shows the server message of the last failed submit above the fields and
/// disables the buttons while a request is in flight.
#[component]
pub fn FormDialog(
    #[prop(into)] title: Signal<String>,
    dialog: RwSignal<DialogState>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
    children: Children,
) -> impl IntoView {
    let submitting = Signal::derive(move || dialog.with(|d| d.is_submitting()));

    view! {
        <Modal
            title=title
            on_close=on_cancel
            footer=move || view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                    disabled=submitting
                >
                    "Cancelar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_submit.run(())
                    disabled=submitting
                >
                    {move || if submitting.get() { "Salvando..." } else { "Salvar" }}
                </Button>
            }
        >
            {move || dialog.with(|d| d.error()).map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}
            <form
                class="form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                {children()}
            </form>
        </Modal>
    }
}
