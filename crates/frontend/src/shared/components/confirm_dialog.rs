use leptos::prelude::*;
use thaw::*;

use super::modal::Modal;

#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    #[prop(optional, into)] confirm_label: Option<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = StoredValue::new(confirm_label.unwrap_or_else(|| "Excluir".to_string()));

    view! {
        <Modal
            title=title
            on_close=on_cancel
            footer=move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancelar"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_confirm.run(())>
                    {confirm_label.get_value()}
                </Button>
            }
        >
            <p class="confirm-dialog__message">{move || message.get()}</p>
        </Modal>
    }
}
