use leptos::prelude::*;
use thaw::Label;

use crate::shared::crud::state::DialogState;

/// Label, input and the field-scoped validation message
#[component]
pub fn FormField(
    label: &'static str,
    /// Field name as reported by validation (`passengerCount`, `stateId`...)
    field: &'static str,
    dialog: RwSignal<DialogState>,
    children: Children,
) -> impl IntoView {
    let message = move || dialog.with(|d| d.field_error(field));

    view! {
        <div class="form__group" class:form__group--invalid=move || message().is_some()>
            <Label>{label}</Label>
            {children()}
            {move || message().map(|m| view! { <span class="form__error">{m}</span> })}
        </div>
    }
}
