use contracts::domain::a001_boat_type::aggregate::{BoatType, BoatTypeDto};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::{FormDialog, FormField};
use crate::shared::crud::CrudStore;
use crate::shared::form_utils::{opt_text, show_opt};

#[component]
pub fn BoatTypeDetails(store: CrudStore<BoatType>) -> impl IntoView {
    let editing = store.editing_record();
    let title = match &editing {
        Some(t) => format!("Editar tipo: {}", t.name),
        None => "Novo tipo de embarcação".to_string(),
    };
    let dto = editing.map(|t| t.to_dto()).unwrap_or_default();

    let name = RwSignal::new(dto.name);
    let description = RwSignal::new(show_opt(&dto.description));

    let on_submit = Callback::new(move |_| {
        store.save(BoatTypeDto {
            name: name.get_untracked(),
            description: opt_text(&description.get_untracked()),
        })
    });

    view! {
        <FormDialog
            title=title
            dialog=store.dialog
            on_submit=on_submit
            on_cancel=Callback::new(move |_| store.close_dialog())
        >
            <FormField label="Nome" field="name" dialog=store.dialog>
                <Input value=name placeholder="Ex.: Lancha" />
            </FormField>
            <FormField label="Descrição" field="description" dialog=store.dialog>
                <Textarea value=description />
            </FormField>
        </FormDialog>
    }
}
