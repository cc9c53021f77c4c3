use contracts::domain::a005_country::aggregate::{Country, CountryDto};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::{FormDialog, FormField};
use crate::shared::crud::CrudStore;

#[component]
pub fn CountryDetails(store: CrudStore<Country>) -> impl IntoView {
    let editing = store.editing_record();
    let title = match &editing {
        Some(c) => format!("Editar país: {}", c.name),
        None => "Novo país".to_string(),
    };
    let dto = editing.map(|c| c.to_dto()).unwrap_or_default();

    let name = RwSignal::new(dto.name);
    let code = RwSignal::new(dto.code);

    let on_submit = Callback::new(move |_| {
        store.save(CountryDto {
            name: name.get_untracked(),
            code: code.get_untracked(),
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
                <Input value=name placeholder="Brasil" />
            </FormField>
            <FormField label="Código" field="code" dialog=store.dialog>
                <Input value=code placeholder="BR" />
            </FormField>
        </FormDialog>
    }
}
