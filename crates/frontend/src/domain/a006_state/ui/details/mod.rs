use contracts::domain::a005_country::aggregate::Country;
use contracts::domain::a006_state::aggregate::{State, StateDto};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::{FormDialog, FormField};
use crate::shared::crud::CrudStore;
use crate::shared::form_utils::{id_value, int_or_zero};

#[component]
pub fn StateDetails(
    store: CrudStore<State>,
    countries: RwSignal<Vec<Country>>,
    /// Country picked in the list filter, used for new records
    preset_country: Option<i32>,
) -> impl IntoView {
    let editing = store.editing_record();
    let title = match &editing {
        Some(s) => format!("Editar estado: {}", s.name),
        None => "Novo estado".to_string(),
    };
    let dto = editing.map(|s| s.to_dto()).unwrap_or_default();
    let country = if dto.country_id > 0 {
        Some(dto.country_id)
    } else {
        preset_country
    };

    let name = RwSignal::new(dto.name);
    let code = RwSignal::new(dto.code);
    let country_id = RwSignal::new(id_value(country));

    let on_submit = Callback::new(move |_| {
        store.save(StateDto {
            name: name.get_untracked(),
            code: code.get_untracked(),
            country_id: int_or_zero(&country_id.get_untracked()),
        })
    });

    view! {
        <FormDialog
            title=title
            dialog=store.dialog
            on_submit=on_submit
            on_cancel=Callback::new(move |_| store.close_dialog())
        >
            <FormField label="País" field="countryId" dialog=store.dialog>
                <Select value=country_id>
                    <option value="">"Selecione um país"</option>
                    {move || countries.get().into_iter().map(|c| view! {
                        <option value=c.id.to_string()>{c.name}</option>
                    }).collect_view()}
                </Select>
            </FormField>
            <FormField label="Nome" field="name" dialog=store.dialog>
                <Input value=name placeholder="Rio de Janeiro" />
            </FormField>
            <FormField label="Sigla" field="code" dialog=store.dialog>
                <Input value=code placeholder="RJ" />
            </FormField>
        </FormDialog>
    }
}
