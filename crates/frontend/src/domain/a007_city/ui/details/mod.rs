use contracts::domain::a006_state::aggregate::State;
use contracts::domain::a007_city::aggregate::{City, CityDto};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::{FormDialog, FormField};
use crate::shared::crud::CrudStore;
use crate::shared::form_utils::{id_value, int_or_zero};

#[component]
pub fn CityDetails(
    store: CrudStore<City>,
    states: RwSignal<Vec<State>>,
    preset_state: Option<i32>,
) -> impl IntoView {
    let editing = store.editing_record();
    let title = match &editing {
        Some(c) => format!("Editar cidade: {}", c.name),
        None => "Nova cidade".to_string(),
    };
    let dto = editing.map(|c| c.to_dto()).unwrap_or_default();
    let state = if dto.state_id > 0 {
        Some(dto.state_id)
    } else {
        preset_state
    };

    let name = RwSignal::new(dto.name);
    let state_id = RwSignal::new(id_value(state));

    let on_submit = Callback::new(move |_| {
        store.save(CityDto {
            name: name.get_untracked(),
            state_id: int_or_zero(&state_id.get_untracked()),
        })
    });

    view! {
        <FormDialog
            title=title
            dialog=store.dialog
            on_submit=on_submit
            on_cancel=Callback::new(move |_| store.close_dialog())
        >
            <FormField label="Estado" field="stateId" dialog=store.dialog>
                <Select value=state_id>
                    <option value="">"Selecione um estado"</option>
                    {move || states.get().into_iter().map(|s| view! {
                        <option value=s.id.to_string()>{s.name}</option>
                    }).collect_view()}
                </Select>
            </FormField>
            <FormField label="Nome" field="name" dialog=store.dialog>
                <Input value=name />
            </FormField>
        </FormDialog>
    }
}
