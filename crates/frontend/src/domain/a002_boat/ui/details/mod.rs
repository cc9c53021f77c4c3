//! Formulário de embarcação

use contracts::domain::a001_boat_type::aggregate::BoatType;
use contracts::domain::a002_boat::aggregate::{Boat, BoatDto, BoatStatus, DEFAULT_BOAT_TYPES};
use contracts::domain::a003_marina::aggregate::Marina;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::{FormDialog, FormField};
use crate::shared::crud::CrudStore;
use crate::shared::form_utils::{id_value, int_or_zero, opt_int, opt_text, show_opt};

/// Type names for the select; the built-in list until boat types are registered
pub fn type_options(boat_types: &[BoatType]) -> Vec<String> {
    if boat_types.is_empty() {
        DEFAULT_BOAT_TYPES.iter().map(|t| t.to_string()).collect()
    } else {
        boat_types.iter().map(|t| t.name.clone()).collect()
    }
}

#[component]
pub fn BoatDetails(
    store: CrudStore<Boat>,
    boat_types: RwSignal<Vec<BoatType>>,
    marinas: RwSignal<Vec<Marina>>,
) -> impl IntoView {
    let editing = store.editing_record();
    let title = match &editing {
        Some(b) => format!("Editar embarcação: {}", b.name),
        None => "Nova embarcação".to_string(),
    };
    let dto = editing.map(|b| b.to_dto()).unwrap_or_default();

    let name = RwSignal::new(dto.name);
    let status = RwSignal::new(dto.status.as_str().to_string());
    let boat_type = RwSignal::new(dto.boat_type);
    let passenger_count = RwSignal::new(if dto.passenger_count > 0 {
        dto.passenger_count.to_string()
    } else {
        String::new()
    });
    let has_sailor = RwSignal::new(dto.has_sailor);
    let model = RwSignal::new(show_opt(&dto.model));
    let size = RwSignal::new(show_opt(&dto.size));
    let marina_id = RwSignal::new(id_value(dto.marina_id));
    let cruise_speed = RwSignal::new(show_opt(&dto.cruise_speed));
    let allows_overnight = RwSignal::new(dto.allows_overnight);
    let country = RwSignal::new(show_opt(&dto.country));
    let state = RwSignal::new(show_opt(&dto.state));
    let city = RwSignal::new(show_opt(&dto.city));
    let fuel = RwSignal::new(show_opt(&dto.fuel));
    let suites = RwSignal::new(show_opt(&dto.suites));
    let cabins = RwSignal::new(show_opt(&dto.cabins));
    let bathrooms = RwSignal::new(show_opt(&dto.bathrooms));
    let tie_document = RwSignal::new(dto.tie_document);

    let on_submit = Callback::new(move |_| {
        store.save(BoatDto {
            name: name.get_untracked(),
            status: BoatStatus::parse(&status.get_untracked()).unwrap_or_default(),
            boat_type: boat_type.get_untracked(),
            passenger_count: int_or_zero(&passenger_count.get_untracked()),
            has_sailor: has_sailor.get_untracked(),
            model: opt_text(&model.get_untracked()),
            size: opt_int(&size.get_untracked()),
            marina_id: opt_int(&marina_id.get_untracked()),
            cruise_speed: opt_text(&cruise_speed.get_untracked()),
            allows_overnight: allows_overnight.get_untracked(),
            country: opt_text(&country.get_untracked()),
            state: opt_text(&state.get_untracked()),
            city: opt_text(&city.get_untracked()),
            fuel: opt_text(&fuel.get_untracked()),
            suites: opt_int(&suites.get_untracked()),
            cabins: opt_int(&cabins.get_untracked()),
            bathrooms: opt_int(&bathrooms.get_untracked()),
            tie_document: tie_document.get_untracked(),
        })
    });

    let dialog = store.dialog;

    view! {
        <FormDialog
            title=title
            dialog=dialog
            on_submit=on_submit
            on_cancel=Callback::new(move |_| store.close_dialog())
        >
            <div class="form__row">
                <FormField label="Nome" field="name" dialog=dialog>
                    <Input value=name />
                </FormField>
                <FormField label="Situação" field="status" dialog=dialog>
                    <Select value=status>
                        {BoatStatus::all().into_iter().map(|s| view! {
                            <option value=s.as_str()>{s.label()}</option>
                        }).collect_view()}
                    </Select>
                </FormField>
            </div>

            <div class="form__row">
                <FormField label="Tipo" field="type" dialog=dialog>
                    <Select value=boat_type>
                        <option value="">"Selecione o tipo"</option>
                        {move || boat_types.with(|list| type_options(list)).into_iter().map(|t| view! {
                            <option value=t.clone()>{t.clone()}</option>
                        }).collect_view()}
                    </Select>
                </FormField>
                <FormField label="Modelo" field="model" dialog=dialog>
                    <Input value=model />
                </FormField>
            </div>

            <div class="form__row">
                <FormField label="Passageiros" field="passengerCount" dialog=dialog>
                    <Input value=passenger_count input_type=InputType::Number />
                </FormField>
                <FormField label="Tamanho (pés)" field="size" dialog=dialog>
                    <Input value=size input_type=InputType::Number />
                </FormField>
                <FormField label="Velocidade de cruzeiro" field="cruiseSpeed" dialog=dialog>
                    <Input value=cruise_speed />
                </FormField>
            </div>

            <div class="form__row">
                <Checkbox checked=has_sailor label="Com marinheiro" />
                <Checkbox checked=allows_overnight label="Permite pernoite" />
            </div>

            <FormField label="Marina" field="marinaId" dialog=dialog>
                <Select value=marina_id>
                    <option value="">"Sem marina"</option>
                    {move || marinas.get().into_iter().map(|m| view! {
                        <option value=m.id.to_string()>{m.name}</option>
                    }).collect_view()}
                </Select>
            </FormField>

            <div class="form__row">
                <FormField label="País" field="country" dialog=dialog>
                    <Input value=country />
                </FormField>
                <FormField label="Estado" field="state" dialog=dialog>
                    <Input value=state />
                </FormField>
                <FormField label="Cidade" field="city" dialog=dialog>
                    <Input value=city />
                </FormField>
            </div>

            <div class="form__row">
                <FormField label="Combustível" field="fuel" dialog=dialog>
                    <Input value=fuel />
                </FormField>
                <FormField label="Suítes" field="suites" dialog=dialog>
                    <Input value=suites input_type=InputType::Number />
                </FormField>
                <FormField label="Cabines" field="cabins" dialog=dialog>
                    <Input value=cabins input_type=InputType::Number />
                </FormField>
                <FormField label="Banheiros" field="bathrooms" dialog=dialog>
                    <Input value=bathrooms input_type=InputType::Number />
                </FormField>
            </div>

            <FormField label="Documento TIE" field="tieDocument" dialog=dialog>
                <Input value=tie_document />
            </FormField>
        </FormDialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_boat_type::aggregate::BoatTypeDto;

    #[test]
    fn test_type_options_fall_back_to_defaults() {
        let defaults = type_options(&[]);
        assert_eq!(defaults.len(), DEFAULT_BOAT_TYPES.len());
        assert_eq!(defaults[0], "Superyacht");

        let registered = vec![BoatType::new_for_insert(&BoatTypeDto {
            name: "Escuna".into(),
            description: None,
        })];
        assert_eq!(type_options(&registered), vec!["Escuna".to_string()]);
    }
}
