use contracts::domain::a005_country::aggregate::Country;
use contracts::domain::a006_state::aggregate::State;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

use super::details::StateDetails;
use crate::shared::components::{PageHeader, RowActions};
use crate::shared::crud::views::{load_lookup, lookup_name, CollectionStatus, DeleteConfirmation};
use crate::shared::crud::CrudStore;
use crate::shared::data_table::{Column, DataTable};
use crate::shared::form_utils::opt_int;
use crate::shared::icons::icon;
use crate::shared::list_utils::{CellValue, TableRecord};

impl TableRecord for State {
    fn row_id(&self) -> i32 {
        self.id
    }

    fn value(&self, key: &str) -> CellValue {
        match key {
            "name" => self.name.as_str().into(),
            "code" => self.code.as_str().into(),
            "countryId" => self.country_id.into(),
            _ => CellValue::Empty,
        }
    }
}

/// `""` keeps every state, otherwise only the selected country's
pub fn filter_by_country(states: &[State], country: &str) -> Vec<State> {
    match opt_int(country) {
        Some(country_id) => states
            .iter()
            .filter(|s| s.country_id == country_id)
            .cloned()
            .collect(),
        None => states.to_vec(),
    }
}

#[component]
pub fn StateList() -> impl IntoView {
    let store = CrudStore::<State>::new();
    let countries = load_lookup::<Country>();
    let country_filter = RwSignal::new(String::new());

    let rows = Signal::derive(move || {
        let country = country_filter.get();
        store.collection.with(|c| filter_by_country(&c.items, &country))
    });

    let columns = vec![
        Column::new("Nome", "name"),
        Column::new("Sigla", "code"),
        Column::new("País", "countryId").render(move |row: &State| {
            countries
                .with(|list| lookup_name(list, Some(row.country_id), |c: &Country| c.name.clone()))
                .into_any()
        }),
        Column::new("", "actions").render(move |row: &State| {
            let row = row.clone();
            let id = row.id;
            view! {
                <RowActions
                    on_edit=Callback::new(move |_| store.open_edit(id))
                    on_delete=Callback::new(move |_| store.ask_delete(row.clone()))
                />
            }
            .into_any()
        }),
    ];

    view! {
        <div class="page">
            <PageHeader title=State::list_name() count=store.count()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| store.open_create()>
                    {icon("plus")}
                    " Novo estado"
                </Button>
            </PageHeader>

            <div class="filter-bar">
                <Select value=country_filter>
                    <option value="">"Todos os países"</option>
                    {move || countries.get().into_iter().map(|c| view! {
                        <option value=c.id.to_string()>{c.name}</option>
                    }).collect_view()}
                </Select>
            </div>

            <CollectionStatus collection=store.collection />

            <DataTable rows=rows columns=columns search_field="name" />

            <Show when=move || store.dialog.with(|d| d.is_open())>
                <StateDetails
                    store=store
                    countries=countries
                    preset_country=opt_int(&country_filter.get_untracked())
                />
            </Show>

            <DeleteConfirmation store=store describe=|s: &State| s.name.clone() />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_state::aggregate::StateDto;

    fn state(name: &str, code: &str, country_id: i32) -> State {
        State::new_for_insert(&StateDto {
            name: name.into(),
            code: code.into(),
            country_id,
        })
    }

    #[test]
    fn test_country_filter() {
        let states = vec![
            state("Rio de Janeiro", "RJ", 1),
            state("São Paulo", "SP", 1),
            state("Lisboa", "LI", 2),
        ];
        assert_eq!(filter_by_country(&states, "").len(), 3);
        assert_eq!(filter_by_country(&states, "1").len(), 2);
        assert_eq!(filter_by_country(&states, "2")[0].name, "Lisboa");
        assert!(filter_by_country(&states, "9").is_empty());
    }
}
