use contracts::domain::a006_state::aggregate::State;
use contracts::domain::a007_city::aggregate::City;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

use super::details::CityDetails;
use crate::shared::components::{PageHeader, RowActions};
use crate::shared::crud::views::{load_lookup, lookup_name, CollectionStatus, DeleteConfirmation};
use crate::shared::crud::CrudStore;
use crate::shared::data_table::{Column, DataTable};
use crate::shared::form_utils::opt_int;
use crate::shared::icons::icon;
use crate::shared::list_utils::{CellValue, TableRecord};

impl TableRecord for City {
    fn row_id(&self) -> i32 {
        self.id
    }

    fn value(&self, key: &str) -> CellValue {
        match key {
            "name" => self.name.as_str().into(),
            "stateId" => self.state_id.into(),
            _ => CellValue::Empty,
        }
    }
}

pub fn filter_by_state(cities: &[City], state: &str) -> Vec<City> {
    match opt_int(state) {
        Some(state_id) => cities
            .iter()
            .filter(|c| c.state_id == state_id)
            .cloned()
            .collect(),
        None => cities.to_vec(),
    }
}

fn state_label(s: &State) -> String {
    format!("{} ({})", s.name, s.code)
}

#[component]
pub fn CityList() -> impl IntoView {
    let store = CrudStore::<City>::new();
    let states = load_lookup::<State>();
    let state_filter = RwSignal::new(String::new());

    let rows = Signal::derive(move || {
        let state = state_filter.get();
        store.collection.with(|c| filter_by_state(&c.items, &state))
    });

    let columns = vec![
        Column::new("Nome", "name"),
        Column::new("Estado", "stateId").render(move |row: &City| {
            states
                .with(|list| lookup_name(list, Some(row.state_id), state_label))
                .into_any()
        }),
        Column::new("", "actions").render(move |row: &City| {
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
            <PageHeader title=City::list_name() count=store.count()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| store.open_create()>
                    {icon("plus")}
                    " Nova cidade"
                </Button>
            </PageHeader>

            <div class="filter-bar">
                <Select value=state_filter>
                    <option value="">"Todos os estados"</option>
                    {move || states.get().into_iter().map(|s| view! {
                        <option value=s.id.to_string()>{state_label(&s)}</option>
                    }).collect_view()}
                </Select>
            </div>

            <CollectionStatus collection=store.collection />

            <DataTable rows=rows columns=columns search_field="name" />

            <Show when=move || store.dialog.with(|d| d.is_open())>
                <CityDetails
                    store=store
                    states=states
                    preset_state=opt_int(&state_filter.get_untracked())
                />
            </Show>

            <DeleteConfirmation store=store describe=|c: &City| c.name.clone() />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a007_city::aggregate::CityDto;

    #[test]
    fn test_state_filter() {
        let cities: Vec<City> = [("Niterói", 1), ("Paraty", 1), ("Santos", 2)]
            .into_iter()
            .map(|(name, state_id)| {
                City::new_for_insert(&CityDto {
                    name: name.into(),
                    state_id,
                })
            })
            .collect();

        assert_eq!(filter_by_state(&cities, "").len(), 3);
        assert_eq!(filter_by_state(&cities, "1").len(), 2);
        assert_eq!(filter_by_state(&cities, "2")[0].name, "Santos");
    }
}
