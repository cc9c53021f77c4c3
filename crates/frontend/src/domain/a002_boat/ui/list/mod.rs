use contracts::domain::a001_boat_type::aggregate::BoatType;
use contracts::domain::a002_boat::aggregate::{Boat, BoatStatus};
use contracts::domain::a003_marina::aggregate::Marina;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

use super::details::BoatDetails;
use crate::shared::components::{PageHeader, RowActions};
use crate::shared::crud::views::{load_lookup, lookup_name, CollectionStatus, DeleteConfirmation};
use crate::shared::crud::CrudStore;
use crate::shared::data_table::{Column, DataTable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{CellValue, TableRecord};

pub const ALL: &str = "all";

impl TableRecord for Boat {
    fn row_id(&self) -> i32 {
        self.id
    }

    fn value(&self, key: &str) -> CellValue {
        match key {
            "name" => self.name.as_str().into(),
            "type" => self.boat_type.as_str().into(),
            "status" => self.status.label().into(),
            "passengerCount" => self.passenger_count.into(),
            "hasSailor" => self.has_sailor.into(),
            "model" => (&self.model).into(),
            "city" => (&self.city).into(),
            "tieDocument" => self.tie_document.as_str().into(),
            _ => CellValue::Empty,
        }
    }
}

/// Type and status filters applied before the table sees the rows
pub fn filter_boats(boats: &[Boat], boat_type: &str, status: &str) -> Vec<Boat> {
    boats
        .iter()
        .filter(|b| boat_type == ALL || b.boat_type == boat_type)
        .filter(|b| status == ALL || b.status.as_str() == status)
        .cloned()
        .collect()
}

#[component]
pub fn BoatList() -> impl IntoView {
    let store = CrudStore::<Boat>::new();
    let boat_types = load_lookup::<BoatType>();
    let marinas = load_lookup::<Marina>();

    let type_filter = RwSignal::new(ALL.to_string());
    let status_filter = RwSignal::new(ALL.to_string());

    let rows = Signal::derive(move || {
        let boat_type = type_filter.get();
        let status = status_filter.get();
        store
            .collection
            .with(|c| filter_boats(&c.items, &boat_type, &status))
    });

    let columns = vec![
        Column::new("Nome", "name"),
        Column::new("Tipo", "type"),
        Column::new("Situação", "status").render(|row: &Boat| {
            let color = match row.status {
                BoatStatus::Active => BadgeColor::Success,
                BoatStatus::Inactive => BadgeColor::Danger,
            };
            let label = row.status.label();
            view! {
                <Badge appearance=BadgeAppearance::Tint color=color>{label}</Badge>
            }
            .into_any()
        }),
        Column::new("Passageiros", "passengerCount"),
        Column::new("Marinheiro", "hasSailor"),
        Column::new("Marina", "marinaId").render(move |row: &Boat| {
            marinas
                .with(|list| lookup_name(list, row.marina_id, |m: &Marina| m.name.clone()))
                .into_any()
        }),
        Column::new("TIE", "tieDocument"),
        Column::new("", "actions").render(move |row: &Boat| {
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
            <PageHeader title=Boat::list_name() count=store.count()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| store.open_create()>
                    {icon("plus")}
                    " Nova embarcação"
                </Button>
            </PageHeader>

            <div class="filter-bar">
                <Select value=type_filter>
                    <option value=ALL>"Todos os tipos"</option>
                    {move || boat_types.get().into_iter().map(|t| view! {
                        <option value=t.name.clone()>{t.name.clone()}</option>
                    }).collect_view()}
                </Select>
                <Select value=status_filter>
                    <option value=ALL>"Todas as situações"</option>
                    {BoatStatus::all().into_iter().map(|s| view! {
                        <option value=s.as_str()>{s.label()}</option>
                    }).collect_view()}
                </Select>
            </div>

            <CollectionStatus collection=store.collection />

            <DataTable
                rows=rows
                columns=columns
                search_field="name"
                on_row_click=Callback::new(move |row: Boat| store.open_edit(row.id))
            />

            <Show when=move || store.dialog.with(|d| d.is_open())>
                <BoatDetails store=store boat_types=boat_types marinas=marinas />
            </Show>

            <DeleteConfirmation store=store describe=|b: &Boat| b.name.clone() />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_boat::aggregate::BoatDto;

    fn boat(name: &str, boat_type: &str, status: BoatStatus) -> Boat {
        Boat::new_for_insert(&BoatDto {
            name: name.into(),
            boat_type: boat_type.into(),
            status,
            passenger_count: 8,
            tie_document: "TIE".into(),
            ..Default::default()
        })
    }

    #[test]
    fn test_filters_combine() {
        let boats = vec![
            boat("Mar Azul", "Lancha", BoatStatus::Active),
            boat("Brisa", "Veleiro", BoatStatus::Active),
            boat("Netuno", "Lancha", BoatStatus::Inactive),
        ];

        assert_eq!(filter_boats(&boats, ALL, ALL).len(), 3);
        assert_eq!(filter_boats(&boats, "Lancha", ALL).len(), 2);
        let active_lanchas = filter_boats(&boats, "Lancha", "active");
        assert_eq!(active_lanchas.len(), 1);
        assert_eq!(active_lanchas[0].name, "Mar Azul");
        assert!(filter_boats(&boats, "Catamarã", ALL).is_empty());
    }

    #[test]
    fn test_status_cell_uses_label() {
        let b = boat("Netuno", "Lancha", BoatStatus::Inactive);
        assert_eq!(b.value("status"), CellValue::from("Inativa"));
        assert_eq!(b.value("hasSailor").to_string(), "Não");
    }
}
