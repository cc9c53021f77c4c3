use contracts::domain::a003_marina::aggregate::Marina;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

use super::details::MarinaDetails;
use crate::shared::components::{PageHeader, RowActions};
use crate::shared::crud::views::{CollectionStatus, DeleteConfirmation};
use crate::shared::crud::CrudStore;
use crate::shared::data_table::{Column, DataTable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{CellValue, TableRecord};

impl TableRecord for Marina {
    fn row_id(&self) -> i32 {
        self.id
    }

    fn value(&self, key: &str) -> CellValue {
        match key {
            "name" => self.name.as_str().into(),
            "location" => self.location().into(),
            "country" => (&self.country).into(),
            "contactName" => (&self.contact_name).into(),
            "contactPhone" => (&self.contact_phone).into(),
            _ => CellValue::Empty,
        }
    }
}

#[component]
pub fn MarinaList() -> impl IntoView {
    let store = CrudStore::<Marina>::new();

    let columns = vec![
        Column::new("Nome", "name"),
        Column::new("Localização", "location"),
        Column::new("País", "country"),
        Column::new("Contato", "contactName"),
        Column::new("Telefone", "contactPhone"),
        Column::new("", "actions").render(move |row: &Marina| {
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
            <PageHeader title=Marina::list_name() count=store.count()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| store.open_create()>
                    {icon("plus")}
                    " Nova marina"
                </Button>
            </PageHeader>

            <CollectionStatus collection=store.collection />

            <DataTable
                rows=store.items()
                columns=columns
                search_field="name"
                on_row_click=Callback::new(move |row: Marina| store.open_edit(row.id))
            />

            <Show when=move || store.dialog.with(|d| d.is_open())>
                <MarinaDetails store=store />
            </Show>

            <DeleteConfirmation store=store describe=|m: &Marina| m.name.clone() />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_marina::aggregate::MarinaDto;

    #[test]
    fn test_location_cell() {
        let marina = Marina::new_for_insert(&MarinaDto {
            name: "Marina da Glória".into(),
            city: Some("Rio de Janeiro".into()),
            state: Some("RJ".into()),
            ..Default::default()
        });
        assert_eq!(marina.value("location").to_string(), "Rio de Janeiro, RJ");
        assert_eq!(marina.value("contactName"), CellValue::Empty);
    }
}
