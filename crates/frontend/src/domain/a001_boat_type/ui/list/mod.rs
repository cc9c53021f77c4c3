use contracts::domain::a001_boat_type::aggregate::BoatType;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

use super::details::BoatTypeDetails;
use crate::shared::components::{PageHeader, RowActions};
use crate::shared::crud::views::{CollectionStatus, DeleteConfirmation};
use crate::shared::crud::CrudStore;
use crate::shared::data_table::{Column, DataTable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{CellValue, TableRecord};

impl TableRecord for BoatType {
    fn row_id(&self) -> i32 {
        self.id
    }

    fn value(&self, key: &str) -> CellValue {
        match key {
            "name" => self.name.as_str().into(),
            "description" => (&self.description).into(),
            _ => CellValue::Empty,
        }
    }
}

#[component]
pub fn BoatTypeList() -> impl IntoView {
    let store = CrudStore::<BoatType>::new();

    let columns = vec![
        Column::new("Nome", "name"),
        Column::new("Descrição", "description"),
        Column::new("", "actions").render(move |row: &BoatType| {
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
            <PageHeader title=BoatType::list_name() count=store.count() subtitle="Categorias usadas no cadastro de embarcações">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| store.open_create()>
                    {icon("plus")}
                    " Novo tipo"
                </Button>
            </PageHeader>

            <CollectionStatus collection=store.collection />

            <DataTable
                rows=store.items()
                columns=columns
                search_field="name"
                on_row_click=Callback::new(move |row: BoatType| store.open_edit(row.id))
            />

            <Show when=move || store.dialog.with(|d| d.is_open())>
                <BoatTypeDetails store=store />
            </Show>

            <DeleteConfirmation store=store describe=|t: &BoatType| t.name.clone() />
        </div>
    }
}
