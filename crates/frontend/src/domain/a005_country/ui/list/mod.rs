use contracts::domain::a005_country::aggregate::Country;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

use super::details::CountryDetails;
use crate::shared::components::{PageHeader, RowActions};
use crate::shared::crud::views::{CollectionStatus, DeleteConfirmation};
use crate::shared::crud::CrudStore;
use crate::shared::data_table::{Column, DataTable};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{CellValue, TableRecord};

impl TableRecord for Country {
    fn row_id(&self) -> i32 {
        self.id
    }

    fn value(&self, key: &str) -> CellValue {
        match key {
            "name" => self.name.as_str().into(),
            "code" => self.code.as_str().into(),
            "createdAt" => format_datetime(&self.metadata.created_at).into(),
            _ => CellValue::Empty,
        }
    }
}

#[component]
pub fn CountryList() -> impl IntoView {
    let store = CrudStore::<Country>::new();

    let columns = vec![
        Column::new("Nome", "name"),
        Column::new("Código", "code"),
        Column::new("Criado em", "createdAt"),
        Column::new("", "actions").render(move |row: &Country| {
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
            <PageHeader title=Country::list_name() count=store.count()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| store.open_create()>
                    {icon("plus")}
                    " Novo país"
                </Button>
            </PageHeader>

            <CollectionStatus collection=store.collection />

            <DataTable rows=store.items() columns=columns search_field="name" />

            <Show when=move || store.dialog.with(|d| d.is_open())>
                <CountryDetails store=store />
            </Show>

            <DeleteConfirmation store=store describe=|c: &Country| c.name.clone() />
        </div>
    }
}
