use contracts::domain::a004_itinerary::aggregate::Itinerary;
use contracts::domain::common::AggregateRoot;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::ItineraryDetails;
use crate::shared::components::{PageHeader, RowActions};
use crate::shared::crud::views::{lookup_name, CollectionStatus, DeleteConfirmation};
use crate::shared::crud::CrudStore;
use crate::shared::data_table::{Column, DataTable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{CellValue, TableRecord};
use crate::system::auth::context::use_auth;
use crate::system::users::api::fetch_partners;

impl TableRecord for Itinerary {
    fn row_id(&self) -> i32 {
        self.id
    }

    fn value(&self, key: &str) -> CellValue {
        match key {
            "name" => self.name.as_str().into(),
            "description" => (&self.description).into(),
            "observations" => (&self.observations).into(),
            "partnerId" => self.partner_id.into(),
            _ => CellValue::Empty,
        }
    }
}

/// Partners for the admin's select; everyone else gets an empty list
fn load_partners(is_admin: bool) -> RwSignal<Vec<User>> {
    let partners = RwSignal::new(Vec::new());
    if is_admin {
        spawn_local(async move {
            match fetch_partners().await {
                Ok(list) => partners.set(list),
                Err(e) => log::warn!("partners: {}", e.message),
            }
        });
    }
    partners
}

#[component]
pub fn ItineraryList() -> impl IntoView {
    let auth = use_auth();
    let is_admin = auth.state.with_untracked(|s| s.user.as_ref().is_some_and(|u| u.is_admin()));
    // The backend already narrows the list to a partner's own itineraries
    let store = CrudStore::<Itinerary>::new();
    let partners = load_partners(is_admin);

    let mut columns = vec![
        Column::new("Nome", "name"),
        Column::new("Descrição", "description"),
        Column::new("Observações", "observations"),
    ];
    if is_admin {
        columns.push(Column::new("Parceiro", "partnerId").render(move |row: &Itinerary| {
            partners
                .with(|list| lookup_name(list, row.partner_id, |u: &User| u.full_name.clone()))
                .into_any()
        }));
    }
    columns.push(Column::new("", "actions").render(move |row: &Itinerary| {
        let row = row.clone();
        let id = row.id;
        view! {
            <RowActions
                on_edit=Callback::new(move |_| store.open_edit(id))
                on_delete=Callback::new(move |_| store.ask_delete(row.clone()))
            />
        }
        .into_any()
    }));

    view! {
        <div class="page">
            <PageHeader title=Itinerary::list_name() count=store.count()>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| store.open_create()>
                    {icon("plus")}
                    " Novo roteiro"
                </Button>
            </PageHeader>

            <CollectionStatus collection=store.collection />

            <DataTable
                rows=store.items()
                columns=columns
                search_field="name"
                on_row_click=Callback::new(move |row: Itinerary| store.open_edit(row.id))
            />

            <Show when=move || store.dialog.with(|d| d.is_open())>
                <ItineraryDetails store=store partners=partners is_admin=is_admin />
            </Show>

            <DeleteConfirmation store=store describe=|i: &Itinerary| i.name.clone() />
        </div>
    }
}
