use contracts::domain::common::AggregateRoot;
use contracts::system::users::{User, UserRole};
use leptos::prelude::*;
use thaw::*;

use super::details::{ChangePasswordDialog, UserDetails};
use crate::shared::components::PageHeader;
use crate::shared::crud::views::{CollectionStatus, DeleteConfirmation};
use crate::shared::crud::CrudStore;
use crate::shared::data_table::{Column, DataTable};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{CellValue, TableRecord};

impl TableRecord for User {
    fn row_id(&self) -> i32 {
        self.id
    }

    fn value(&self, key: &str) -> CellValue {
        match key {
            "username" => self.username.as_str().into(),
            "fullName" => self.full_name.as_str().into(),
            "email" => self.email.as_str().into(),
            "role" => self.role.label().into(),
            "document" => self.document.as_str().into(),
            "createdAt" => format_datetime(&self.metadata.created_at).into(),
            _ => CellValue::Empty,
        }
    }
}

fn role_color(role: UserRole) -> BadgeColor {
    match role {
        UserRole::Admin => BadgeColor::Brand,
        UserRole::Parceiro => BadgeColor::Informative,
        UserRole::Cliente => BadgeColor::Subtle,
    }
}

#[component]
pub fn UserList() -> impl IntoView {
    let store = CrudStore::<User>::new();
    let password_for = RwSignal::new(None::<User>);

    let columns = vec![
        Column::new("Usuário", "username"),
        Column::new("Nome completo", "fullName"),
        Column::new("E-mail", "email"),
        Column::new("Perfil", "role").render(|row: &User| {
            let color = role_color(row.role);
            let label = row.role.label();
            view! {
                <Badge appearance=BadgeAppearance::Tint color=color>
                    {label}
                </Badge>
            }
            .into_any()
        }),
        Column::new("CPF/CNPJ", "document"),
        Column::new("Criado em", "createdAt"),
        Column::new("", "actions").render(move |row: &User| {
            let id = row.id;
            let for_password = row.clone();
            let for_delete = row.clone();
            view! {
                <div class="row-actions" on:click=|ev| ev.stop_propagation()>
                    <button class="button button--icon" title="Editar" on:click=move |_| store.open_edit(id)>
                        {icon("edit")}
                    </button>
                    <button
                        class="button button--icon"
                        title="Alterar senha"
                        on:click=move |_| password_for.set(Some(for_password.clone()))
                    >
                        {icon("key")}
                    </button>
                    <button
                        class="button button--icon button--danger"
                        title="Excluir"
                        on:click=move |_| store.ask_delete(for_delete.clone())
                    >
                        {icon("delete")}
                    </button>
                </div>
            }
            .into_any()
        }),
    ];

    view! {
        <div class="page">
            <PageHeader title=User::list_name() count=store.count() subtitle="Administradores, clientes e parceiros">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| store.open_create()>
                    {icon("plus")}
                    " Novo usuário"
                </Button>
            </PageHeader>

            <CollectionStatus collection=store.collection />

            <DataTable
                rows=store.items()
                columns=columns
                search_field="username"
                on_row_click=Callback::new(move |row: User| store.open_edit(row.id))
            />

            <Show when=move || store.dialog.with(|d| d.is_open())>
                <UserDetails store=store />
            </Show>

            {move || password_for.get().map(|user| view! {
                <ChangePasswordDialog user=user on_close=Callback::new(move |_| password_for.set(None)) />
            })}

            <DeleteConfirmation store=store describe=|u: &User| u.username.clone() />
        </div>
    }
}
