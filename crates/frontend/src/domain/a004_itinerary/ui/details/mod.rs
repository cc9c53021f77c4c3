use contracts::domain::a004_itinerary::aggregate::{Itinerary, ItineraryDto};
use contracts::domain::common::AggregateRoot;
use contracts::system::users::User;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::{FormDialog, FormField};
use crate::shared::crud::CrudStore;
use crate::shared::form_utils::{id_value, opt_int, opt_text, show_opt};
use crate::system::auth::context::use_auth;

#[component]
pub fn ItineraryDetails(
    store: CrudStore<Itinerary>,
    partners: RwSignal<Vec<User>>,
    /// Only admins pick the partner; a partner's own id is sent otherwise
    is_admin: bool,
) -> impl IntoView {
    let own_id = use_auth().state.with_untracked(|s| s.user.as_ref().map(|u| u.id));
    let editing = store.editing_record();
    let title = match &editing {
        Some(i) => format!("Editar roteiro: {}", i.name),
        None => "Novo roteiro".to_string(),
    };
    let dto = editing.map(|i| i.to_dto()).unwrap_or_default();

    let name = RwSignal::new(dto.name);
    let description = RwSignal::new(show_opt(&dto.description));
    let observations = RwSignal::new(show_opt(&dto.observations));
    let partner_id = RwSignal::new(id_value(dto.partner_id));

    let on_submit = Callback::new(move |_| {
        let partner_id = if is_admin {
            opt_int(&partner_id.get_untracked())
        } else {
            own_id
        };
        store.save(ItineraryDto {
            name: name.get_untracked(),
            description: opt_text(&description.get_untracked()),
            observations: opt_text(&observations.get_untracked()),
            partner_id,
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
            <FormField label="Nome" field="name" dialog=dialog>
                <Input value=name placeholder="Ex.: Ilhas de Angra" />
            </FormField>
            <FormField label="Descrição" field="description" dialog=dialog>
                <Textarea value=description />
            </FormField>
            <FormField label="Observações" field="observations" dialog=dialog>
                <Textarea value=observations />
            </FormField>
            {is_admin.then(|| view! {
                <FormField label="Parceiro" field="partnerId" dialog=dialog>
                    <Select value=partner_id>
                        <option value="">"Sem parceiro"</option>
                        {move || partners.get().into_iter().map(|p| view! {
                            <option value=p.id.to_string()>{p.full_name}</option>
                        }).collect_view()}
                    </Select>
                </FormField>
            })}
        </FormDialog>
    }
}
