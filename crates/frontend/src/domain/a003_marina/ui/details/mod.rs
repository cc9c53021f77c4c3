use contracts::domain::a003_marina::aggregate::{Marina, MarinaDto};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::{FormDialog, FormField};
use crate::shared::crud::CrudStore;
use crate::shared::form_utils::{opt_float, opt_text, show_opt};

#[component]
pub fn MarinaDetails(store: CrudStore<Marina>) -> impl IntoView {
    let editing = store.editing_record();
    let title = match &editing {
        Some(m) => format!("Editar marina: {}", m.name),
        None => "Nova marina".to_string(),
    };
    let dto = editing.map(|m| m.to_dto()).unwrap_or_default();

    let name = RwSignal::new(dto.name);
    let address = RwSignal::new(show_opt(&dto.address));
    let city = RwSignal::new(show_opt(&dto.city));
    let state = RwSignal::new(show_opt(&dto.state));
    let country = RwSignal::new(show_opt(&dto.country));
    let contact_name = RwSignal::new(show_opt(&dto.contact_name));
    let contact_phone = RwSignal::new(show_opt(&dto.contact_phone));
    let contact_email = RwSignal::new(show_opt(&dto.contact_email));
    let description = RwSignal::new(show_opt(&dto.description));
    let latitude = RwSignal::new(show_opt(&dto.latitude));
    let longitude = RwSignal::new(show_opt(&dto.longitude));

    let on_submit = Callback::new(move |_| {
        store.save(MarinaDto {
            name: name.get_untracked(),
            city: opt_text(&city.get_untracked()),
            state: opt_text(&state.get_untracked()),
            country: opt_text(&country.get_untracked()),
            address: opt_text(&address.get_untracked()),
            contact_name: opt_text(&contact_name.get_untracked()),
            contact_phone: opt_text(&contact_phone.get_untracked()),
            contact_email: opt_text(&contact_email.get_untracked()),
            description: opt_text(&description.get_untracked()),
            latitude: opt_float(&latitude.get_untracked()),
            longitude: opt_float(&longitude.get_untracked()),
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
                <Input value=name />
            </FormField>
            <FormField label="Endereço" field="address" dialog=dialog>
                <Input value=address />
            </FormField>
            <div class="form__row">
                <FormField label="Cidade" field="city" dialog=dialog>
                    <Input value=city />
                </FormField>
                <FormField label="Estado" field="state" dialog=dialog>
                    <Input value=state />
                </FormField>
                <FormField label="País" field="country" dialog=dialog>
                    <Input value=country />
                </FormField>
            </div>
            <div class="form__row">
                <FormField label="Contato" field="contactName" dialog=dialog>
                    <Input value=contact_name />
                </FormField>
                <FormField label="Telefone" field="contactPhone" dialog=dialog>
                    <Input value=contact_phone />
                </FormField>
                <FormField label="E-mail" field="contactEmail" dialog=dialog>
                    <Input value=contact_email input_type=InputType::Email />
                </FormField>
            </div>
            <div class="form__row">
                <FormField label="Latitude" field="latitude" dialog=dialog>
                    <Input value=latitude placeholder="-22.9519" />
                </FormField>
                <FormField label="Longitude" field="longitude" dialog=dialog>
                    <Input value=longitude placeholder="-43.2105" />
                </FormField>
            </div>
            <FormField label="Descrição" field="description" dialog=dialog>
                <Textarea value=description />
            </FormField>
        </FormDialog>
    }
}
