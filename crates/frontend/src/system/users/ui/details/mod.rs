//! Форма пользователя и смена пароля администратором

use contracts::domain::common::{AggregateRoot, Validate, ValidationErrors};
use contracts::system::users::{ChangePasswordDto, DocumentType, User, UserDto, UserRole};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::system::users::api;
use crate::shared::components::{FormDialog, FormField, Modal};
use crate::shared::crud::CrudStore;
use crate::shared::form_utils::{opt_text, show_opt};

#[component]
pub fn UserDetails(store: CrudStore<User>) -> impl IntoView {
    let editing = store.editing_record();
    let is_new = editing.is_none();
    let title = match &editing {
        Some(u) => format!("Editar usuário: {}", u.username),
        None => "Novo usuário".to_string(),
    };
    let dto = editing.map(|u| u.to_dto()).unwrap_or_default();

    let username = RwSignal::new(dto.username);
    let email = RwSignal::new(dto.email);
    let full_name = RwSignal::new(dto.full_name);
    let role = RwSignal::new(dto.role.as_str().to_string());
    let document_type = RwSignal::new(dto.document_type.as_str().to_string());
    let document = RwSignal::new(dto.document);
    let birth_date = RwSignal::new(dto.birth_date);
    let photo_url = RwSignal::new(dto.photo_url);
    let phone = RwSignal::new(show_opt(&dto.phone));
    let address = RwSignal::new(show_opt(&dto.address));
    let city = RwSignal::new(show_opt(&dto.city));
    let state = RwSignal::new(show_opt(&dto.state));
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let on_submit = Callback::new(move |_| {
        store.save(UserDto {
            username: username.get_untracked(),
            email: email.get_untracked(),
            role: UserRole::parse(&role.get_untracked()).unwrap_or_default(),
            full_name: full_name.get_untracked(),
            document: document.get_untracked(),
            document_type: DocumentType::parse(&document_type.get_untracked()).unwrap_or_default(),
            birth_date: birth_date.get_untracked(),
            photo_url: photo_url.get_untracked(),
            phone: opt_text(&phone.get_untracked()),
            address: opt_text(&address.get_untracked()),
            city: opt_text(&city.get_untracked()),
            state: opt_text(&state.get_untracked()),
            // A new account always carries a password; edits keep the stored one
            password: is_new.then(|| password.get_untracked()),
            confirm_password: is_new.then(|| confirm_password.get_untracked()),
            is_adult: None,
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
            <div class="form__row">
                <FormField label="Usuário" field="username" dialog=dialog>
                    <Input value=username />
                </FormField>
                <FormField label="Perfil" field="role" dialog=dialog>
                    <Select value=role>
                        {UserRole::all().into_iter().map(|r| view! {
                            <option value=r.as_str()>{r.label()}</option>
                        }).collect_view()}
                    </Select>
                </FormField>
            </div>
            <FormField label="Nome completo" field="fullName" dialog=dialog>
                <Input value=full_name />
            </FormField>
            <FormField label="E-mail" field="email" dialog=dialog>
                <Input value=email input_type=InputType::Email />
            </FormField>
            <div class="form__row">
                <FormField label="Tipo de documento" field="documentType" dialog=dialog>
                    <Select value=document_type>
                        <option value=DocumentType::Cpf.as_str()>"CPF"</option>
                        <option value=DocumentType::Cnpj.as_str()>"CNPJ"</option>
                    </Select>
                </FormField>
                <FormField label="CPF/CNPJ" field="document" dialog=dialog>
                    <Input value=document />
                </FormField>
                <FormField label="Data de nascimento" field="birthDate" dialog=dialog>
                    <Input value=birth_date input_type=InputType::Date />
                </FormField>
            </div>
            <FormField label="Foto (URL)" field="photoUrl" dialog=dialog>
                <Input value=photo_url />
            </FormField>
            <div class="form__row">
                <FormField label="Telefone" field="phone" dialog=dialog>
                    <Input value=phone input_type=InputType::Tel />
                </FormField>
                <FormField label="Endereço" field="address" dialog=dialog>
                    <Input value=address />
                </FormField>
            </div>
            <div class="form__row">
                <FormField label="Cidade" field="city" dialog=dialog>
                    <Input value=city />
                </FormField>
                <FormField label="Estado" field="state" dialog=dialog>
                    <Input value=state />
                </FormField>
            </div>
            {is_new.then(|| view! {
                <div class="form__row">
                    <FormField label="Senha" field="password" dialog=dialog>
                        <Input value=password input_type=InputType::Password />
                    </FormField>
                    <FormField label="Confirme a senha" field="confirmPassword" dialog=dialog>
                        <Input value=confirm_password input_type=InputType::Password />
                    </FormField>
                </div>
            })}
        </FormDialog>
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct PasswordForm {
    busy: bool,
    error: Option<String>,
    fields: ValidationErrors,
}

/// Admin sets a new password for `user`; no current password is asked
#[component]
pub fn ChangePasswordDialog(user: User, on_close: Callback<()>) -> impl IntoView {
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let form = RwSignal::new(PasswordForm::default());
    let user_id = user.id;

    let submit = move || {
        let dto = ChangePasswordDto {
            current_password: None,
            new_password: new_password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        if let Err(fields) = dto.validate() {
            form.set(PasswordForm {
                fields,
                ..Default::default()
            });
            return;
        }
        form.set(PasswordForm {
            busy: true,
            ..Default::default()
        });
        spawn_local(async move {
            match api::change_password(user_id, &dto).await {
                Ok(message) => {
                    log::info!("user {}: {}", user_id, message.message);
                    on_close.run(());
                }
                Err(failure) => form.set(PasswordForm {
                    busy: false,
                    error: Some(failure.message),
                    fields: failure.fields,
                }),
            }
        });
    };
    let busy = Signal::derive(move || form.with(|f| f.busy));
    let field_error = move |field: &'static str| {
        move || {
            form.with(|f| f.fields.get(field).map(str::to_string))
                .map(|m| view! { <span class="form__error">{m}</span> })
        }
    };

    view! {
        <Modal
            title=format!("Alterar senha: {}", user.username)
            on_close=on_close
            footer=move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(()) disabled=busy>
                    "Cancelar"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| submit() disabled=busy>
                    {move || if busy.get() { "Salvando..." } else { "Salvar" }}
                </Button>
            }
        >
            {move || form.with(|f| f.error.clone()).map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="form__group">
                <Label>"Nova senha"</Label>
                <Input value=new_password input_type=InputType::Password />
                {field_error("newPassword")}
            </div>
            <div class="form__group">
                <Label>"Confirme a nova senha"</Label>
                <Input value=confirm_password input_type=InputType::Password />
                {field_error("confirmPassword")}
            </div>
        </Modal>
    }
}
