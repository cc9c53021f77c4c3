//! Password recovery: document -> 6-digit code -> new password.

use contracts::system::recovery::{is_valid_code, is_valid_document, normalize_document};
use contracts::system::users::validate_password_strength;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::system::auth::api;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryStep {
    RequestCode,
    VerifyCode,
    ResetPassword,
    Done,
}

impl RecoveryStep {
    pub fn subtitle(&self) -> &'static str {
        match self {
            RecoveryStep::RequestCode => "Informe seu CPF/CNPJ para verificação",
            RecoveryStep::VerifyCode => "Digite o código de verificação enviado",
            RecoveryStep::ResetPassword => "Defina sua nova senha",
            RecoveryStep::Done => "Senha alterada com sucesso!",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecoveryFlow {
    pub step: RecoveryStep,
    /// Digits only, kept for the later steps
    pub document: String,
    pub code: String,
    pub busy: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl Default for RecoveryFlow {
    fn default() -> Self {
        Self {
            step: RecoveryStep::RequestCode,
            document: String::new(),
            code: String::new(),
            busy: false,
            error: None,
            notice: None,
        }
    }
}

impl RecoveryFlow {
    pub fn check_document(document: &str) -> Result<String, String> {
        if is_valid_document(document) {
            Ok(normalize_document(document))
        } else {
            Err("CPF/CNPJ inválido".to_string())
        }
    }

    pub fn check_code(code: &str) -> Result<String, String> {
        let code = code.trim();
        if is_valid_code(code) {
            Ok(code.to_string())
        } else {
            Err("O código deve ter 6 dígitos".to_string())
        }
    }

    pub fn check_passwords(password: &str, confirm: &str) -> Result<(), String> {
        validate_password_strength(password).map_err(str::to_string)?;
        if password != confirm {
            return Err("As senhas não coincidem".to_string());
        }
        Ok(())
    }

    pub fn begin(&mut self) {
        self.busy = true;
        self.error = None;
    }

    pub fn fail(&mut self, message: String) {
        self.busy = false;
        self.error = Some(message);
    }

    pub fn code_sent(&mut self, document: String) {
        self.busy = false;
        self.document = document;
        self.step = RecoveryStep::VerifyCode;
        self.notice = Some("Código enviado com sucesso! Verifique seu e-mail.".to_string());
    }

    pub fn code_verified(&mut self, code: String) {
        self.busy = false;
        self.code = code;
        self.step = RecoveryStep::ResetPassword;
        self.notice = None;
    }

    pub fn password_reset(&mut self) {
        self.busy = false;
        self.step = RecoveryStep::Done;
        self.notice = Some("Senha alterada com sucesso!".to_string());
    }
}

#[component]
pub fn RecoverPasswordPage(on_back: Callback<()>) -> impl IntoView {
    let flow = RwSignal::new(RecoveryFlow::default());
    let document = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = Signal::derive(move || flow.with(|f| f.busy));

    let request_code = move || {
        let doc = match RecoveryFlow::check_document(&document.get_untracked()) {
            Ok(doc) => doc,
            Err(e) => return flow.update(|f| f.fail(e)),
        };
        flow.update(|f| f.begin());
        spawn_local(async move {
            match api::request_recovery_code(doc.clone()).await {
                Ok(_) => flow.update(|f| f.code_sent(doc)),
                Err(e) => flow.update(|f| f.fail(e)),
            }
        });
    };

    let verify_code = move || {
        let value = match RecoveryFlow::check_code(&code.get_untracked()) {
            Ok(value) => value,
            Err(e) => return flow.update(|f| f.fail(e)),
        };
        let doc = flow.with_untracked(|f| f.document.clone());
        flow.update(|f| f.begin());
        spawn_local(async move {
            match api::verify_recovery_code(doc, value.clone()).await {
                Ok(_) => flow.update(|f| f.code_verified(value)),
                Err(e) => flow.update(|f| f.fail(e)),
            }
        });
    };

    let reset = move || {
        let new_password = password.get_untracked();
        if let Err(e) = RecoveryFlow::check_passwords(&new_password, &confirm.get_untracked()) {
            return flow.update(|f| f.fail(e));
        }
        let (doc, value) = flow.with_untracked(|f| (f.document.clone(), f.code.clone()));
        flow.update(|f| f.begin());
        spawn_local(async move {
            match api::reset_password(doc, value, new_password).await {
                Ok(_) => flow.update(|f| f.password_reset()),
                Err(e) => flow.update(|f| f.fail(e)),
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match flow.with_untracked(|f| f.step) {
            RecoveryStep::RequestCode => request_code(),
            RecoveryStep::VerifyCode => verify_code(),
            RecoveryStep::ResetPassword => reset(),
            RecoveryStep::Done => on_back.run(()),
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Recuperação de Senha"</h1>
                <h2>{move || flow.with(|f| f.step.subtitle())}</h2>

                {move || flow.with(|f| f.error.clone()).map(|e| view! { <div class="error-message">{e}</div> })}
                {move || flow.with(|f| f.notice.clone()).map(|n| view! { <div class="success-message">{n}</div> })}

                <form on:submit=on_submit>
                    {move || match flow.with(|f| f.step) {
                        RecoveryStep::RequestCode => view! {
                            <div class="form__group">
                                <Label>"CPF/CNPJ"</Label>
                                <Input value=document placeholder="Digite seu CPF ou CNPJ" disabled=busy />
                            </div>
                        }.into_any(),
                        RecoveryStep::VerifyCode => view! {
                            <div class="form__group">
                                <Label>"Código de Verificação"</Label>
                                <Input value=code placeholder="Digite o código de 6 dígitos" disabled=busy />
                            </div>
                        }.into_any(),
                        RecoveryStep::ResetPassword => view! {
                            <div class="form__group">
                                <Label>"Nova Senha"</Label>
                                <Input value=password input_type=InputType::Password placeholder="Digite sua nova senha" disabled=busy />
                            </div>
                            <div class="form__group">
                                <Label>"Confirme a Nova Senha"</Label>
                                <Input value=confirm input_type=InputType::Password placeholder="Confirme sua nova senha" disabled=busy />
                            </div>
                        }.into_any(),
                        RecoveryStep::Done => ().into_any(),
                    }}

                    <button type="submit" class="btn-primary" disabled=move || busy.get()>
                        {move || match (flow.with(|f| f.step), busy.get()) {
                            (_, true) => "Aguarde...",
                            (RecoveryStep::RequestCode, _) => "Enviar código",
                            (RecoveryStep::VerifyCode, _) => "Verificar código",
                            (RecoveryStep::ResetPassword, _) => "Alterar senha",
                            (RecoveryStep::Done, _) => "Ir para o login",
                        }}
                    </button>
                </form>

                <button class="button button--link" on:click=move |_| on_back.run(())>
                    "Voltar para o login"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_check() {
        assert_eq!(
            RecoveryFlow::check_document("123.456.789-09"),
            Ok("12345678909".to_string())
        );
        assert_eq!(
            RecoveryFlow::check_document("12.345.678/0001-90"),
            Ok("12345678000190".to_string())
        );
        assert_eq!(
            RecoveryFlow::check_document("1234"),
            Err("CPF/CNPJ inválido".to_string())
        );
    }

    #[test]
    fn test_code_check() {
        assert!(RecoveryFlow::check_code(" 482913 ").is_ok());
        assert_eq!(
            RecoveryFlow::check_code("48291"),
            Err("O código deve ter 6 dígitos".to_string())
        );
        assert!(RecoveryFlow::check_code("48a913").is_err());
    }

    #[test]
    fn test_password_check() {
        assert!(RecoveryFlow::check_passwords("Nova@2024", "Nova@2024").is_ok());
        assert_eq!(
            RecoveryFlow::check_passwords("Nova@2024", "Nova@2025"),
            Err("As senhas não coincidem".to_string())
        );
        assert!(RecoveryFlow::check_passwords("fraca", "fraca").is_err());
    }

    #[test]
    fn test_steps_advance_in_order() {
        let mut flow = RecoveryFlow::default();
        flow.begin();
        flow.code_sent("12345678909".into());
        assert_eq!(flow.step, RecoveryStep::VerifyCode);
        assert!(flow.notice.is_some());

        flow.begin();
        flow.fail("Código inválido ou expirado".into());
        assert_eq!(flow.step, RecoveryStep::VerifyCode);
        assert!(!flow.busy);

        flow.begin();
        assert_eq!(flow.error, None);
        flow.code_verified("482913".into());
        assert_eq!(flow.step, RecoveryStep::ResetPassword);
        assert_eq!(flow.code, "482913");

        flow.password_reset();
        assert_eq!(flow.step, RecoveryStep::Done);
    }
}
