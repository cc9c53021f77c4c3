use serde::{Deserialize, Serialize};

use crate::domain::common::{
    normalize_optional, AggregateRoot, EntityMetadata, Validate, ValidationErrors,
};
use crate::system::recovery::normalize_document;

pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*()_+";

pub const WEAK_PASSWORD_MESSAGE: &str = "A senha deve conter 1 caractere especial, 1 caractere numérico, 1 letra maiúscula e 1 letra minúscula e ser maior que 8 dígitos!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Cliente,
    Parceiro,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Cliente => "cliente",
            UserRole::Parceiro => "parceiro",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(UserRole::Admin),
            "cliente" => Some(UserRole::Cliente),
            "parceiro" => Some(UserRole::Parceiro),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrador",
            UserRole::Cliente => "Cliente",
            UserRole::Parceiro => "Parceiro",
        }
    }

    pub fn all() -> [UserRole; 3] {
        [UserRole::Admin, UserRole::Cliente, UserRole::Parceiro]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    #[default]
    #[serde(rename = "CPF")]
    Cpf,
    #[serde(rename = "CNPJ")]
    Cnpj,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Cpf => "CPF",
            DocumentType::Cnpj => "CNPJ",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "CPF" => Some(DocumentType::Cpf),
            "CNPJ" => Some(DocumentType::Cnpj),
            _ => None,
        }
    }

    pub fn digits(&self) -> usize {
        match self {
            DocumentType::Cpf => 11,
            DocumentType::Cnpj => 14,
        }
    }
}

/// Пользователь системы (админ, клиент или партнёр). Пароль наружу не отдаётся.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub full_name: String,
    pub document: String,
    pub document_type: DocumentType,
    pub birth_date: String,
    pub photo_url: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl User {
    pub fn new_for_insert(dto: &UserDto) -> Self {
        let mut user = Self {
            id: 0,
            username: String::new(),
            email: String::new(),
            role: UserRole::Cliente,
            full_name: String::new(),
            document: String::new(),
            document_type: DocumentType::Cpf,
            birth_date: String::new(),
            photo_url: String::new(),
            phone: None,
            address: None,
            city: None,
            state: None,
            metadata: EntityMetadata::new(),
        };
        user.update(dto);
        user
    }

    pub fn update(&mut self, dto: &UserDto) {
        self.username = dto.username.trim().to_string();
        self.email = dto.email.trim().to_string();
        self.role = dto.role;
        self.full_name = dto.full_name.trim().to_string();
        self.document = normalize_document(&dto.document);
        self.document_type = dto.document_type;
        self.birth_date = dto.birth_date.trim().to_string();
        self.photo_url = dto.photo_url.trim().to_string();
        self.phone = normalize_optional(dto.phone.clone());
        self.address = normalize_optional(dto.address.clone());
        self.city = normalize_optional(dto.city.clone());
        self.state = normalize_optional(dto.state.clone());
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

impl AggregateRoot for User {
    type Dto = UserDto;

    fn id(&self) -> i32 {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn to_dto(&self) -> UserDto {
        UserDto {
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role,
            full_name: self.full_name.clone(),
            document: self.document.clone(),
            document_type: self.document_type,
            birth_date: self.birth_date.clone(),
            photo_url: self.photo_url.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            password: None,
            confirm_password: None,
            is_adult: None,
        }
    }

    fn aggregate_index() -> &'static str {
        "sys"
    }

    fn collection_name() -> &'static str {
        "users"
    }

    fn element_name() -> &'static str {
        "Usuário"
    }

    fn list_name() -> &'static str {
        "Usuários"
    }
}

/// User form. `password`, `confirmPassword` and `isAdult` are only sent when
/// creating an account; editing leaves them out and keeps the stored password.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    pub full_name: String,
    pub document: String,
    #[serde(default)]
    pub document_type: DocumentType,
    pub birth_date: String,
    pub photo_url: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_adult: Option<bool>,
}

impl Validate for UserDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.min_chars(
            "username",
            &self.username,
            3,
            "Nome de usuário deve ter pelo menos 3 caracteres",
        );
        errors.require("email", &self.email, "Email inválido");
        if errors.get("email").is_none() {
            errors.email("email", &self.email, "Email inválido");
        }
        errors.require("fullName", &self.full_name, "Nome completo é obrigatório");
        errors.require("document", &self.document, "CPF/CNPJ é obrigatório");
        if errors.get("document").is_none()
            && normalize_document(&self.document).len() != self.document_type.digits()
        {
            errors.push("document", "CPF/CNPJ inválido");
        }
        errors.require("birthDate", &self.birth_date, "Data de nascimento é obrigatória");
        errors.require("photoUrl", &self.photo_url, "Foto é obrigatória");

        if let Some(password) = &self.password {
            if let Err(message) = validate_password_strength(password) {
                errors.push("password", message);
            }
            let confirm = self.confirm_password.as_deref().unwrap_or_default();
            if confirm.is_empty() {
                errors.push("confirmPassword", "Confirmação de senha é obrigatória");
            } else if confirm != password {
                errors.push("confirmPassword", "Senhas não são iguais!");
            }
        }
        if self.is_adult == Some(false) {
            errors.push("isAdult", "É necessário confirmar que você é maior de idade");
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordDto {
    /// None when an admin resets someone else's password
    #[serde(default)]
    pub current_password: Option<String>,
    pub new_password: String,
    pub confirm_password: String,
}

impl Validate for ChangePasswordDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Err(message) = validate_password_strength(&self.new_password) {
            errors.push("newPassword", message);
        }
        if self.new_password != self.confirm_password {
            errors.push("confirmPassword", "Senhas não são iguais!");
        }
        errors.into_result()
    }
}

/// At least 8 characters: lowercase, uppercase, digit and one of
/// `!@#$%^&*()_+`; nothing outside those classes.
pub fn validate_password_strength(password: &str) -> Result<(), &'static str> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || PASSWORD_SPECIAL_CHARS.contains(c);
    let strong = password.chars().count() >= 8
        && password.chars().all(allowed)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));
    if strong {
        Ok(())
    } else {
        Err(WEAK_PASSWORD_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_account() -> UserDto {
        UserDto {
            username: "marina".into(),
            email: "marina@porto.com".into(),
            role: UserRole::Parceiro,
            full_name: "Marina Porto".into(),
            document: "123.456.789-09".into(),
            document_type: DocumentType::Cpf,
            birth_date: "1990-01-01".into(),
            photo_url: "/img/marina.png".into(),
            password: Some("Mar@2024x".into()),
            confirm_password: Some("Mar@2024x".into()),
            is_adult: Some(true),
            ..Default::default()
        }
    }

    #[test]
    fn test_password_strength() {
        assert!(validate_password_strength("Abcdef1!").is_ok());
        assert!(validate_password_strength("Abcde1!").is_err()); // 7 chars
        assert!(validate_password_strength("abcdef1!").is_err());
        assert!(validate_password_strength("ABCDEF1!").is_err());
        assert!(validate_password_strength("Abcdefg!").is_err());
        assert!(validate_password_strength("Abcdefg1").is_err());
        assert!(validate_password_strength("Abcdef1!-").is_err()); // '-' not allowed
    }

    #[test]
    fn test_new_account_rules() {
        assert!(new_account().validate().is_ok());

        let dto = UserDto {
            confirm_password: Some("Outra@2024".into()),
            is_adult: Some(false),
            ..new_account()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("confirmPassword"), Some("Senhas não são iguais!"));
        assert_eq!(
            errors.get("isAdult"),
            Some("É necessário confirmar que você é maior de idade")
        );
    }

    #[test]
    fn test_edit_skips_password_and_checks_document_length() {
        let dto = UserDto {
            password: None,
            confirm_password: None,
            is_adult: None,
            document_type: DocumentType::Cnpj,
            ..new_account()
        };
        assert_eq!(dto.validate().unwrap_err().get("document"), Some("CPF/CNPJ inválido"));

        let user = User::new_for_insert(&new_account());
        assert_eq!(user.document, "12345678909");
        assert!(user.to_dto().password.is_none());
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["documentType"], "CPF");
        assert_eq!(json["role"], "parceiro");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_users_table_name() {
        assert_eq!(User::table_name(), "sys_users");
        assert_eq!(User::api_path(), "/api/users");
    }
}
