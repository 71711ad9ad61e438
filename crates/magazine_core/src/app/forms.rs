//! Login and registration form validation.
//!
//! Checks run in field order and stop at the first failure, so a form error
//! always names exactly one field.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Input field a form error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    LoginEmail,
    LoginPassword,
    RegisterName,
    RegisterEmail,
    RegisterPassword,
    RegisterConfirmPassword,
}

/// Validation or authentication failure shown next to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormError {
    pub field: FormField,
    pub message: String,
}

impl FormError {
    pub fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for FormError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.email.is_empty() {
            return Err(FormError::new(FormField::LoginEmail, "Введите email"));
        }
        if self.password.is_empty() {
            return Err(FormError::new(FormField::LoginPassword, "Введите пароль"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.is_empty() {
            return Err(FormError::new(FormField::RegisterName, "Введите имя"));
        }
        if self.email.is_empty() {
            return Err(FormError::new(FormField::RegisterEmail, "Введите email"));
        }
        if self.password.is_empty() {
            return Err(FormError::new(FormField::RegisterPassword, "Введите пароль"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::new(
                FormField::RegisterPassword,
                format!("Пароль должен содержать не менее {MIN_PASSWORD_LEN} символов"),
            ));
        }
        if self.password != self.confirm_password {
            return Err(FormError::new(
                FormField::RegisterConfirmPassword,
                "Пароли не совпадают",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{FormField, LoginForm, RegisterForm};

    fn register_form(password: &str, confirm: &str) -> RegisterForm {
        RegisterForm {
            name: "Олег".to_string(),
            email: "oleg@example.com".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn login_requires_email_before_password() {
        let err = LoginForm::default().validate().unwrap_err();
        assert_eq!(err.field, FormField::LoginEmail);

        let err = LoginForm {
            email: "a@example.com".to_string(),
            password: String::new(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field, FormField::LoginPassword);
        assert_eq!(err.message, "Введите пароль");
    }

    #[test]
    fn register_rejects_short_password() {
        let err = register_form("12345", "12345").validate().unwrap_err();
        assert_eq!(err.field, FormField::RegisterPassword);
        assert_eq!(err.message, "Пароль должен содержать не менее 6 символов");
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        assert!(register_form("пароль", "пароль").validate().is_ok());
    }

    #[test]
    fn register_rejects_mismatched_confirmation() {
        let err = register_form("secret1", "secret2").validate().unwrap_err();
        assert_eq!(err.field, FormField::RegisterConfirmPassword);
        assert_eq!(err.message, "Пароли не совпадают");
    }

    #[test]
    fn register_reports_missing_name_first() {
        let err = RegisterForm::default().validate().unwrap_err();
        assert_eq!(err.field, FormField::RegisterName);
    }
}
