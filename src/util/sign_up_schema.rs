//! Validation schema for the sign-up form.
//!
//! DESIGN
//! ======
//! Rules are declared on [`SignUpFormData`] with `validator` attributes and
//! always run against the whole object, so the confirmation rule can see the
//! password. Each field reports at most one message: the first failing rule
//! in the order listed by [`SignUpField::rule_messages`].

#[cfg(test)]
#[path = "sign_up_schema_test.rs"]
mod sign_up_schema_test;

use std::borrow::Cow;
use std::collections::BTreeMap;

use validator::{Validate, ValidationError, ValidationErrors};

pub const EMAIL_REQUIRED: &str = "E-mail obrigatório";
pub const EMAIL_INVALID: &str = "E-mail inválido";
pub const PASSWORD_TOO_SHORT: &str = "A senha deve possuir no mínimo 6 caracteres";
pub const PASSWORD_REQUIRED: &str = "Senha obrigatória";
pub const PASSWORDS_DIFFER: &str = "As senhas não são iguais";

/// One input of the sign-up form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignUpField {
    Email,
    Password,
    PasswordConfirmation,
}

impl SignUpField {
    pub const ALL: [Self; 3] = [Self::Email, Self::Password, Self::PasswordConfirmation];

    /// Name used for the input `name` attribute and the JSON key.
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::PasswordConfirmation => "passwordConfirmation",
        }
    }

    /// Key under which `validator` reports errors for this field.
    fn schema_key(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::PasswordConfirmation => "password_confirmation",
        }
    }

    /// Failure messages in rule precedence order.
    pub fn rule_messages(self) -> &'static [&'static str] {
        match self {
            Self::Email => &[EMAIL_REQUIRED, EMAIL_INVALID],
            Self::Password => &[PASSWORD_TOO_SHORT, PASSWORD_REQUIRED],
            Self::PasswordConfirmation => &[PASSWORDS_DIFFER],
        }
    }
}

/// Values of one submission attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct SignUpFormData {
    #[validate(length(min = 1, message = "E-mail obrigatório"), email(message = "E-mail inválido"))]
    pub email: String,
    #[validate(
        length(min = 6, message = "A senha deve possuir no mínimo 6 caracteres"),
        custom(function = "validate_present")
    )]
    pub password: String,
    #[validate(must_match(other = "password", message = "As senhas não são iguais"))]
    pub password_confirmation: String,
}

impl SignUpFormData {
    pub fn value(&self, field: SignUpField) -> &str {
        match field {
            SignUpField::Email => &self.email,
            SignUpField::Password => &self.password,
            SignUpField::PasswordConfirmation => &self.password_confirmation,
        }
    }

    pub fn set_value(&mut self, field: SignUpField, value: String) {
        match field {
            SignUpField::Email => self.email = value,
            SignUpField::Password => self.password = value,
            SignUpField::PasswordConfirmation => self.password_confirmation = value,
        }
    }
}

fn validate_present(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed(PASSWORD_REQUIRED)));
    }
    Ok(())
}

/// Per-field error messages, at most one per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<SignUpField, String>);

impl FieldErrors {
    pub fn get(&self, field: SignUpField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn set(&mut self, field: SignUpField, message: Option<String>) {
        match message {
            Some(message) => {
                self.0.insert(field, message);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SignUpField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Validate the whole form.
///
/// # Errors
///
/// Returns the first failing rule's message for every field that fails.
pub fn validate_sign_up(data: &SignUpFormData) -> Result<(), FieldErrors> {
    match data.validate() {
        Ok(()) => Ok(()),
        Err(errors) => Err(first_errors(&errors)),
    }
}

fn first_errors(errors: &ValidationErrors) -> FieldErrors {
    let by_field = errors.field_errors();
    let mut out = FieldErrors::default();
    for field in SignUpField::ALL {
        let Some(field_errors) = by_field.get(field.schema_key()) else {
            continue;
        };
        let reported: Vec<Cow<'static, str>> = field_errors
            .iter()
            .map(|e| e.message.clone().unwrap_or_else(|| e.code.clone()))
            .collect();
        let message = field
            .rule_messages()
            .iter()
            .find(|rule| reported.iter().any(|m| m == **rule))
            .map(|rule| (*rule).to_owned())
            .or_else(|| reported.first().map(ToString::to_string));
        out.set(field, message);
    }
    out
}

/// Error for a single field, evaluated against the whole object.
pub fn field_error(data: &SignUpFormData, field: SignUpField) -> Option<String> {
    validate_sign_up(data).err().and_then(|errors| errors.get(field).map(str::to_owned))
}
