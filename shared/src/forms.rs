use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::FieldErrors;

// ============================================================================
// Schema
// ============================================================================

/// A form shape with field rules.
///
/// The derived `Validate` rules cover single-field constraints. `refine` adds
/// checks the derive cannot express; it runs only when the derive passed for
/// the fields it inspects.
pub trait FormSchema: Validate + Clone + Default + 'static {
    fn refine(&self, _errors: &mut FieldErrors) {}

    fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from(e),
        };
        self.refine(&mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Names one string field of a form and how to reach it.
pub struct FieldRef<F> {
    pub name: &'static str,
    read: fn(&F) -> &str,
    write: fn(&mut F) -> &mut String,
}

impl<F> FieldRef<F> {
    pub const fn new(
        name: &'static str,
        read: fn(&F) -> &str,
        write: fn(&mut F) -> &mut String,
    ) -> Self {
        Self { name, read, write }
    }

    pub fn get<'a>(&self, form: &'a F) -> &'a str {
        (self.read)(form)
    }

    pub fn set(&self, form: &mut F, value: String) {
        *(self.write)(form) = value;
    }
}

impl<F> Clone for FieldRef<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for FieldRef<F> {}

impl<F> PartialEq for FieldRef<F> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<F> std::fmt::Debug for FieldRef<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FieldRef").field(&self.name).finish()
    }
}

// ============================================================================
// Department
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Logistica,
    Desenvolvimento,
    Sac,
    GerenciamentoDeRisco,
}

impl Department {
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Logistica => "Logística",
            Department::Desenvolvimento => "Desenvolvimento",
            Department::Sac => "SAC",
            Department::GerenciamentoDeRisco => "Gerenciamento de Risco",
        }
    }

    pub fn all() -> &'static [Department] {
        &[
            Department::Logistica,
            Department::Desenvolvimento,
            Department::Sac,
            Department::GerenciamentoDeRisco,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown department: {0}")]
pub struct UnknownDepartment(pub String);

impl FromStr for Department {
    type Err = UnknownDepartment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::all()
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDepartment(s.to_string()))
    }
}

// ============================================================================
// Forms
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignInForm {
    #[validate(email(message = "E-mail inválido"))]
    pub email: String,
    #[validate(length(min = 1, message = "Senha é obrigatória"))]
    pub password: String,
}

impl SignInForm {
    pub const EMAIL: FieldRef<Self> =
        FieldRef::<Self>::new("email", |f| f.email.as_str(), |f| &mut f.email);
    pub const PASSWORD: FieldRef<Self> =
        FieldRef::<Self>::new("password", |f| f.password.as_str(), |f| &mut f.password);
}

impl FormSchema for SignInForm {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignUpForm {
    #[validate(length(min = 1, message = "Nome completo é obrigatório"))]
    pub full_name: String,
    #[validate(email(message = "E-mail inválido"))]
    pub email: String,
    #[validate(length(min = 1, message = "Senha é obrigatória"))]
    pub password: String,
    #[validate(length(min = 1, message = "Confirmação de senha é obrigatória"))]
    pub confirm_password: String,
    #[validate(length(min = 1, message = "Departamento é obrigatório"))]
    pub department: String,
}

impl SignUpForm {
    pub const FULL_NAME: FieldRef<Self> =
        FieldRef::<Self>::new("full_name", |f| f.full_name.as_str(), |f| &mut f.full_name);
    pub const EMAIL: FieldRef<Self> =
        FieldRef::<Self>::new("email", |f| f.email.as_str(), |f| &mut f.email);
    pub const PASSWORD: FieldRef<Self> =
        FieldRef::<Self>::new("password", |f| f.password.as_str(), |f| &mut f.password);
    pub const CONFIRM_PASSWORD: FieldRef<Self> = FieldRef::<Self>::new(
        "confirm_password",
        |f| f.confirm_password.as_str(),
        |f| &mut f.confirm_password,
    );
    pub const DEPARTMENT: FieldRef<Self> =
        FieldRef::<Self>::new("department", |f| f.department.as_str(), |f| &mut f.department);

    /// The selected department, if the field holds one of the known labels.
    pub fn department(&self) -> Option<Department> {
        self.department.parse().ok()
    }

    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }
}

impl FormSchema for SignUpForm {
    fn refine(&self, errors: &mut FieldErrors) {
        // Password equality is checked by the sign-up handler, not here.
        if !self.department.is_empty() && self.department().is_none() {
            errors.add("department", "Departamento inválido");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_up(password: &str, confirm: &str) -> SignUpForm {
        SignUpForm {
            full_name: "Ana".into(),
            email: "a@b.com".into(),
            password: password.into(),
            confirm_password: confirm.into(),
            department: "SAC".into(),
        }
    }

    #[test]
    fn sign_in_accepts_valid_input() {
        let form = SignInForm {
            email: "user@test.com".into(),
            password: "abc".into(),
        };
        assert!(form.check().is_ok());
    }

    #[test]
    fn sign_in_rejects_malformed_email() {
        for email in ["", "not-an-email", "user@", "@test.com"] {
            let form = SignInForm {
                email: email.into(),
                password: "abc".into(),
            };
            let errors = form.check().unwrap_err();
            assert_eq!(errors.get("email"), Some("E-mail inválido"), "{email:?}");
        }
    }

    #[test]
    fn sign_in_requires_password() {
        let form = SignInForm {
            email: "user@test.com".into(),
            password: String::new(),
        };
        let errors = form.check().unwrap_err();
        assert_eq!(errors.get("password"), Some("Senha é obrigatória"));
        assert!(!errors.contains("email"));
    }

    #[test]
    fn sign_up_schema_ignores_password_mismatch() {
        assert!(sign_up("x", "y").check().is_ok());
        assert!(!sign_up("x", "y").passwords_match());
        assert!(sign_up("x", "x").passwords_match());
    }

    #[test]
    fn sign_up_requires_full_name_and_department() {
        let form = SignUpForm {
            full_name: String::new(),
            department: String::new(),
            ..sign_up("x", "x")
        };
        let errors = form.check().unwrap_err();
        assert_eq!(errors.get("full_name"), Some("Nome completo é obrigatório"));
        assert_eq!(errors.get("department"), Some("Departamento é obrigatório"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn sign_up_rejects_unknown_department() {
        let form = SignUpForm {
            department: "Marketing".into(),
            ..sign_up("x", "x")
        };
        let errors = form.check().unwrap_err();
        assert_eq!(errors.get("department"), Some("Departamento inválido"));
    }

    #[test]
    fn field_refs_read_and_write_their_field() {
        let mut form = SignUpForm::default();
        SignUpForm::CONFIRM_PASSWORD.set(&mut form, "x".into());
        assert_eq!(form.confirm_password, "x");
        assert_eq!(SignUpForm::CONFIRM_PASSWORD.get(&form), "x");
        assert_eq!(SignUpForm::CONFIRM_PASSWORD.name, "confirm_password");
        assert!(SignUpForm::PASSWORD.get(&form).is_empty());
    }

    #[test]
    fn department_labels_round_trip() {
        for dept in Department::all() {
            assert_eq!(dept.as_str().parse::<Department>(), Ok(*dept));
        }
        assert!("sac".parse::<Department>().is_err());
    }

    #[test]
    fn sign_up_form_uses_camel_case_keys() {
        let json = serde_json::to_value(sign_up("x", "x")).unwrap();
        assert_eq!(json["fullName"], "Ana");
        assert_eq!(json["confirmPassword"], "x");
    }
}
