use super::session::{AuthError, Session};
use crate::domain::common::validation::required_email;
use crate::domain::common::{Catalog, ValidationErrors};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::catalog_enum! {
    pub enum Role {
        Admin => ("admin", "Administrator"),
        Manager => ("manager", "Manager"),
        Agent => ("agent", "Agent"),
    }
}

struct DemoAccount {
    email: &'static str,
    password: &'static str,
    role: Role,
}

/// Hard-coded demo accounts. There is no real authentication.
const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        email: "admin@realestate.com",
        password: "admin123",
        role: Role::Admin,
    },
    DemoAccount {
        email: "manager@realestate.com",
        password: "manager123",
        role: Role::Manager,
    },
    DemoAccount {
        email: "agent@realestate.com",
        password: "agent123",
        role: Role::Agent,
    },
];

/// Accounts shown as hints on the login page
pub fn demo_logins() -> Vec<(&'static str, &'static str, Role)> {
    DEMO_ACCOUNTS
        .iter()
        .map(|a| (a.email, a.password, a.role))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginCredentials, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let email = errors.check("email", required_email(&self.email, "Email"));
        // passwords are not trimmed
        let password = if self.password.is_empty() {
            errors.add("password", "Password is required");
            None
        } else {
            Some(self.password.clone())
        };

        match (email, password) {
            (Some(email), Some(password)) if errors.is_empty() => Ok(LoginCredentials {
                email,
                password,
                remember_me: self.remember_me,
            }),
            _ => Err(errors),
        }
    }
}

/// Check credentials against the demo table and open a session
pub fn authenticate(credentials: &LoginCredentials, now: DateTime<Utc>) -> Result<Session, AuthError> {
    let account = DEMO_ACCOUNTS
        .iter()
        .find(|a| {
            a.email.eq_ignore_ascii_case(credentials.email.trim()) && a.password == credentials.password
        })
        .ok_or_else(|| {
            log::warn!("Failed login attempt for {}", credentials.email);
            AuthError::InvalidCredentials
        })?;

    log::info!("User {} logged in as {}", account.email, account.role.code());
    Ok(Session {
        email: account.email.to_string(),
        role: account.role,
        login_time: now,
        remember_me: credentials.remember_me,
    })
}

/// Name shown in the header: the capitalized local part of the email
pub fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default().trim();
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => email.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap()
    }

    fn credentials(email: &str, password: &str) -> LoginCredentials {
        LoginForm {
            email: email.into(),
            password: password.into(),
            remember_me: true,
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_known_account_opens_session() {
        let session = authenticate(&credentials("Admin@RealEstate.com", "admin123"), now()).unwrap();
        assert_eq!(session.email, "admin@realestate.com");
        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.login_time, now());
        assert!(session.remember_me);
    }

    #[test]
    fn test_wrong_password_is_generic_error() {
        let err = authenticate(&credentials("agent@realestate.com", "nope"), now()).unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        let err = authenticate(&credentials("ghost@realestate.com", "agent123"), now()).unwrap_err();
        assert_eq!(err.to_string(), AuthError::InvalidCredentials.to_string());
    }

    #[test]
    fn test_form_validation() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn test_role_codes() {
        assert_eq!(Role::Manager.code(), "manager");
        assert_eq!(Role::from_code("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::Agent.label(), "Agent");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("agent@realestate.com"), "Agent");
        assert_eq!(display_name("@x"), "@x");
    }
}
