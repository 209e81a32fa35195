//! Session
//!
//! Stand-in login: no credentials are checked, the email picks one of two
//! demo accounts. The user lives only as long as the page session.

use thiserror::Error;

use crate::models::User;

pub const ADMIN_EMAIL: &str = "admin@example.com";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Email is required")]
    MissingEmail,
    #[error("Password is required")]
    MissingPassword,
}

pub fn mock_login(email: &str, password: &str) -> Result<User, LoginError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(LoginError::MissingEmail);
    }
    if password.is_empty() {
        return Err(LoginError::MissingPassword);
    }

    let (id, name) = if email == ADMIN_EMAIL {
        ("admin", "Admin User")
    } else {
        ("user1", "John Doe")
    };
    Ok(User {
        id: id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
    })
}
