//! Authenticators
//!
//! Credential exchange behind the login and signup forms.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{name_from_email, Credentials, SignupForm, User};
use crate::error::AuthError;
use crate::time::{now_millis, sleep};

#[async_trait(?Send)]
pub trait Authenticator {
    async fn login(&self, credentials: &Credentials) -> Result<User, AuthError>;

    async fn signup(&self, form: &SignupForm) -> Result<User, AuthError>;
}

/// Local stand-in: waits `delay`, then accepts anything
///
/// Passwords are never checked and no token is issued.
#[derive(Debug, Clone)]
pub struct StubAuthenticator {
    delay: Duration,
}

impl StubAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait(?Send)]
impl Authenticator for StubAuthenticator {
    async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        sleep(self.delay).await;
        let email = credentials.email.trim().to_string();
        Ok(User {
            id: now_millis(),
            name: name_from_email(&email),
            email,
        })
    }

    async fn signup(&self, form: &SignupForm) -> Result<User, AuthError> {
        sleep(self.delay).await;
        Ok(User {
            id: now_millis(),
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_login_derives_name() {
        let auth = StubAuthenticator::new(Duration::ZERO);
        let user = auth
            .login(&Credentials {
                email: " ada@example.com ".into(),
                password: "x".into(),
            })
            .await
            .unwrap();
        assert_eq!(user.name, "ada");
        assert_eq!(user.email, "ada@example.com");
        assert!(user.id > 0);
    }

    #[tokio::test]
    async fn test_stub_signup_uses_form_name() {
        let auth = StubAuthenticator::new(Duration::from_millis(1));
        let user = auth
            .signup(&SignupForm {
                name: "Ada Lovelace".into(),
                email: "ada@example.com".into(),
                password: "x".into(),
            })
            .await
            .unwrap();
        assert_eq!(user.name, "Ada Lovelace");
    }
}
