use api::{ApiClient, HttpTransport, LoginRequest, RegisterRequest};

use super::{CredentialSink, Destination};

/// Sign-in form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub submitting: bool,
    pub message: Option<String>,
}

impl LoginForm {
    /// Post the credentials. On success the token goes to `session` and the
    /// user is sent to their recipes; on failure the server's text is shown.
    pub async fn submit<T: HttpTransport>(
        &mut self,
        api: &ApiClient<T>,
        session: &mut impl CredentialSink,
    ) -> Option<Destination> {
        self.submitting = true;
        let request = LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        };
        let result = api.login(&request).await;
        self.submitting = false;

        match result {
            Ok(credential) => {
                session.store_credential(credential);
                Some(Destination::MyRecipes)
            }
            Err(e) => {
                self.message = Some(e.message_or("Login failed"));
                None
            }
        }
    }
}

/// Account creation form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub submitting: bool,
    pub message: Option<String>,
}

impl RegisterForm {
    pub async fn submit<T: HttpTransport>(
        &mut self,
        api: &ApiClient<T>,
        session: &mut impl CredentialSink,
    ) -> Option<Destination> {
        self.submitting = true;
        let request = RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        };
        let result = api.register(&request).await;
        self.submitting = false;

        match result {
            Ok(credential) => {
                session.store_credential(credential);
                Some(Destination::MyRecipes)
            }
            Err(e) => {
                self.message = Some(e.message_or("Registration failed"));
                None
            }
        }
    }
}
