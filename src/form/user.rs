use crate::backend::model::{LoginRequest, RegisterRequest};

#[derive(Default, Debug, Clone)]
pub struct LoginFormData {
    pub username: String,
    pub password: String,
}

impl LoginFormData {
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Default, Debug, Clone)]
pub struct RegisterFormData {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
}

impl RegisterFormData {
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }

    /// Builds the request payload. The confirmation never leaves the form.
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.clone(),
            password: self.password.clone(),
            role: self.role.clone(),
        }
    }
}
