use crate::modules::account::domain::{LoginCredentials, RegisterCredentials};
use crate::shared::validation::{
    FieldErrors, FieldRule, FieldValue, FormSource, MinLength, PatternRule, Required,
    ValidationSchema,
};
use regex::Regex;
use std::sync::{Arc, LazyLock};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
static PASSWORD_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\d]{8,}$").expect("password charset pattern"));
static HAS_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]").expect("letter pattern"));
static HAS_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").expect("digit pattern"));

pub const REGISTERED_MESSAGE: &str = "Your account has been created! You can now log in.";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Check your details and try again.";
pub const REGISTER_FAILED_MESSAGE: &str = "Registration failed. Please try again.";

static REGISTER_SCHEMA: LazyLock<ValidationSchema> = LazyLock::new(|| {
    ValidationSchema::new()
        .field(
            "username",
            vec![
                rule(Required::new("You must enter a username")),
                rule(MinLength::new(3, "The username must be at least 3 characters long")),
            ],
        )
        .field(
            "email",
            vec![
                rule(Required::new("You must enter an email address")),
                rule(PatternRule::email(
                    EMAIL.clone(),
                    "You must enter a valid email address",
                )),
            ],
        )
        .field(
            "password",
            vec![
                rule(Required::new("You must enter a password")),
                rule(PatternRule::new(
                    vec![
                        PASSWORD_CHARSET.clone(),
                        HAS_LETTER.clone(),
                        HAS_DIGIT.clone(),
                    ],
                    "The password must be at least 8 characters long and contain at least one letter and one digit.",
                )),
            ],
        )
});

static LOGIN_SCHEMA: LazyLock<ValidationSchema> = LazyLock::new(|| {
    ValidationSchema::new()
        .field(
            "email",
            vec![rule(Required::new("You must enter an email address"))],
        )
        .field(
            "password",
            vec![rule(Required::new("You must enter a password"))],
        )
});

fn rule<R: FieldRule + 'static>(rule: R) -> Arc<dyn FieldRule> {
    Arc::new(rule)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> FieldErrors {
        REGISTER_SCHEMA.validate(self)
    }

    pub fn credentials(&self) -> RegisterCredentials {
        RegisterCredentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            username: self.username.trim().to_string(),
        }
    }
}

impl FormSource for RegisterForm {
    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "username" => FieldValue::Text(self.username.trim()),
            "email" => FieldValue::Text(self.email.trim()),
            "password" => FieldValue::Text(&self.password),
            _ => FieldValue::Missing,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> FieldErrors {
        LOGIN_SCHEMA.validate(self)
    }

    pub fn credentials(&self) -> LoginCredentials {
        LoginCredentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

impl FormSource for LoginForm {
    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "email" => FieldValue::Text(self.email.trim()),
            "password" => FieldValue::Text(&self.password),
            _ => FieldValue::Missing,
        }
    }
}
