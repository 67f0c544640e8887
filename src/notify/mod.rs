//! Feedback shown to the user after a session operation.

use std::fmt;

use crate::IdguardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    SignIn,
    SignUp,
    SignOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: Level,
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn from_result(operation: Operation, result: &Result<(), IdguardError>) -> Self {
        match result {
            Ok(()) => {
                let (title, description) = match operation {
                    Operation::SignIn => ("Welcome back!", "You have successfully signed in."),
                    Operation::SignUp => ("Account created!", "Your account has been created."),
                    Operation::SignOut => ("Signed out", "You have been signed out."),
                };
                Toast {
                    level: Level::Success,
                    title: title.to_owned(),
                    description: description.to_owned(),
                }
            }
            Err(err) => {
                let title = match operation {
                    Operation::SignIn => "Sign in failed",
                    Operation::SignUp => "Registration failed",
                    Operation::SignOut => "Sign out failed",
                };
                Toast {
                    level: Level::Error,
                    title: title.to_owned(),
                    description: err.to_string(),
                }
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.level == Level::Success
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AuthError;

    #[test]
    fn error_message_is_generic() {
        let toast = Toast::from_result(
            Operation::SignIn,
            &Err(IdguardError::from(AuthError::InvalidCredentials)),
        );
        assert_eq!(toast.level, Level::Error);
        assert_eq!(toast.description, "Invalid credentials");

        let toast = Toast::from_result(
            Operation::SignUp,
            &Err(IdguardError::from(AuthError::InvalidRegistration)),
        );
        assert_eq!(toast.to_string(), "Registration failed: Registration failed");
    }

    #[test]
    fn success() {
        let toast = Toast::from_result(Operation::SignOut, &Ok(()));
        assert!(toast.is_success());
    }
}
