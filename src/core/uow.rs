use std::fmt;

use tokio::sync::oneshot;

use crate::common::{AuthError, ErrorKind, Result};
use crate::core::credential::{self, Credential};
use crate::core::Registration;

pub(crate) type Response<T> = std::result::Result<T, AuthError>;

/// Session mutation submitted to the session service.
pub(crate) enum UnitOfWork {
    SignIn(Work<Box<dyn credential::Provider + Send + Sync>, ()>),
    SignUp(Work<Registration, ()>),
    SignOut(Work<(), ()>),
}

pub(crate) struct Work<Req, Res> {
    pub(crate) request: Req,
    // Wrap with option so that response can be sent via mut reference.
    pub(crate) response_sender: Option<oneshot::Sender<Response<Res>>>,
}

impl<Req, Res> Work<Req, Res> {
    pub(crate) fn send_response(&mut self, response: Response<Res>) -> Result<()> {
        self.response_sender
            .take()
            .ok_or_else(|| ErrorKind::Internal("response already sent".to_owned()))?
            .send(response)
            .map_err(|_| ErrorKind::Internal("send response".to_owned()).into())
    }
}

impl UnitOfWork {
    pub(crate) fn new_sign_in(
        provider: impl credential::Provider + Send + Sync + 'static,
    ) -> (UnitOfWork, oneshot::Receiver<Response<()>>) {
        let (tx, rx) = oneshot::channel();
        (
            UnitOfWork::SignIn(Work {
                request: Box::new(provider),
                response_sender: Some(tx),
            }),
            rx,
        )
    }

    pub(crate) fn new_sign_up(
        registration: Registration,
    ) -> (UnitOfWork, oneshot::Receiver<Response<()>>) {
        let (tx, rx) = oneshot::channel();
        (
            UnitOfWork::SignUp(Work {
                request: registration,
                response_sender: Some(tx),
            }),
            rx,
        )
    }

    pub(crate) fn new_sign_out() -> (UnitOfWork, oneshot::Receiver<Response<()>>) {
        let (tx, rx) = oneshot::channel();
        (
            UnitOfWork::SignOut(Work {
                request: (),
                response_sender: Some(tx),
            }),
            rx,
        )
    }
}

impl fmt::Debug for UnitOfWork {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UnitOfWork::SignIn(sign_in) => match sign_in.request.credential() {
                Credential::Password(password) => write!(f, "SignIn {}", password.email),
            },
            UnitOfWork::SignUp(sign_up) => write!(f, "SignUp {}", sign_up.request.email),
            UnitOfWork::SignOut(_) => write!(f, "SignOut"),
        }
    }
}
