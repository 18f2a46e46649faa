use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("JETNET credentials are not configured")]
    MissingCredentials,
    #[error("JETNET rejected the login credentials: {status:?}")]
    LoginRejected { status: String },
    #[error("Login succeeded but the response is missing a {0} token")]
    IncompleteTokenPair(&'static str),
    #[error("No session found for the provided session key")]
    SessionNotFound,
}
