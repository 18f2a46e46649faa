use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    HabrokError(#[from] habrok::Error),
}
