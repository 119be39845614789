mod discovery;
mod open;

pub use discovery::DiscoveryError;
pub use open::OpenError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Open(#[from] OpenError),
}

pub type Result<T> = std::result::Result<T, Error>;
