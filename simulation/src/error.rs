//! Why a request left the world untouched.
//!
//! Invalid requests never fail loudly; they are reported as [`Outcome::Ignored`]
//! so the presentation layer can decide whether to surface them.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ignored {
    #[error("there is no pet")]
    NoPet,

    #[error("the pet has died")]
    PetDead,

    #[error("a pet already exists; reset first")]
    PetExists,

    #[error("pet name must not be empty")]
    EmptyName,

    #[error("pet name is longer than {max} characters")]
    NameTooLong { max: usize },

    #[error("stake must be a positive amount")]
    InvalidStake,

    #[error("not enough energy to play ({energy} < {required})")]
    TooTired { energy: u8, required: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored(Ignored),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    pub fn ignored(&self) -> Option<Ignored> {
        match self {
            Outcome::Applied => None,
            Outcome::Ignored(reason) => Some(*reason),
        }
    }
}

impl From<Ignored> for Outcome {
    fn from(reason: Ignored) -> Self {
        Outcome::Ignored(reason)
    }
}
