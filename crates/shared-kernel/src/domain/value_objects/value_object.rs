use crate::errors::Result;

/// Contrat commun des Value Objects : validables, comparables, clonables.
pub trait ValueObject: PartialEq + Clone {
    fn validate(&self) -> Result<()>;
}
