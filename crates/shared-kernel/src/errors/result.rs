use crate::errors::DomainError;

/// RESULT DU DOMAINE (Interne)
/// Utilisé par : Value Objects, Services de domaine, Use Cases.
pub type Result<T> = std::result::Result<T, DomainError>;
