use crate::validation::FormErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// One or more form fields failed; carries the complete error set.
    #[error("Validation failed for {} field(s)", .0.len())]
    InvalidFields(FormErrors),
}
