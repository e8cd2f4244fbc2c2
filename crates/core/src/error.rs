/// Errors raised while translating record store payloads into leads.
///
/// Cell values are never an error; these variants only cover responses whose
/// overall shape cannot be interpreted.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("Response is missing the `records` collection")]
    MissingCollection,

    #[error("Malformed record: {0}")]
    InvalidRecord(String),

    #[error("Response body is not valid JSON: {0}")]
    InvalidJson(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_record() {
        let err = MappingError::InvalidRecord("missing field `id`".into());
        assert_eq!(err.to_string(), "Malformed record: missing field `id`");
    }

    #[test]
    fn display_missing_collection() {
        assert_eq!(
            MappingError::MissingCollection.to_string(),
            "Response is missing the `records` collection"
        );
    }
}
