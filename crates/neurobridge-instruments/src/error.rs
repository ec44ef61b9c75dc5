use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown symptom id: {0}")]
    UnknownSymptom(String),
}
