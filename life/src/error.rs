use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("invalid format `{value}`, expected `{layout}`")]
    Layout { value: String, layout: &'static str },
    #[error(
        "invalid format `{0}`: the ALIVE and DEAD markers must not be equal, \
         or empty, or with different lengths"
    )]
    Markers(String),
}
