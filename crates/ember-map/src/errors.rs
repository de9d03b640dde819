use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    /// A wire variation names a function the engine registry does not
    /// know. Fatal to the mapping call.
    #[error("unknown variation function: {0}")]
    UnknownVariation(String),
    /// A wire curve arrived with x/y arrays of different lengths,
    /// which indicates corrupt input. Fatal to the mapping call.
    #[error("malformed curve: {x_len} x values but {y_len} y values")]
    MalformedCurve { x_len: usize, y_len: usize },
}
