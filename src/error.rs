/// Error type for japanmesh-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum JapanMeshError {
    /// The coordinate falls outside the primary meshes that cover Japan.
    InvalidArea,
    /// The mesh code length does not match any grid level.
    InvalidMeshCode,
    /// The grid level label is not one of "1", "2", "3", "1/2", "1/4", "1/8".
    InvalidGridLevel(String),
    /// A digit group inside a mesh code could not be parsed as a number.
    ParseError(String),
    /// GeoJSON output could not be serialized.
    SerializationError(String),
}

impl std::fmt::Display for JapanMeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JapanMeshError::InvalidArea => write!(f, "Invalid area"),
            JapanMeshError::InvalidMeshCode => write!(f, "Invalid mesh code"),
            JapanMeshError::InvalidGridLevel(label) => write!(f, "Invalid grid level: {}", label),
            JapanMeshError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            JapanMeshError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for JapanMeshError {}

impl From<std::num::ParseIntError> for JapanMeshError {
    fn from(e: std::num::ParseIntError) -> Self {
        JapanMeshError::ParseError(e.to_string())
    }
}

impl From<serde_json::Error> for JapanMeshError {
    fn from(e: serde_json::Error) -> Self {
        JapanMeshError::SerializationError(e.to_string())
    }
}
