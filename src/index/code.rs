use crate::error::JapanMeshError;
use crate::index::constants::is_level1_code;
use crate::index::level::GridLevel;

/// Returns the grid level of a mesh code.
///
/// The level is determined by the code length alone (4, 6, 8, 9, 10 or 11).
///
/// # Example
/// ```
/// use japanmesh_rs::{GridLevel, get_level};
///
/// # fn main() -> Result<(), japanmesh_rs::JapanMeshError> {
/// assert_eq!(get_level("5339")?, GridLevel::Level1);
/// assert_eq!(get_level("533945471")?, GridLevel::Half);
/// assert!(get_level("1").is_err());
/// # Ok(())
/// # }
/// ```
pub fn get_level(code: &str) -> Result<GridLevel, JapanMeshError> {
    GridLevel::from_digit_count(code.len()).ok_or_else(|| {
        tracing::debug!(code, len = code.len(), "rejected mesh code of unknown length");
        JapanMeshError::InvalidMeshCode
    })
}

/// Returns `true` if the code length matches one of the grid levels.
///
/// The primary mesh prefix is not checked, so `"0000"` is valid here.
/// Use [`is_in_japan`] for the stricter check.
pub fn is_valid(code: &str) -> bool {
    GridLevel::from_digit_count(code.len()).is_some()
}

/// Returns `true` if the code has a valid length and its primary mesh prefix
/// is one of the meshes covering Japan.
pub fn is_in_japan(code: &str) -> bool {
    is_valid(code) && code.get(..4).is_some_and(is_level1_code)
}

/// Cuts a mesh code down to the given (coarser or equal) level.
///
/// Fails with [`JapanMeshError::InvalidMeshCode`] if the code is invalid or
/// finer than `level` would require.
pub fn truncate_code(code: &str, level: GridLevel) -> Result<String, JapanMeshError> {
    let own = get_level(code)?;
    if own < level {
        return Err(JapanMeshError::InvalidMeshCode);
    }
    code.get(..level.digit_count())
        .map(str::to_string)
        .ok_or(JapanMeshError::InvalidMeshCode)
}

/// Parses the digit group `code[start..end]`.
pub(crate) fn parse_digits(code: &str, start: usize, end: usize) -> Result<u8, JapanMeshError> {
    let group = code
        .get(start..end)
        .ok_or_else(|| JapanMeshError::ParseError(format!("no digits at {}..{}", start, end)))?;
    Ok(group.parse::<u8>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_level() -> Result<(), JapanMeshError> {
        assert_eq!(get_level("5339")?, GridLevel::Level1);
        assert_eq!(get_level("533945")?, GridLevel::Level2);
        assert_eq!(get_level("53394547")?, GridLevel::Level3);
        assert_eq!(get_level("533945471")?, GridLevel::Half);
        assert_eq!(get_level("5339454711")?, GridLevel::Quarter);
        assert_eq!(get_level("53394547112")?, GridLevel::OneEighth);
        Ok(())
    }

    #[test]
    fn test_get_level_invalid_length() {
        assert_eq!(get_level("1"), Err(JapanMeshError::InvalidMeshCode));
        assert_eq!(get_level(""), Err(JapanMeshError::InvalidMeshCode));
        assert_eq!(get_level("53394"), Err(JapanMeshError::InvalidMeshCode));
        assert_eq!(get_level("533945471121"), Err(JapanMeshError::InvalidMeshCode));
    }

    #[test]
    fn test_is_valid_checks_length_only() {
        assert!(is_valid("5339"));
        assert!(is_valid("0000"));
        assert!(!is_valid("533"));
    }

    #[test]
    fn test_is_in_japan() {
        assert!(is_in_japan("5339"));
        assert!(is_in_japan("53394547112"));
        assert!(!is_in_japan("0000"));
        assert!(!is_in_japan("00004547"));
        assert!(!is_in_japan("533"));
    }

    #[test]
    fn test_truncate_code() -> Result<(), JapanMeshError> {
        assert_eq!(truncate_code("53394547112", GridLevel::Level1)?, "5339");
        assert_eq!(truncate_code("53394547112", GridLevel::Half)?, "533945471");
        assert_eq!(truncate_code("533945", GridLevel::Level2)?, "533945");
        Ok(())
    }

    #[test]
    fn test_truncate_code_to_finer_level_fails() {
        assert_eq!(
            truncate_code("5339", GridLevel::Level3),
            Err(JapanMeshError::InvalidMeshCode)
        );
        assert_eq!(
            truncate_code("53", GridLevel::Level1),
            Err(JapanMeshError::InvalidMeshCode)
        );
    }

    #[test]
    fn test_parse_digits() -> Result<(), JapanMeshError> {
        assert_eq!(parse_digits("5339", 0, 2)?, 53);
        assert_eq!(parse_digits("5339", 2, 4)?, 39);
        assert!(matches!(
            parse_digits("53a9", 2, 4),
            Err(JapanMeshError::ParseError(_))
        ));
        Ok(())
    }
}
