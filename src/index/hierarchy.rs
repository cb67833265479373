use crate::error::JapanMeshError;
use crate::index::code::{get_level, truncate_code};
use crate::index::level::GridLevel;

/// Lists the codes one level finer than `code`.
///
/// Primary meshes yield 64 secondary meshes and secondary meshes yield 100
/// tertiary meshes, both row-major (south to north, west to east). Tertiary,
/// 1/2 and 1/4 meshes yield their four quadrants `1`, `2`, `3`, `4`. A 1/8
/// mesh is the finest level and yields an empty list.
///
/// # Example
/// ```
/// use japanmesh_rs::get_children;
///
/// # fn main() -> Result<(), japanmesh_rs::JapanMeshError> {
/// let children = get_children("53394547")?;
/// assert_eq!(children, ["533945471", "533945472", "533945473", "533945474"]);
///
/// assert_eq!(get_children("5339")?.len(), 64);
/// assert!(get_children("53394547112")?.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn get_children(code: &str) -> Result<Vec<String>, JapanMeshError> {
    let level = get_level(code)?;
    let Some(child_level) = level.finer() else {
        return Ok(Vec::new());
    };

    let children = match child_level {
        GridLevel::Level2 | GridLevel::Level3 => {
            let (cols, rows) = child_level.division();
            let mut codes = Vec::with_capacity(usize::from(cols) * usize::from(rows));
            for row in 0..rows {
                for col in 0..cols {
                    codes.push(format!("{}{}{}", code, row, col));
                }
            }
            codes
        }
        _ => (1..=4).map(|quadrant| format!("{}{}", code, quadrant)).collect(),
    };

    Ok(children)
}

/// Lists `code` and all of its ancestors, coarsest first.
///
/// A code of invalid length yields an empty list.
///
/// # Example
/// ```
/// use japanmesh_rs::get_ancestor_chain;
///
/// assert_eq!(get_ancestor_chain("53394547"), ["5339", "533945", "53394547"]);
/// assert!(get_ancestor_chain("1").is_empty());
/// ```
pub fn get_ancestor_chain(code: &str) -> Vec<String> {
    let Ok(level) = get_level(code) else {
        return Vec::new();
    };

    GridLevel::ALL
        .into_iter()
        .filter(|ancestor| *ancestor <= level)
        .filter_map(|ancestor| code.get(..ancestor.digit_count()).map(str::to_string))
        .collect()
}

/// Returns the code one level coarser than `code`, or `None` for a primary mesh.
pub fn get_parent(code: &str) -> Result<Option<String>, JapanMeshError> {
    let level = get_level(code)?;
    level
        .coarser()
        .map(|parent| truncate_code(code, parent))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level1_children_row_major() -> Result<(), JapanMeshError> {
        let children = get_children("5339")?;

        assert_eq!(children.len(), 64);
        assert_eq!(children[0], "533900");
        assert_eq!(children[1], "533901");
        assert_eq!(children[7], "533907");
        assert_eq!(children[8], "533910");
        assert_eq!(children[37], "533945");
        assert_eq!(children[63], "533977");
        Ok(())
    }

    #[test]
    fn test_level2_children_row_major() -> Result<(), JapanMeshError> {
        let children = get_children("533945")?;

        assert_eq!(children.len(), 100);
        assert_eq!(children[0], "53394500");
        assert_eq!(children[9], "53394509");
        assert_eq!(children[10], "53394510");
        assert_eq!(children[47], "53394547");
        assert_eq!(children[99], "53394599");
        Ok(())
    }

    #[test]
    fn test_quadrant_children() -> Result<(), JapanMeshError> {
        assert_eq!(
            get_children("53394547")?,
            vec!["533945471", "533945472", "533945473", "533945474"]
        );
        assert_eq!(
            get_children("533945471")?,
            vec!["5339454711", "5339454712", "5339454713", "5339454714"]
        );
        assert_eq!(
            get_children("5339454711")?,
            vec!["53394547111", "53394547112", "53394547113", "53394547114"]
        );
        Ok(())
    }

    #[test]
    fn test_finest_level_has_no_children() -> Result<(), JapanMeshError> {
        assert!(get_children("53394547112")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_children_of_invalid_code() {
        assert_eq!(get_children("1"), Err(JapanMeshError::InvalidMeshCode));
    }

    #[test]
    fn test_children_are_one_level_finer() -> Result<(), JapanMeshError> {
        for code in ["5339", "533945", "53394547", "533945471", "5339454711"] {
            let level = get_level(code)?;
            for child in get_children(code)? {
                assert_eq!(Some(get_level(&child)?), level.finer());
                assert!(child.starts_with(code));
            }
        }
        Ok(())
    }

    #[test]
    fn test_ancestor_chain() {
        assert_eq!(get_ancestor_chain("5339"), vec!["5339"]);
        assert_eq!(get_ancestor_chain("533945"), vec!["5339", "533945"]);
        assert_eq!(
            get_ancestor_chain("53394547112"),
            vec![
                "5339",
                "533945",
                "53394547",
                "533945471",
                "5339454711",
                "53394547112"
            ]
        );
    }

    #[test]
    fn test_ancestor_chain_of_invalid_code_is_empty() {
        assert!(get_ancestor_chain("1").is_empty());
        assert!(get_ancestor_chain("5339454711212").is_empty());
    }

    #[test]
    fn test_children_chain_ends_in_parent() -> Result<(), JapanMeshError> {
        for code in ["5339", "533945", "53394547", "533945471", "5339454711"] {
            for child in get_children(code)? {
                let chain = get_ancestor_chain(&child);
                assert_eq!(chain.last(), Some(&child));
                assert_eq!(chain[chain.len() - 2], code);
            }
        }
        Ok(())
    }

    #[test]
    fn test_get_parent() -> Result<(), JapanMeshError> {
        assert_eq!(get_parent("5339")?, None);
        assert_eq!(get_parent("533945")?, Some("5339".to_string()));
        assert_eq!(get_parent("53394547")?, Some("533945".to_string()));
        assert_eq!(get_parent("53394547112")?, Some("5339454711".to_string()));
        assert_eq!(get_parent("12345"), Err(JapanMeshError::InvalidMeshCode));
        Ok(())
    }
}
