/// Angular size of one cell and subdivision factors for a single grid level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Length of a mesh code at this level.
    pub digits: usize,
    /// Columns the parent cell is split into to produce this level.
    pub division_x: u8,
    /// Rows the parent cell is split into to produce this level.
    pub division_y: u8,
    /// Cell height in degrees.
    pub lat_span: f64,
    /// Cell width in degrees.
    pub lng_span: f64,
}

/// Grid definitions ordered from the primary mesh down to the 1/8 mesh.
///
/// For the primary mesh the division is the number of columns and rows that
/// cover Japan (columns 22-53, rows 30-68).
pub static GRID_SPECS: [GridSpec; 6] = [
    // 1次メッシュ: 40' x 1°
    GridSpec {
        digits: 4,
        division_x: 32,
        division_y: 39,
        lat_span: 40.0 / 60.0,
        lng_span: 1.0,
    },
    // 2次メッシュ: 5' x 7'30"
    GridSpec {
        digits: 6,
        division_x: 8,
        division_y: 8,
        lat_span: 5.0 / 60.0,
        lng_span: 7.5 / 60.0,
    },
    // 3次メッシュ (基準地域メッシュ): 30" x 45"
    GridSpec {
        digits: 8,
        division_x: 10,
        division_y: 10,
        lat_span: 30.0 / 3600.0,
        lng_span: 45.0 / 3600.0,
    },
    // 1/2 メッシュ: 15" x 22.5"
    GridSpec {
        digits: 9,
        division_x: 2,
        division_y: 2,
        lat_span: 15.0 / 3600.0,
        lng_span: 22.5 / 3600.0,
    },
    // 1/4 メッシュ: 7.5" x 11.25"
    GridSpec {
        digits: 10,
        division_x: 2,
        division_y: 2,
        lat_span: 7.5 / 3600.0,
        lng_span: 11.25 / 3600.0,
    },
    // 1/8 メッシュ: 3.75" x 5.625"
    GridSpec {
        digits: 11,
        division_x: 2,
        division_y: 2,
        lat_span: 3.75 / 3600.0,
        lng_span: 5.625 / 3600.0,
    },
];

/// Longitude the primary mesh column index is counted from.
pub const LNG_ORIGIN: f64 = 100.0;

/// South-west corner of the primary mesh at row [`LEVEL1_MIN_ROW`], column [`LEVEL1_MIN_COL`].
pub const LEVEL1_MIN_LAT: f64 = 20.0;
pub const LEVEL1_MIN_LNG: f64 = 122.0;

pub const LEVEL1_MIN_ROW: u8 = 30;
pub const LEVEL1_MAX_ROW: u8 = 68;
pub const LEVEL1_MIN_COL: u8 = 22;
pub const LEVEL1_MAX_COL: u8 = 53;

/// Primary mesh codes that cover Japan's territory, sorted ascending.
///
/// Source: e-Stat 第1次地域区画一覧 (primary_mesh_jouhou.pdf).
pub const LEVEL1_CODES: [&str; 176] = [
    "3036", "3622", "3623", "3624", "3631", "3641", "3653", "3724", "3725", "3741", "3823",
    "3824", "3831", "3841", "3926", "3927", "3928", "3942", "4027", "4028", "4040", "4042",
    "4128", "4129", "4142", "4229", "4230", "4328", "4329", "4429", "4440", "4529", "4530",
    "4531", "4540", "4629", "4630", "4631", "4728", "4729", "4730", "4731", "4739", "4740",
    "4828", "4829", "4830", "4831", "4839", "4928", "4929", "4930", "4931", "4932", "4933",
    "4934", "4939", "5029", "5030", "5031", "5032", "5033", "5034", "5035", "5036", "5038",
    "5039", "5129", "5130", "5131", "5132", "5133", "5134", "5135", "5136", "5137", "5138",
    "5139", "5229", "5231", "5232", "5233", "5234", "5235", "5236", "5237", "5238", "5239",
    "5240", "5332", "5333", "5334", "5335", "5336", "5337", "5338", "5339", "5340", "5432",
    "5433", "5435", "5436", "5437", "5438", "5439", "5440", "5531", "5536", "5537", "5538",
    "5539", "5540", "5541", "5636", "5637", "5638", "5639", "5640", "5641", "5738", "5739",
    "5740", "5741", "5839", "5840", "5841", "5939", "5940", "5941", "5942", "6039", "6040",
    "6041", "6139", "6140", "6141", "6239", "6240", "6241", "6243", "6339", "6340", "6341",
    "6342", "6343", "6439", "6440", "6441", "6442", "6443", "6444", "6445", "6540", "6541",
    "6542", "6543", "6544", "6545", "6546", "6641", "6642", "6643", "6644", "6645", "6646",
    "6647", "6740", "6741", "6742", "6747", "6748", "6840", "6841", "6842", "6847", "6848",
];

/// Returns `true` if `code` is one of the primary meshes covering Japan.
pub fn is_level1_code(code: &str) -> bool {
    LEVEL1_CODES.binary_search(&code).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level1_codes_sorted_and_unique() {
        assert!(LEVEL1_CODES.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_level1_codes_within_section() {
        for code in LEVEL1_CODES {
            assert_eq!(code.len(), 4);
            let row: u8 = code[0..2].parse().unwrap();
            let col: u8 = code[2..4].parse().unwrap();
            assert!((LEVEL1_MIN_ROW..=LEVEL1_MAX_ROW).contains(&row), "{code}");
            assert!((LEVEL1_MIN_COL..=LEVEL1_MAX_COL).contains(&col), "{code}");
        }
    }

    #[test]
    fn test_is_level1_code() {
        assert!(is_level1_code("5339"));
        assert!(is_level1_code("3036"));
        assert!(is_level1_code("6848"));
        assert!(!is_level1_code("0000"));
        assert!(!is_level1_code("5434"));
        assert!(!is_level1_code("533"));
    }

    #[test]
    fn test_spans_divide_parent_exactly() {
        for pair in GRID_SPECS.windows(2) {
            let (parent, child) = (pair[0], pair[1]);
            assert!(parent.digits < child.digits);
            let lat = parent.lat_span / child.division_y as f64;
            let lng = parent.lng_span / child.division_x as f64;
            assert!((lat - child.lat_span).abs() < 1e-12);
            assert!((lng - child.lng_span).abs() < 1e-12);
        }
    }

    #[test]
    fn test_level1_division_covers_section() {
        let level1 = GRID_SPECS[0];
        assert_eq!(level1.division_x, LEVEL1_MAX_COL - LEVEL1_MIN_COL + 1);
        assert_eq!(level1.division_y, LEVEL1_MAX_ROW - LEVEL1_MIN_ROW + 1);
    }
}
