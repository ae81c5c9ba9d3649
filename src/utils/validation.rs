use uuid::Uuid;

/// Size tokens accepted for `availableSizes`.
pub const ALLOWED_SIZES: [&str; 7] = ["S", "XS", "M", "X", "L", "XXL", "XL"];

/// Image extensions accepted for product pictures.
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// A value counts as provided when it is present and non-blank after trimming.
pub fn is_valid(value: Option<&str>) -> bool {
    match value {
        Some(v) => !v.trim().is_empty(),
        None => false,
    }
}

/// Whole, non-negative number written in digits only.
pub fn is_valid_num(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit())
}

/// Positive numeric value, integral or fractional.
pub fn is_valid_price(value: &str) -> bool {
    match value.trim().parse::<f64>() {
        Ok(price) => price.is_finite() && price > 0.0,
        Err(_) => false,
    }
}

/// Membership in the fixed size domain, case-normalized.
pub fn is_valid_enum(value: &str) -> bool {
    ALLOWED_SIZES.contains(&value.trim().to_uppercase().as_str())
}

/// Identifier shape of the catalog store (UUID).
pub fn is_valid_object_id(value: &str) -> bool {
    Uuid::parse_str(value.trim()).is_ok()
}

/// Names must not contain digit characters.
pub fn is_valid_name(value: &str) -> bool {
    !value.chars().any(|c| c.is_ascii_digit())
}

/// Filename carries an accepted image extension.
pub fn is_valid_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_valid_rejects_missing_and_blank() {
        assert!(!is_valid(None));
        assert!(!is_valid(Some("")));
        assert!(!is_valid(Some("   ")));
        assert!(is_valid(Some("shirt")));
        assert!(is_valid(Some("  shirt  ")));
    }

    #[test]
    fn is_valid_num_accepts_whole_numbers_only() {
        assert!(is_valid_num("0"));
        assert!(is_valid_num("12"));
        assert!(is_valid_num(" 12 "));
        assert!(!is_valid_num("12.5"));
        assert!(!is_valid_num("-3"));
        assert!(!is_valid_num("abc"));
        assert!(!is_valid_num(""));
    }

    #[test]
    fn is_valid_price_requires_positive_numbers() {
        assert!(is_valid_price("100"));
        assert!(is_valid_price("99.99"));
        assert!(!is_valid_price("0"));
        assert!(!is_valid_price("-5"));
        assert!(!is_valid_price("ten"));
        assert!(!is_valid_price("NaN"));
        assert!(!is_valid_price("inf"));
    }

    #[test]
    fn is_valid_enum_normalizes_case_and_whitespace() {
        assert!(is_valid_enum("S"));
        assert!(is_valid_enum("xl"));
        assert!(is_valid_enum(" xxl "));
        assert!(!is_valid_enum("XXXL"));
        assert!(!is_valid_enum(""));
    }

    #[test]
    fn is_valid_object_id_checks_uuid_shape() {
        assert!(is_valid_object_id("0e3f9b1e-4f1c-4a7a-9a3e-1b2c3d4e5f6a"));
        assert!(!is_valid_object_id("64a1b2c3"));
        assert!(!is_valid_object_id("not-an-id"));
    }

    #[test]
    fn is_valid_name_rejects_digits() {
        assert!(is_valid_name("casual"));
        assert!(!is_valid_name("casual2"));
    }

    #[test]
    fn is_valid_file_checks_extension() {
        assert!(is_valid_file("shoe.png"));
        assert!(is_valid_file("shoe.JPEG"));
        assert!(is_valid_file("archive.tar.jpg"));
        assert!(!is_valid_file("shoe.pdf"));
        assert!(!is_valid_file("noextension"));
    }
}
