use pin_core::{Error, Result};

/// A query parameter the page cannot do without. Blank counts as missing.
pub fn required_param<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::MissingParameter(name)),
    }
}

/// `?page=` is forgiving: anything that is not a positive integer means 1.
pub fn page_param(value: Option<&str>) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_param() {
        assert_eq!(required_param(Some("12"), "id").unwrap(), "12");
        assert_eq!(required_param(Some(" Kajian "), "tag").unwrap(), "Kajian");
        assert!(matches!(required_param(None, "id"), Err(Error::MissingParameter("id"))));
        assert!(matches!(required_param(Some("   "), "tag"), Err(Error::MissingParameter("tag"))));
    }

    #[test]
    fn test_page_param() {
        assert_eq!(page_param(None), 1);
        assert_eq!(page_param(Some("3")), 3);
        assert_eq!(page_param(Some("0")), 1);
        assert_eq!(page_param(Some("-2")), 1);
        assert_eq!(page_param(Some("dua")), 1);
    }
}
