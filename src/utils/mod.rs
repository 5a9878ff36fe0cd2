use std::path::Path;

/// Accepts `ll`, `ll_CC` or `ll-CC` and returns the `ll_CC` spelling used as
/// comment keys in catalogs.
pub fn parse_locale_tag(value: &str) -> Result<String, String> {
    let raw = value.trim();
    if raw.is_empty() {
        return Err("locale is empty".to_string());
    }
    let mut parts = raw.split(['_', '-']);
    let lang = parts.next().unwrap_or_default();
    let region = parts.next();
    if parts.next().is_some() {
        return Err("expected LANG or LANG_REGION".to_string());
    }
    if lang.len() < 2 || lang.len() > 3 || !lang.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!("invalid language '{lang}'"));
    }
    let lang = lang.to_ascii_lowercase();
    match region {
        None => Ok(lang),
        Some(r) if r.len() == 2 && r.chars().all(|c| c.is_ascii_alphabetic()) => {
            Ok(format!("{lang}_{}", r.to_ascii_uppercase()))
        }
        Some(r) => Err(format!("invalid region '{r}'")),
    }
}

/// File name of `path` for display, falling back to the whole path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
