use std::fmt::Display;

use itertools::Itertools;

use crate::labels::{self, LabelCategory};

/// Shown in a cell whose data is absent.
pub const PLACEHOLDER: &str = "—";

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn text_or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) => escape_html(v),
        None => PLACEHOLDER.to_string(),
    }
}

/// `"A / B °C"`, a single bound with its unit, or the placeholder.
pub fn temp_range<T: Display>(min: Option<T>, max: Option<T>) -> String {
    let parts = [min, max].into_iter().flatten().map(|v| v.to_string());
    let joined = parts.collect::<Vec<_>>().join(" / ");
    if joined.is_empty() {
        return PLACEHOLDER.to_string();
    }
    format!("{joined} °C")
}

pub fn humidity_range<T: Display>(min: Option<T>, max: Option<T>) -> String {
    match (min, max) {
        (Some(lo), Some(hi)) => format!("{lo}–{hi} %"),
        (Some(lo), None) => format!("≥ {lo} %"),
        (None, Some(hi)) => format!("≤ {hi} %"),
        (None, None) => PLACEHOLDER.to_string(),
    }
}

pub fn iron_temp<T: Display>(value: Option<T>) -> String {
    match value {
        Some(v) => format!("{v} °C"),
        None => PLACEHOLDER.to_string(),
    }
}

/// Labels each code through `category` and joins them with a comma.
pub fn enum_list<S: AsRef<str>>(codes: &[S], category: LabelCategory) -> String {
    codes
        .iter()
        .map(|code| escape_html(category.label(code.as_ref())))
        .join(", ")
}

pub fn enum_label(code: &str, category: LabelCategory) -> String {
    escape_html(category.label(code))
}

pub fn level_badge(level: &str) -> String {
    let class = labels::level_class(level);
    let label = escape_html(LabelCategory::Level.label(level));
    if class.is_empty() {
        format!(r#"<span class="badge">{label}</span>"#)
    } else {
        format!(r#"<span class="badge {class}">{label}</span>"#)
    }
}

pub fn bool_badge(value: bool, label_true: &str, label_false: &str) -> String {
    if value {
        format!(
            r#"<span class="badge badge-yes">{}</span>"#,
            escape_html(label_true)
        )
    } else {
        format!(
            r#"<span class="badge badge-no">{}</span>"#,
            escape_html(label_false)
        )
    }
}

/// `"1 produit"` / `"N produits"`, matching the client-side counter.
pub fn product_count(count: usize) -> String {
    if count == 1 {
        format!("{count} produit")
    } else {
        format!("{count} produits")
    }
}
