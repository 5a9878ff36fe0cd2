use crate::catalog::Catalog;
use crate::output::{render_html, ReportOptions};

fn product_json(name: &str, brand: &str, extra: &str) -> String {
    let name = serde_json::to_string(name).unwrap();
    let brand = serde_json::to_string(brand).unwrap();
    format!(
        r#"{{"name": {name}, "brand": {brand}, "format_type": "block_hot", "level": "sport", "eco": false{extra}}}"#
    )
}

fn catalog_of(products: &[String]) -> Catalog {
    let raw = format!(
        r#"{{"metadata": {{"title": "Catalogue", "version": "1.0", "compilation_date": "2025-12-01",
             "sources": ["fabricants"]}}, "products": [{}]}}"#,
        products.join(",")
    );
    Catalog::from_json_str(&raw).unwrap()
}

fn rows(html: &str) -> Vec<&str> {
    html.split("<tr data-brand=").skip(1).collect()
}

#[test]
fn one_row_per_product_in_input_order() {
    for n in [0usize, 1, 2, 7, 40] {
        let products: Vec<String> = (0..n)
            .map(|i| product_json(&format!("Wax {i:03}"), &format!("Brand {}", i % 3), ""))
            .collect();
        let html = render_html(&catalog_of(&products), &ReportOptions::default());
        let rows = rows(&html);
        assert_eq!(rows.len(), n);
        for (i, row) in rows.iter().enumerate() {
            assert!(row.contains(&format!("<strong>Wax {i:03}</strong>")));
        }
    }
}

#[test]
fn count_matches_in_header_and_toolbar() {
    for n in [0usize, 1, 5] {
        let products: Vec<String> = (0..n)
            .map(|i| product_json(&format!("W{i}"), "Toko", ""))
            .collect();
        let html = render_html(&catalog_of(&products), &ReportOptions::default());
        let label = crate::format::product_count(n);
        assert!(html.contains(&format!("— {label}</p>")));
        assert!(html.contains(&format!(r#"<span class="count" id="count">{label}</span>"#)));
    }
}

#[test]
fn markup_in_free_text_never_appears_raw() {
    let nasty = [
        "<img src=x onerror=alert(1)>",
        "Bloc & Co",
        "</td></tr><tr>",
        "\"quoted\" 'single'",
    ];
    for text in nasty {
        let comment = serde_json::to_string(text).unwrap();
        let extra = format!(r#", "comment": {{"fr_FR": {comment}}}"#);
        let html = render_html(
            &catalog_of(&[product_json(text, "Toko", &extra)]),
            &ReportOptions::default(),
        );
        let escaped = crate::format::escape_html(text);
        assert!(!html.contains(text), "raw text leaked: {text}");
        assert!(html.contains(&format!("<strong>{escaped}</strong>")));
        assert!(html.contains(&format!(r#"<td class="comment-col">{escaped}</td>"#)));
    }
}

#[test]
fn brand_dropdown_for_swix_and_toko() {
    let html = render_html(
        &catalog_of(&[
            product_json("HF", "Toko", ""),
            product_json("TS", "Swix", ""),
        ]),
        &ReportOptions::default(),
    );
    let select = &html[html.find(r#"<select id="brandFilter">"#).unwrap()..];
    let select = &select[..select.find("</select>").unwrap()];
    assert_eq!(select.matches("<option").count(), 3);
    let swix = select.find(r#"<option value="Swix">Swix</option>"#).unwrap();
    let toko = select.find(r#"<option value="Toko">Toko</option>"#).unwrap();
    assert!(swix < toko);
}

#[test]
fn temperature_cell_scenario() {
    let html = render_html(
        &catalog_of(&[product_json(
            "HF",
            "Toko",
            r#", "temp_min_c": -10, "temp_max_c": -2"#,
        )]),
        &ReportOptions::default(),
    );
    assert!(html.contains("<td>-10 / -2 °C</td>"));
}

#[test]
fn eco_false_scenario() {
    let html = render_html(
        &catalog_of(&[product_json("HF", "Toko", "")]),
        &ReportOptions::default(),
    );
    let row = rows(&html)[0];
    assert!(row.contains("badge-no"));
    assert!(!row.contains("badge-yes"));
}

#[test]
fn client_script_wires_filters_and_sorting() {
    let html = render_html(&catalog_of(&[]), &ReportOptions::default());
    assert!(html.contains("searchInput.addEventListener('input'"));
    assert!(html.contains("brandSelect.addEventListener('change'"));
    assert!(html.contains("localeCompare(bv, 'fr', { numeric: true })"));
    assert!(html.contains("row.dataset.brand === state.selectedBrand"));
}
