use itertools::Itertools;

use crate::catalog::{Catalog, Product};
use crate::format::{self, escape_html, PLACEHOLDER};
use crate::labels::LabelCategory;

pub const DEFAULT_COMMENT_LOCALE: &str = "fr_FR";

const COLUMNS: &[&str] = &[
    "",
    "Nom",
    "Marque",
    "Gamme",
    "Format",
    "Température",
    "Fer",
    "Humidité",
    "Neige",
    "Niveau",
    "Rôle",
    "Éco",
    "Commentaire",
];

#[derive(Clone, Debug)]
pub struct ReportOptions {
    /// Locale key used to pick each product's comment.
    pub comment_locale: String,
    /// File name shown in the footer.
    pub source_name: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            comment_locale: DEFAULT_COMMENT_LOCALE.to_string(),
            source_name: "glide_wax.json".to_string(),
        }
    }
}

fn render_brand_options(catalog: &Catalog) -> String {
    catalog
        .brands()
        .into_iter()
        .map(|b| {
            let b = escape_html(b);
            format!(r#"        <option value="{b}">{b}</option>"#)
        })
        .join("\n")
}

fn render_thumbnail(product: &Product) -> String {
    match product.image_url() {
        Some(url) => format!(
            r#"<img class="thumb" src="{}" alt="{}" loading="lazy">"#,
            escape_html(url),
            escape_html(&product.name)
        ),
        None => PLACEHOLDER.to_string(),
    }
}

fn render_row(product: &Product, opts: &ReportOptions) -> String {
    let comment = product
        .comment_for(&opts.comment_locale)
        .map(escape_html)
        .unwrap_or_default();

    format!(
        r#"      <tr data-brand="{brand}">
        <td>{thumb}</td>
        <td><strong>{name}</strong></td>
        <td>{brand}</td>
        <td>{line}</td>
        <td>{format_type}</td>
        <td>{temp}</td>
        <td>{iron}</td>
        <td>{humidity}</td>
        <td class="snow-col">{snow}</td>
        <td>{level}</td>
        <td>{role}</td>
        <td>{eco}</td>
        <td class="comment-col">{comment}</td>
      </tr>"#,
        brand = escape_html(&product.brand),
        thumb = render_thumbnail(product),
        name = escape_html(&product.name),
        line = format::text_or_placeholder(product.product_line.as_deref()),
        format_type = format::enum_label(&product.format_type, LabelCategory::FormatType),
        temp = format::temp_range(product.temp_min_c.as_ref(), product.temp_max_c.as_ref()),
        iron = format::iron_temp(product.iron_temp_c.as_ref()),
        humidity =
            format::humidity_range(product.humidity_min.as_ref(), product.humidity_max.as_ref()),
        snow = format::enum_list(product.snow_type.as_slice(), LabelCategory::SnowType),
        level = format::level_badge(&product.level),
        role = format::enum_list(product.role.as_slice(), LabelCategory::Role),
        eco = format::bool_badge(product.eco, "Éco", PLACEHOLDER),
        comment = comment,
    )
}

fn render_header_cells() -> String {
    COLUMNS
        .iter()
        .map(|c| format!("          <th>{}</th>", escape_html(c)))
        .join("\n")
}

/// Renders the complete, self-contained catalog page.
pub fn render_html(catalog: &Catalog, opts: &ReportOptions) -> String {
    let meta = &catalog.metadata;
    let count = format::product_count(catalog.len());
    let title = escape_html(&meta.title);
    let version = escape_html(&meta.version);
    let date = escape_html(&meta.compilation_date);
    let source_name = escape_html(&opts.source_name);
    let sources = meta.sources.iter().map(|s| escape_html(s)).join(", ");
    let brand_options = render_brand_options(catalog);
    let header_cells = render_header_cells();
    let rows = catalog
        .products
        .iter()
        .map(|p| render_row(p, opts))
        .join("\n");

    format!(
        r####"<!DOCTYPE html>
<html lang="fr">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>
    :root {{
      --bg: #f8f9fa;
      --card: #fff;
      --border: #dee2e6;
      --accent: #2563eb;
      --text: #212529;
      --muted: #6c757d;
    }}
    * {{ box-sizing: border-box; margin: 0; padding: 0; }}
    body {{
      font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
      background: var(--bg);
      color: var(--text);
      line-height: 1.5;
      padding: 1.5rem;
    }}
    header {{ max-width: 1600px; margin: 0 auto 1.5rem; }}
    header h1 {{ font-size: 1.6rem; margin-bottom: .25rem; }}
    header p {{ color: var(--muted); font-size: .9rem; }}
    .toolbar {{
      max-width: 1600px;
      margin: 0 auto 1rem;
      display: flex;
      gap: 1rem;
      flex-wrap: wrap;
      align-items: center;
    }}
    .toolbar input, .toolbar select {{
      padding: .4rem .6rem;
      border: 1px solid var(--border);
      border-radius: 6px;
      font-size: .9rem;
    }}
    .toolbar input {{ width: 260px; }}
    .count {{ color: var(--muted); font-size: .85rem; margin-left: auto; }}
    .table-wrap {{
      max-width: 1600px;
      margin: 0 auto;
      overflow-x: auto;
      background: var(--card);
      border-radius: 8px;
      border: 1px solid var(--border);
    }}
    table {{ width: 100%; border-collapse: collapse; font-size: .85rem; }}
    thead {{ position: sticky; top: 0; z-index: 2; }}
    th {{
      background: #e9ecef;
      text-align: left;
      padding: .55rem .6rem;
      white-space: nowrap;
      border-bottom: 2px solid var(--border);
      cursor: pointer;
      user-select: none;
    }}
    th:hover {{ background: #dde1e5; }}
    th[aria-sort="ascending"]::after {{ content: " ▲"; color: var(--accent); }}
    th[aria-sort="descending"]::after {{ content: " ▼"; color: var(--accent); }}
    td {{ padding: .45rem .6rem; border-bottom: 1px solid #f0f0f0; vertical-align: top; }}
    tr:hover td {{ background: #f1f5ff; }}
    .thumb {{ width: 40px; height: 40px; object-fit: contain; border-radius: 4px; background: #f8f9fa; }}
    .snow-col {{ max-width: 180px; }}
    .comment-col {{ max-width: 260px; font-size: .8rem; color: var(--muted); }}
    .badge {{
      display: inline-block;
      padding: .15rem .45rem;
      border-radius: 4px;
      font-size: .75rem;
      font-weight: 600;
    }}
    .lvl-beg {{ background: #d1fae5; color: #065f46; }}
    .lvl-spo {{ background: #dbeafe; color: #1e40af; }}
    .lvl-exp {{ background: #fde68a; color: #92400e; }}
    .badge-yes {{ background: #d1fae5; color: #065f46; }}
    .badge-no {{ background: #f3f4f6; color: #9ca3af; }}
    footer {{
      max-width: 1600px;
      margin: 1.5rem auto 0;
      text-align: center;
      font-size: .8rem;
      color: var(--muted);
    }}
  </style>
</head>
<body>
  <header>
    <h1>{title}</h1>
    <p>Version {version} — {date} — {count}</p>
  </header>

  <div class="toolbar">
    <input type="text" id="search" placeholder="Rechercher un fart…">
    <select id="brandFilter">
      <option value="">Toutes les marques</option>
{brand_options}
    </select>
    <span class="count" id="count">{count}</span>
  </div>

  <div class="table-wrap">
    <table id="waxTable">
      <thead>
        <tr>
{header_cells}
        </tr>
      </thead>
      <tbody>
{rows}
      </tbody>
    </table>
  </div>

  <footer>
    Généré à partir de <code>{source_name}</code> v{version}
    — Sources&nbsp;: {sources}
  </footer>

  <script>
    (function() {{
      const table = document.getElementById('waxTable');
      const tbody = table.querySelector('tbody');
      const headers = Array.from(table.querySelectorAll('thead th'));
      const searchInput = document.getElementById('search');
      const brandSelect = document.getElementById('brandFilter');
      const countSpan = document.getElementById('count');

      const state = {{
        searchText: '',
        selectedBrand: '',
        sortColumn: null,
        sortDirections: {{}}
      }};

      function norm(s) {{ return String(s || '').toLowerCase(); }}

      function countLabel(n) {{
        return n + ' produit' + (n !== 1 ? 's' : '');
      }}

      function rowMatches(row) {{
        const matchSearch = !state.searchText || norm(row.textContent).includes(state.searchText);
        const matchBrand = !state.selectedBrand || row.dataset.brand === state.selectedBrand;
        return matchSearch && matchBrand;
      }}

      function applyFilters() {{
        let visible = 0;
        for (const row of tbody.rows) {{
          const show = rowMatches(row);
          row.style.display = show ? '' : 'none';
          if (show) visible++;
        }}
        countSpan.textContent = countLabel(visible);
      }}

      function cellText(row, idx) {{
        return row.cells[idx].textContent.trim();
      }}

      function sortBy(idx) {{
        const asc = state.sortDirections[idx] !== 'asc';
        state.sortDirections[idx] = asc ? 'asc' : 'desc';
        state.sortColumn = idx;

        const rows = Array.from(tbody.rows);
        rows.sort(function(a, b) {{
          const av = cellText(a, idx);
          const bv = cellText(b, idx);
          const cmp = av.localeCompare(bv, 'fr', {{ numeric: true }});
          return asc ? cmp : -cmp;
        }});
        rows.forEach(function(r) {{ tbody.appendChild(r); }});

        headers.forEach(function(th, i) {{
          if (i === state.sortColumn) {{
            th.setAttribute('aria-sort', asc ? 'ascending' : 'descending');
          }} else {{
            th.removeAttribute('aria-sort');
          }}
        }});
      }}

      searchInput.addEventListener('input', function() {{
        state.searchText = norm(searchInput.value);
        applyFilters();
      }});
      brandSelect.addEventListener('change', function() {{
        state.selectedBrand = brandSelect.value;
        applyFilters();
      }});
      headers.forEach(function(th, idx) {{
        th.addEventListener('click', function() {{ sortBy(idx); }});
      }});
    }})();
  </script>
</body>
</html>
"####,
    )
}
