use crate::menus::ActionMenus;
use crate::stats::format_currency;
use crate::theme::Theme;
use crate::view::{DashboardView, Document, SaleForm};
use std::fmt::Write;

pub fn render_index(document: &Document, form: &SaleForm, view: &DashboardView) -> String {
    let theme = document.theme.unwrap_or_default();
    let refreshed = view
        .refreshed_at
        .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    INDEX_HTML
        .replace("{{THEME}}", theme.as_str())
        .replace("{{TOGGLE_LABEL}}", toggle_label(theme))
        .replace("{{CUSTOMER}}", &escape(&form.customer))
        .replace("{{QUANTITY}}", &escape(&form.quantity))
        .replace("{{OPTIONS}}", &render_options(form))
        .replace("{{REVENUE}}", &escape(&view.total_revenue))
        .replace("{{COUNT}}", &escape(&view.total_sales_count))
        .replace("{{BEST}}", &escape(&view.best_seller))
        .replace("{{TOP_ITEMS}}", &render_top_items(view))
        .replace("{{ROWS}}", &render_rows(view))
        .replace("{{REFRESHED}}", &refreshed)
}

/// Plain-text dashboard for the terminal.
pub fn render_text(view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total revenue : {}", view.total_revenue);
    let _ = writeln!(out, "Total sales   : {}", view.total_sales_count);
    let _ = writeln!(out, "Best seller   : {}", view.best_seller);

    if !view.top_items.is_empty() {
        let _ = writeln!(out, "\nTop items");
        for (rank, tally) in view.top_items.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. {} x{} ({})",
                rank + 1,
                tally.item,
                tally.quantity,
                format_currency(&view.currency, tally.revenue)
            );
        }
    }

    let _ = writeln!(out);
    if view.rows.is_empty() {
        let _ = writeln!(out, "No sales recorded yet.");
        return out;
    }

    let widths = column_widths(view);
    let header = ["Customer", "Item", "Qty", "Total", "Time"];
    let _ = writeln!(out, "{}", pad_row(&header, &widths));
    for row in &view.rows {
        let cells = [
            row.customer.as_str(),
            row.item.as_str(),
            row.quantity.as_str(),
            row.total.as_str(),
            row.timestamp.as_str(),
        ];
        let _ = writeln!(out, "{}", pad_row(&cells, &widths));
    }
    out
}

fn column_widths(view: &DashboardView) -> [usize; 5] {
    let mut widths = [8, 4, 3, 5, 4];
    for row in &view.rows {
        let cells = [&row.customer, &row.item, &row.quantity, &row.total, &row.timestamp];
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

fn pad_row(cells: &[&str; 5], widths: &[usize; 5]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    }
}

fn render_options(form: &SaleForm) -> String {
    let mut html = String::new();
    for (index, option) in form.item.options.iter().enumerate() {
        let selected = if index == form.item.selected { " selected" } else { "" };
        let price = option
            .price
            .as_deref()
            .map(|p| format!(" data-price=\"{}\"", escape(p)))
            .unwrap_or_default();
        let _ = write!(
            html,
            "<option value=\"{}\"{price}{selected}>{}</option>",
            escape(&option.value),
            escape(&option.label)
        );
    }
    html
}

fn render_top_items(view: &DashboardView) -> String {
    let mut html = String::new();
    for tally in &view.top_items {
        let _ = write!(
            html,
            "<li><span>{}</span><span>{} sold &middot; {}</span></li>",
            escape(&tally.item),
            tally.quantity,
            escape(&format_currency(&view.currency, tally.revenue))
        );
    }
    html
}

fn render_rows(view: &DashboardView) -> String {
    if view.rows.is_empty() {
        return "<tr><td colspan=\"6\" class=\"empty\">No sales recorded yet.</td></tr>".to_string();
    }

    let mut html = String::new();
    for (index, row) in view.rows.iter().enumerate() {
        let active = if view.menus.is_row_active(index) {
            " class=\"dropdown-active\""
        } else {
            ""
        };
        let show = if view.menus.is_open(index) { " show" } else { "" };
        let _ = write!(
            html,
            "<tr{active}><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td><div class=\"actions-menu\"><button type=\"button\" class=\"menu-button\">&#8942;</button>\
             <div id=\"{}\" class=\"dropdown-content{show}\"><span>Row {}</span></div></div></td></tr>",
            escape(&row.customer),
            escape(&row.item),
            escape(&row.quantity),
            escape(&row.total),
            escape(&row.timestamp),
            ActionMenus::menu_id(index),
            index + 1,
        );
    }
    html
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en" data-theme="{{THEME}}">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Sales Dashboard</title>
  <style>
    :root,
    [data-theme="dark"] {
      --bg: #12151b;
      --card: #1b2029;
      --ink: #e7ebf2;
      --muted: #8c96a8;
      --accent: #ff8a5b;
      --line: rgba(255, 255, 255, 0.08);
    }

    [data-theme="light"] {
      --bg: #f6f2ea;
      --card: #ffffff;
      --ink: #2b2a28;
      --muted: #6b645d;
      --accent: #e0603c;
      --line: rgba(47, 72, 88, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 18px;
      padding: 20px;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .stat .value {
      display: block;
      font-size: 1.6rem;
      font-weight: 600;
      margin-top: 6px;
    }

    form {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 12px;
      align-items: end;
    }

    input,
    select,
    button {
      font: inherit;
      padding: 10px 12px;
      border-radius: 10px;
      border: 1px solid var(--line);
      background: transparent;
      color: inherit;
    }

    button.primary {
      background: var(--accent);
      border: none;
      color: white;
      font-weight: 600;
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th,
    td {
      text-align: left;
      padding: 10px 8px;
      border-bottom: 1px solid var(--line);
    }

    tr.dropdown-active {
      background: var(--line);
    }

    .actions-menu {
      position: relative;
    }

    .dropdown-content {
      display: none;
      position: absolute;
      right: 0;
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 10px;
      padding: 8px 12px;
    }

    .dropdown-content.show {
      display: block;
    }

    .top-items {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 6px;
    }

    .top-items li {
      display: flex;
      justify-content: space-between;
    }

    .empty,
    footer {
      color: var(--muted);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Sales Dashboard</h1>
      <button type="button" id="themeToggle">{{TOGGLE_LABEL}}</button>
    </header>

    <section class="card">
      <form id="saleForm">
        <label>Customer<input id="customer" name="customer" value="{{CUSTOMER}}" /></label>
        <label>Item<select id="item" name="item">{{OPTIONS}}</select></label>
        <label>Quantity<input id="quantity" name="quantity" type="number" min="1" value="{{QUANTITY}}" /></label>
        <button type="submit" class="primary">Add sale</button>
      </form>
    </section>

    <section class="panel">
      <div class="card stat"><span class="label">Total revenue</span><span class="value" id="totalRevenue">{{REVENUE}}</span></div>
      <div class="card stat"><span class="label">Total sales</span><span class="value" id="totalSalesCount">{{COUNT}}</span></div>
      <div class="card stat"><span class="label">Best seller</span><span class="value" id="bestSeller">{{BEST}}</span></div>
    </section>

    <section class="card">
      <ul class="top-items">{{TOP_ITEMS}}</ul>
    </section>

    <section class="card">
      <table>
        <thead>
          <tr><th>Customer</th><th>Item</th><th>Qty</th><th>Total</th><th>Time</th><th></th></tr>
        </thead>
        <tbody id="salesTable">{{ROWS}}</tbody>
      </table>
    </section>

    <footer>Last refreshed: {{REFRESHED}}</footer>
  </main>
</body>
</html>
"#;
