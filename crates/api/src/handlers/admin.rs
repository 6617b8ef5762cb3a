//! `GET /admin`: a self-contained HTML report of the estimate history with
//! client-side search. Presentation only.

use axum::extract::State;
use axum::response::Html;
use sanggar_db::models::history::HistoryRecord;
use sanggar_db::repositories::HistoryRepo;

use crate::error::AppResult;
use crate::state::AppState;

pub async fn admin_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let records = HistoryRepo::list_all(&state.pool).await?;
    Ok(Html(render_admin_page(&records)))
}

/// Render the full report page for `records` (already newest first).
pub fn render_admin_page(records: &[HistoryRecord]) -> String {
    let mut rows = String::new();
    for record in records {
        rows.push_str(&format!(
            "<tr>\
             <td>{}</td><td>{}</td><td>{} m²</td><td>{}</td>\
             <td>{} hari</td><td>{}</td><td>{}</td>\
             </tr>\n",
            escape_html(&record.created_at),
            escape_html(&record.project_type),
            record.area_m2,
            escape_html(&record.weather),
            record.duration_days,
            record.crew_size,
            format_rupiah(record.final_price),
        ));
    }

    if records.is_empty() {
        rows.push_str("<tr><td colspan=\"7\" class=\"empty\">Belum ada estimasi</td></tr>\n");
    }

    PAGE_TEMPLATE.replace("{rows}", &rows)
}

/// Format a whole-rupiah amount with comma thousands separators: `Rp 34,086,000`.
pub fn format_rupiah(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("Rp -{grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="id">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Admin Sanggar Alam</title>
  <style>
    body { font-family: sans-serif; background: #ecfdf5; margin: 0; }
    main { max-width: 72rem; margin: 0 auto; padding: 2.5rem 1.5rem; }
    h1 { color: #047857; margin-bottom: 0.25rem; }
    header { display: flex; justify-content: space-between; align-items: center; gap: 1rem; }
    input { padding: 0.5rem 1rem; border: 1px solid #d1d5db; border-radius: 0.75rem; width: 18rem; }
    table { width: 100%; border-collapse: collapse; background: #fff; margin-top: 2rem; font-size: 0.875rem; }
    th { background: #059669; color: #fff; padding: 0.75rem 1rem; }
    td { padding: 0.75rem 1rem; text-align: center; border-top: 1px solid #e5e7eb; }
    td.empty { color: #6b7280; }
    footer { text-align: center; color: #6b7280; font-size: 0.875rem; margin-top: 1.5rem; }
  </style>
</head>
<body>
  <main>
    <header>
      <div>
        <h1>Admin Sanggar Alam</h1>
        <p>Histori Estimasi Proyek</p>
      </div>
      <input type="text" id="searchInput" placeholder="Cari data..." />
    </header>
    <table>
      <thead>
        <tr>
          <th>Tanggal</th>
          <th>Jenis Proyek</th>
          <th>Luas</th>
          <th>Cuaca</th>
          <th>Durasi</th>
          <th>Pekerja</th>
          <th>Harga Final</th>
        </tr>
      </thead>
      <tbody id="tableBody">
{rows}      </tbody>
    </table>
    <footer>Sanggar Alam &mdash; Dashboard Admin</footer>
  </main>
  <script>
    const searchInput = document.getElementById('searchInput');
    const tableBody = document.getElementById('tableBody');

    searchInput.addEventListener('keyup', () => {
      const filter = searchInput.value.toLowerCase();
      for (const row of tableBody.getElementsByTagName('tr')) {
        row.style.display = row.innerText.toLowerCase().includes(filter) ? '' : 'none';
      }
    });
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, project_type: &str, final_price: i64) -> HistoryRecord {
        HistoryRecord {
            id,
            created_at: "2026-03-01 10:15".to_string(),
            project_type: project_type.to_string(),
            area_m2: 30.0,
            detail_level: 4,
            weather: "cerah".to_string(),
            distance_km: 20.0,
            duration_days: 15,
            crew_size: 3,
            production_cost: 28_405_000,
            margin_value: 5_681_000,
            sale_price: 34_086_000,
            discount_rate: 0.0,
            discount_value: 0,
            final_price,
        }
    }

    #[test]
    fn rupiah_grouping() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(999), "Rp 999");
        assert_eq!(format_rupiah(1_000), "Rp 1,000");
        assert_eq!(format_rupiah(34_086_000), "Rp 34,086,000");
        assert_eq!(format_rupiah(1_234_567_890), "Rp 1,234,567,890");
        assert_eq!(format_rupiah(-5_000), "Rp -5,000");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
        assert_eq!(escape_html("kolam"), "kolam");
    }

    #[test]
    fn renders_one_row_per_record() {
        let html = render_admin_page(&[record(2, "taman", 1_500_000), record(1, "kolam", 34_086_000)]);

        assert_eq!(html.matches("<tr><td>").count(), 2);
        assert!(html.contains("<td>15 hari</td>"));
        assert!(html.contains("Rp 34,086,000"));
        assert!(html.contains("Rp 1,500,000"));
        assert!(html.find("taman").unwrap() < html.find("kolam").unwrap());
        assert!(!html.contains("{rows}"));
    }

    #[test]
    fn renders_placeholder_when_empty() {
        let html = render_admin_page(&[]);
        assert!(html.contains("Belum ada estimasi"));
    }

    #[test]
    fn record_text_is_escaped() {
        let html = render_admin_page(&[record(1, "<b>kolam</b>", 1)]);
        assert!(html.contains("&lt;b&gt;kolam&lt;/b&gt;"));
        assert!(!html.contains("<b>kolam</b>"));
    }
}
