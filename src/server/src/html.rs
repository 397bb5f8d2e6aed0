//! Server-side rendering of the diff view.
//!
//! The page is rendered once per request with the current diff, and an
//! embedded `EventSource` client re-renders the table and metadata from
//! the JSON payloads pushed on `/events`.

use libdiffer::model::{ChangeType, DiffResult, DiffRow, DiffSide, FileInfo, IntralineSpan};

const STYLE: &str = r#"
body { font-family: -apple-system, "Segoe UI", sans-serif; margin: 0; background: #f6f8fa; color: #1f2328; }
header { display: flex; align-items: baseline; gap: 1rem; padding: 0.75rem 1.25rem; background: #24292f; color: #fff; }
header h1 { font-size: 1.1rem; margin: 0; }
#status { font-size: 0.85rem; color: #9fb0c0; }
#status.error { color: #ff8182; }
.file-meta { display: flex; gap: 1rem; padding: 0.75rem 1.25rem; }
.file-meta .card { flex: 1; background: #fff; border: 1px solid #d0d7de; border-radius: 6px; padding: 0.5rem 0.75rem; font-size: 0.85rem; }
.file-meta .card .name { font-weight: 600; }
.file-meta .card .detail { color: #57606a; }
table.diff { width: calc(100% - 2.5rem); margin: 0 1.25rem 1.25rem; border-collapse: collapse; background: #fff; border: 1px solid #d0d7de; font-family: ui-monospace, "SF Mono", Consolas, monospace; font-size: 0.8rem; }
table.diff th { text-align: left; padding: 0.4rem 0.6rem; background: #f6f8fa; border-bottom: 1px solid #d0d7de; }
table.diff td { padding: 0.1rem 0.6rem; vertical-align: top; white-space: pre-wrap; word-break: break-all; }
td.line-num { width: 1%; min-width: 2.5rem; text-align: right; color: #656d76; user-select: none; border-right: 1px solid #d0d7de; }
tr.row-added td.right { background: #dafbe1; }
tr.row-removed td.left { background: #ffebe9; }
tr.row-modified td.left, tr.row-modified td.right { background: #fff8c5; }
span.intraline-added { background: #aceebb; }
span.intraline-removed { background: #ffcecb; }
.error-page { margin: 3rem auto; max-width: 40rem; background: #fff; border: 1px solid #d0d7de; border-radius: 6px; padding: 1.5rem; }
.error-page h1 { color: #cf222e; font-size: 1.2rem; }
"#;

const SCRIPT: &str = r#"
function escapeHtml(text) {
  return text
    .replace(/&/g, "&amp;")
    .replace(/</g, "&lt;")
    .replace(/>/g, "&gt;")
    .replace(/"/g, "&quot;");
}

function displayText(text) {
  if (text.endsWith("\r\n")) return text.slice(0, -2);
  if (text.endsWith("\n")) return text.slice(0, -1);
  return text;
}

// Span offsets are byte positions, so slice through UTF-8 bytes.
function renderCell(text, spans, side) {
  const bytes = new TextEncoder().encode(displayText(text));
  const decoder = new TextDecoder();
  const mine = spans.filter((s) => s.side === side);
  let html = "";
  let pos = 0;
  for (const span of mine) {
    const start = Math.min(span.start, bytes.length);
    const end = Math.min(span.end, bytes.length);
    if (start > pos) html += escapeHtml(decoder.decode(bytes.slice(pos, start)));
    if (end > start) {
      html += '<span class="intraline-' + span.kind + '">' +
        escapeHtml(decoder.decode(bytes.slice(start, end))) + "</span>";
    }
    pos = Math.max(pos, end);
  }
  if (pos < bytes.length) html += escapeHtml(decoder.decode(bytes.slice(pos)));
  return html;
}

function renderRow(row) {
  const leftNum = row.left_number === null ? "" : row.left_number;
  const rightNum = row.right_number === null ? "" : row.right_number;
  const left = row.left_text === null ? "" : renderCell(row.left_text, row.spans, "left");
  const right = row.right_text === null ? "" : renderCell(row.right_text, row.spans, "right");
  return '<tr class="row-' + row.modification + '">' +
    '<td class="line-num">' + leftNum + "</td>" +
    '<td class="left">' + left + "</td>" +
    '<td class="line-num">' + rightNum + "</td>" +
    '<td class="right">' + right + "</td></tr>";
}

function renderMeta(id, info) {
  document.getElementById(id).innerHTML =
    '<div class="name">' + escapeHtml(info.name) + "</div>" +
    '<div class="detail">' + escapeHtml(info.path) + "</div>" +
    '<div class="detail">' + escapeHtml(info.modified_time) + " &middot; " + info.size + " bytes</div>";
}

const source = new EventSource("/events");
const status = document.getElementById("status");
source.onmessage = (message) => {
  const payload = JSON.parse(message.data);
  if (payload.event === "updated") {
    renderMeta("file1-meta", payload.diff.file1_info);
    renderMeta("file2-meta", payload.diff.file2_info);
    document.getElementById("diff-body").innerHTML =
      payload.diff.rows.map(renderRow).join("");
    status.className = "";
    status.textContent = "updated " + new Date().toLocaleTimeString();
  } else {
    status.className = "error";
    status.textContent = payload.status.status_description + " (showing last good diff)";
  }
};
source.onerror = () => {
  status.className = "error";
  status.textContent = "connection lost, retrying...";
};
"#;

pub fn render_index(diff: &DiffResult) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<title>Live Differ</title>\n<style>");
    page.push_str(STYLE);
    page.push_str("</style>\n</head>\n<body>\n");
    page.push_str("<header><h1>Live Differ</h1><div id=\"status\"></div></header>\n");

    page.push_str("<section class=\"file-meta\">\n");
    page.push_str(&render_meta_card("file1-meta", &diff.file1_info));
    page.push_str(&render_meta_card("file2-meta", &diff.file2_info));
    page.push_str("</section>\n");

    page.push_str("<table class=\"diff\">\n<thead><tr>");
    page.push_str(&format!(
        "<th></th><th>{}</th><th></th><th>{}</th>",
        escape(&diff.file1_info.name),
        escape(&diff.file2_info.name)
    ));
    page.push_str("</tr></thead>\n<tbody id=\"diff-body\">\n");
    for row in &diff.rows {
        page.push_str(&render_row(row));
    }
    page.push_str("</tbody>\n</table>\n<script>");
    page.push_str(SCRIPT);
    page.push_str("</script>\n</body>\n</html>\n");
    page
}

pub fn render_error(message: &str) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<title>Live Differ - Error</title>\n<style>");
    page.push_str(STYLE);
    page.push_str("</style>\n</head>\n<body>\n<div class=\"error-page\">\n<h1>Error</h1>\n");
    page.push_str(&format!("<p>{}</p>\n", escape(message)));
    page.push_str("</div>\n</body>\n</html>\n");
    page
}

fn render_meta_card(id: &str, info: &FileInfo) -> String {
    format!(
        "<div class=\"card\" id=\"{id}\"><div class=\"name\">{}</div>\
         <div class=\"detail\">{}</div>\
         <div class=\"detail\">{} &middot; {} bytes</div></div>\n",
        escape(&info.name),
        escape(&info.path.display().to_string()),
        escape(&info.modified_time),
        info.size,
    )
}

fn render_row(row: &DiffRow) -> String {
    let class = match row.modification {
        ChangeType::Added => "row-added",
        ChangeType::Removed => "row-removed",
        ChangeType::Modified => "row-modified",
        ChangeType::Unchanged => "row-unchanged",
    };
    let left_num = row
        .left_number
        .map(|n| n.to_string())
        .unwrap_or_default();
    let right_num = row
        .right_number
        .map(|n| n.to_string())
        .unwrap_or_default();
    let left = row
        .left_text
        .as_deref()
        .map(|text| render_cell(text, &row.spans, DiffSide::Left))
        .unwrap_or_default();
    let right = row
        .right_text
        .as_deref()
        .map(|text| render_cell(text, &row.spans, DiffSide::Right))
        .unwrap_or_default();

    format!(
        "<tr class=\"{class}\"><td class=\"line-num\">{left_num}</td>\
         <td class=\"left\">{left}</td>\
         <td class=\"line-num\">{right_num}</td>\
         <td class=\"right\">{right}</td></tr>\n"
    )
}

/// Render one side of a row, wrapping its intraline spans in highlight
/// markup. Span offsets are byte positions into the line text.
fn render_cell(text: &str, spans: &[IntralineSpan], side: DiffSide) -> String {
    let display = text
        .strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text);

    let mut html = String::new();
    let mut pos = 0;
    for span in spans.iter().filter(|span| span.side == side) {
        let start = span.start.min(display.len());
        let end = span.end.min(display.len());
        if start > pos {
            html.push_str(&escape(&display[pos..start]));
        }
        if end > start {
            let class = match span.kind {
                ChangeType::Added => "intraline-added",
                _ => "intraline-removed",
            };
            html.push_str(&format!(
                "<span class=\"{class}\">{}</span>",
                escape(&display[start..end])
            ));
        }
        pos = pos.max(end);
    }
    if pos < display.len() {
        html.push_str(&escape(&display[pos..]));
    }
    html
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use libdiffer::model::{ChangeType, DiffRow, DiffSide, IntralineSpan};

    use super::*;

    #[test]
    fn test_render_cell_wraps_span() {
        let spans = vec![IntralineSpan {
            side: DiffSide::Right,
            start: 6,
            end: 15,
            kind: ChangeType::Added,
        }];
        let html = render_cell("Line 2 modified\n", &spans, DiffSide::Right);
        assert_eq!(
            html,
            "Line 2<span class=\"intraline-added\"> modified</span>"
        );
    }

    #[test]
    fn test_render_row_added_has_no_left_cells() {
        let row = DiffRow::added(4, "Line 4\n");
        let html = render_row(&row);
        assert!(html.contains("row-added"));
        assert!(html.contains("<td class=\"left\"></td>"));
        assert!(html.contains("Line 4"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>&\"</b>"), "&lt;b&gt;&amp;&quot;&lt;/b&gt;");
    }
}
