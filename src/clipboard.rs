//! Clipboard payload formatting.
//!
//! Turns a block of already-resolved display strings into the HTML, CSV and
//! TSV flavours a rendering layer hands to the system clipboard.

/// Build `(html, csv)` clipboard payloads for a block of rows.
///
/// HTML is a bare `<table>` with cells written verbatim. CSV quotes every
/// cell, doubling embedded quotes, and joins rows with `\n`.
pub fn prepare_clipboard_data<R, C>(rows: &[R]) -> (String, String)
where
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    let mut html = String::from("<table>");
    let mut csv_rows = Vec::with_capacity(rows.len());

    for row in rows {
        html.push_str("<tr>");
        let mut csv_row = Vec::with_capacity(row.as_ref().len());
        for cell in row.as_ref() {
            let cell = cell.as_ref();
            html.push_str("<td>");
            html.push_str(cell);
            html.push_str("</td>");
            csv_row.push(format!("\"{}\"", cell.replace('"', "\"\"")));
        }
        csv_rows.push(csv_row.join(","));
        html.push_str("</tr>");
    }
    html.push_str("</table>");

    (html, csv_rows.join("\n"))
}

/// Format a block of rows as TSV the way spreadsheet apps put it on the clipboard.
pub fn to_tsv<R, C>(rows: &[R]) -> String
where
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    let mut result = String::new();
    for (row_idx, row) in rows.iter().enumerate() {
        if row_idx > 0 {
            result.push('\n');
        }
        for (col_idx, cell) in row.as_ref().iter().enumerate() {
            if col_idx > 0 {
                result.push('\t');
            }
            result.push_str(&escape_cell_value(cell.as_ref()));
        }
    }
    result
}

/// Escape a cell value for TSV/clipboard format
/// If the value contains tabs, newlines, or quotes, wrap in quotes and escape internal quotes
pub fn escape_cell_value(value: &str) -> String {
    let needs_quoting = value.contains('\t')
        || value.contains('\n')
        || value.contains('\r')
        || value.contains('"');

    if needs_quoting {
        let escaped = value.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_clipboard_data() {
        let rows = vec![vec!["a", "b"], vec!["say \"hi\"", ""]];
        let (html, csv) = prepare_clipboard_data(&rows);
        assert_eq!(
            html,
            "<table><tr><td>a</td><td>b</td></tr><tr><td>say \"hi\"</td><td></td></tr></table>"
        );
        assert_eq!(csv, "\"a\",\"b\"\n\"say \"\"hi\"\"\",\"\"");
    }

    #[test]
    fn test_prepare_clipboard_data_empty() {
        let rows: Vec<Vec<String>> = Vec::new();
        let (html, csv) = prepare_clipboard_data(&rows);
        assert_eq!(html, "<table></table>");
        assert_eq!(csv, "");
    }

    #[test]
    fn test_tsv_quotes_only_when_needed() {
        let rows = [["plain", "tab\there"], ["line\nbreak", "q\"uote"]];
        assert_eq!(
            to_tsv(&rows),
            "plain\t\"tab\there\"\n\"line\nbreak\"\t\"q\"\"uote\""
        );
    }
}
