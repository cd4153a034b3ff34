//! Formatting helpers shared by the views, exports and the CLI.
//!
//! Everything here is a pure function of its inputs.

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// Escape text for inclusion in an HTML document.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Render a header row and body rows as an escaped HTML table.
pub fn table_html<S: AsRef<str>>(headers: &[S], rows: &[Vec<String>]) -> String {
    let head: String = headers
        .iter()
        .map(|h| format!("<th>{}</th>", escape_html(h.as_ref())))
        .collect();
    let body: String = rows
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|cell| format!("<td>{}</td>", escape_html(cell)))
                .collect();
            format!("<tr>{}</tr>", cells)
        })
        .collect();
    format!(
        "<div class=\"table-scroll\"><table class=\"table\"><thead><tr>{}</tr></thead><tbody>{}</tbody></table></div>",
        head, body
    )
}

/// Encode rows as CSV text.
///
/// Every field is quoted, embedded quotes are doubled, fields are separated
/// by `,` and rows by `\n`. There is no trailing newline.
pub fn encode_csv<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<String, csv::Error> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(Vec::new());

    for row in rows {
        writer.write_record(row.iter().map(|field| field.as_ref()))?;
    }

    writer.flush()?;
    let mut text = String::from_utf8_lossy(writer.get_ref()).into_owned();
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// First `max` characters of `text`, counted in chars rather than bytes.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// `YYYY-MM-DD`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Zero-pad an hour label to two digits (`"3"` becomes `"03"`). Empty stays empty.
pub fn pad_hour(hour: &str) -> String {
    if hour.is_empty() || hour.chars().count() >= 2 {
        hour.to_string()
    } else {
        format!("{:0>2}", hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b class="x">Tom & 'Jerry'</b>"#),
            "&lt;b class=&quot;x&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/b&gt;"
        );
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_table_html_escapes_cells() {
        let html = table_html(&["User"], &[vec!["<alice>".to_string()]]);
        assert!(html.contains("<th>User</th>"));
        assert!(html.contains("<td>&lt;alice&gt;</td>"));
    }

    #[test]
    fn test_encode_csv_quotes_everything() {
        let rows = vec![
            vec!["log_id", "log_content"],
            vec!["1", "said \"hi\", left"],
            vec!["2", ""],
        ];
        assert_eq!(
            encode_csv(&rows).unwrap(),
            "\"log_id\",\"log_content\"\n\"1\",\"said \"\"hi\"\", left\"\n\"2\",\"\""
        );
    }

    #[test]
    fn test_encode_csv_empty() {
        let rows: Vec<Vec<String>> = Vec::new();
        assert_eq!(encode_csv(&rows).unwrap(), "");
    }

    #[test]
    fn test_truncate_chars_is_char_safe() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 80), "short");
        let long = "x".repeat(100);
        assert_eq!(truncate_chars(&long, 80).len(), 80);
    }

    #[test]
    fn test_format_iso_date_and_pad_hour() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_iso_date(date), "2025-03-07");
        assert_eq!(pad_hour("3"), "03");
        assert_eq!(pad_hour("23"), "23");
        assert_eq!(pad_hour(""), "");
    }
}
