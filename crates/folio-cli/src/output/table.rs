/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_entity_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(String::len)
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format!("{header:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.len());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                format!("{value:<width$}")
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = vec![header_line.trim_end().to_string(), divider];
    lines.extend(row_lines);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::render_entity_table;

    #[test]
    fn aligns_columns_to_widest_cell() {
        let rendered = render_entity_table(
            &["file", "severity"],
            &[
                vec!["guides/a.md".to_string(), "fail".to_string()],
                vec!["b.md".to_string(), "warn".to_string()],
            ],
        );

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "file         severity");
        assert_eq!(lines[2], "guides/a.md  fail");
        assert_eq!(lines[3], "b.md         warn");
    }

    #[test]
    fn short_rows_pad_with_dashes() {
        let rendered = render_entity_table(
            &["a", "b"],
            &[vec!["only".to_string()]],
        );
        assert!(rendered.lines().last().unwrap().contains('-'));
    }
}
