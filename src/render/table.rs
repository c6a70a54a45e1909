//! Table rendering with column-width and alignment computation.
//!
//! Every rendered row, the header and divider included, is padded so each
//! column has one uniform display width of at least three characters.
//! Literal pipes in headers and cells are escaped on the rendered text;
//! the caller's entry graph is never touched.

use unicode_width::UnicodeWidthStr;

use crate::entry::Entry;
use crate::error::{Error, Result};

use super::compose::render_single_line;
use super::options::RenderOptions;
use super::Rendered;

const MIN_COLUMN_WIDTH: usize = 3;
const DEFAULT_PIPE_REPLACEMENT: &str = "&#124;";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    None,
    Left,
    Right,
    Center,
}

struct Column {
    /// Raw column name, used for keyed-row lookup.
    name: String,
    /// Displayed header text, with pipes escaped.
    header: String,
    align: Align,
    /// Row-record lookup key, when it differs from the column name.
    field: Option<String>,
}

pub fn render_table(entry: &Entry, options: &RenderOptions) -> Result<Rendered> {
    let settings = entry
        .get("table")
        .and_then(Entry::as_record)
        .ok_or(Error::ShapeMismatch("table"))?;

    let column_entries = settings
        .get("columns")
        .and_then(Entry::as_seq)
        .ok_or_else(|| Error::InvalidEntry("table requires a columns array".to_string()))?;
    let row_entries = settings
        .get("rows")
        .and_then(Entry::as_seq)
        .unwrap_or_default();
    let pipe_replacement = settings
        .get("pipeReplacement")
        .and_then(Entry::as_str)
        .unwrap_or(DEFAULT_PIPE_REPLACEMENT);
    let prefix_cell_values = settings
        .get("prefixCellValues")
        .and_then(Entry::as_bool)
        .unwrap_or(true);

    let columns = resolve_columns(column_entries, options, pipe_replacement)?;

    // The ambient prefix is normally repeated inside each cell's own text
    // when the table sits in a prefixed block; `prefixCellValues: false`
    // suppresses that.
    let cell_prefix = if prefix_cell_values {
        options.prefix.for_index(0).to_string()
    } else {
        String::new()
    };

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(row_entries.len());
    for row in row_entries {
        let mut cells = Vec::with_capacity(columns.len());
        for (index, column) in columns.iter().enumerate() {
            let value = match row {
                Entry::Seq(values) => values.get(index),
                Entry::Record(record) => {
                    let key = column.field.as_deref().unwrap_or(&column.name);
                    record.get(key)
                }
                _ => {
                    return Err(Error::InvalidEntry(
                        "table rows must be arrays or keyed records".to_string(),
                    ));
                }
            };
            let text = match value {
                Some(cell) if !cell.is_null() => {
                    let rendered = render_single_line(cell, options, "table cell")?;
                    format!("{cell_prefix}{}", rendered.replace('|', pipe_replacement))
                }
                _ => String::new(),
            };
            cells.push(text);
        }
        rows.push(cells);
    }

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let cell_max = rows
                .iter()
                .map(|cells| cells[index].as_str().width())
                .max()
                .unwrap_or(0);
            column.header.as_str().width().max(cell_max).max(MIN_COLUMN_WIDTH)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(
        columns.iter().map(|c| c.header.as_str()),
        &columns,
        &widths,
    ));
    lines.push(render_divider(&columns, &widths));
    for cells in &rows {
        lines.push(render_row(
            cells.iter().map(String::as_str),
            &columns,
            &widths,
        ));
    }

    Ok(Rendered::Block(lines.join("\n")))
}

fn resolve_columns(
    entries: &[Entry],
    options: &RenderOptions,
    pipe_replacement: &str,
) -> Result<Vec<Column>> {
    let mut columns = Vec::with_capacity(entries.len());
    for entry in entries {
        let (name, align, field) = match entry {
            Entry::Record(record) => {
                let name = record
                    .get("name")
                    .ok_or_else(|| Error::InvalidEntry("table column requires a name".to_string()))?;
                (
                    render_single_line(name, options, "table column header")?,
                    parse_align(record.get("align"))?,
                    record.get("field").and_then(Entry::as_str).map(String::from),
                )
            }
            _ => (
                render_single_line(entry, options, "table column header")?,
                Align::None,
                None,
            ),
        };
        columns.push(Column {
            header: name.replace('|', pipe_replacement),
            name,
            align,
            field,
        });
    }
    Ok(columns)
}

fn parse_align(value: Option<&Entry>) -> Result<Align> {
    match value.and_then(Entry::as_str) {
        None => Ok(Align::None),
        Some("left") => Ok(Align::Left),
        Some("right") => Ok(Align::Right),
        Some("center") => Ok(Align::Center),
        Some(other) => Err(Error::InvalidEntry(format!(
            "unknown column alignment: {other}"
        ))),
    }
}

fn render_row<'a>(
    cells: impl Iterator<Item = &'a str>,
    columns: &[Column],
    widths: &[usize],
) -> String {
    let padded: Vec<String> = cells
        .zip(columns)
        .zip(widths)
        .map(|((text, column), width)| pad(text, *width, column.align))
        .collect();
    format!("| {} |", padded.join(" | "))
}

fn render_divider(columns: &[Column], widths: &[usize]) -> String {
    let cells: Vec<String> = columns
        .iter()
        .zip(widths)
        .map(|(column, width)| {
            let mut dashes: Vec<char> = std::iter::repeat_n('-', *width).collect();
            if matches!(column.align, Align::Left | Align::Center) {
                dashes[0] = ':';
            }
            if matches!(column.align, Align::Right | Align::Center) {
                dashes[*width - 1] = ':';
            }
            dashes.into_iter().collect()
        })
        .collect();
    format!("| {} |", cells.join(" | "))
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let gap = width.saturating_sub(text.width());
    match align {
        Align::Right => format!("{}{text}", " ".repeat(gap)),
        Align::Center => {
            // Extra padding space goes to the right when uneven.
            let left = gap / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(gap - left))
        }
        Align::None | Align::Left => format!("{text}{}", " ".repeat(gap)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{bold, table};

    fn simple_table() -> Entry {
        table(
            vec!["Col1".into(), "Col2".into()],
            vec![
                Entry::Seq(vec!["Row1".into(), "Row2".into()]),
                Entry::Seq(vec!["Row3".into(), "Row4 is longer".into()]),
            ],
        )
    }

    #[test]
    fn test_columns_pad_to_widest_cell() {
        let options = RenderOptions::default();
        let rendered = render_table(&simple_table(), &options).unwrap();
        assert_eq!(
            rendered.text(),
            "| Col1 | Col2           |\n\
             | ---- | -------------- |\n\
             | Row1 | Row2           |\n\
             | Row3 | Row4 is longer |"
        );
    }

    #[test]
    fn test_uniform_row_width() {
        let options = RenderOptions::default();
        let rendered = render_table(&simple_table(), &options).unwrap();
        let mut widths = rendered.text().lines().map(|l| l.width());
        let first = widths.next().unwrap();
        assert!(widths.all(|w| w == first));
    }

    #[test]
    fn test_minimum_column_width() {
        let options = RenderOptions::default();
        let entry = table(vec!["A".into()], vec![Entry::Seq(vec!["b".into()])]);
        assert_eq!(
            render_table(&entry, &options).unwrap().text(),
            "| A   |\n| --- |\n| b   |"
        );
    }

    #[test]
    fn test_alignment_markers_and_padding() {
        let options = RenderOptions::default();
        let entry = table(
            vec![
                Entry::tagged("name", "L".into()).with("align", "left".into()),
                Entry::tagged("name", "R".into()).with("align", "right".into()),
                Entry::tagged("name", "C".into()).with("align", "center".into()),
            ],
            vec![Entry::Seq(vec!["ab".into(), "ab".into(), "ab".into()])],
        );
        assert_eq!(
            render_table(&entry, &options).unwrap().text(),
            "| L   |   R |  C  |\n\
             | :-- | --: | :-: |\n\
             | ab  |  ab | ab  |"
        );
    }

    #[test]
    fn test_keyed_rows_and_field_override() {
        let options = RenderOptions::default();
        let entry = table(
            vec![
                "Name".into(),
                Entry::tagged("name", "Age".into()).with("field", "years".into()),
            ],
            vec![Entry::tagged("Name", "Ada".into()).with("years", Entry::Int(36))],
        );
        assert_eq!(
            render_table(&entry, &options).unwrap().text(),
            "| Name | Age |\n| ---- | --- |\n| Ada  | 36  |"
        );
    }

    #[test]
    fn test_missing_and_null_cells_render_empty() {
        let options = RenderOptions::default();
        let entry = table(
            vec!["A".into(), "B".into()],
            vec![
                Entry::Seq(vec!["x".into()]),
                Entry::Seq(vec![Entry::Null, "y".into()]),
            ],
        );
        assert_eq!(
            render_table(&entry, &options).unwrap().text(),
            "| A   | B   |\n| --- | --- |\n| x   |     |\n|     | y   |"
        );
    }

    #[test]
    fn test_pipes_escaped_in_cells() {
        let options = RenderOptions::default();
        let entry = table(
            vec!["Syntax".into()],
            vec![Entry::Seq(vec!["a|b".into()])],
        );
        let rendered = render_table(&entry, &options).unwrap();
        assert!(rendered.text().contains("a&#124;b"));
    }

    #[test]
    fn test_keyed_lookup_uses_raw_column_name() {
        // Escaping applies to the displayed header only; row records are
        // keyed by the unescaped name.
        let options = RenderOptions::default();
        let entry = table(
            vec!["a|b".into()],
            vec![Entry::tagged("a|b", "value".into())],
        );
        assert_eq!(
            render_table(&entry, &options).unwrap().text(),
            "| a&#124;b |\n| -------- |\n| value    |"
        );
    }

    #[test]
    fn test_custom_pipe_replacement() {
        let options = RenderOptions::default();
        let mut entry = table(vec!["S".into()], vec![Entry::Seq(vec!["a|b".into()])]);
        if let Entry::Record(record) = &mut entry {
            if let Some(Entry::Record(settings)) = record.get_mut("table") {
                settings.insert("pipeReplacement".to_string(), "\\|".into());
            }
        }
        assert!(render_table(&entry, &options).unwrap().text().contains("a\\|b"));
    }

    #[test]
    fn test_escaping_does_not_mutate_input() {
        let options = RenderOptions::default();
        let entry = table(
            vec!["Syntax".into()],
            vec![Entry::Seq(vec!["a|b".into()])],
        );
        let before = entry.clone();
        render_table(&entry, &options).unwrap();
        assert_eq!(entry, before);
    }

    #[test]
    fn test_rich_cell_content() {
        let options = RenderOptions::default();
        let entry = table(
            vec!["X".into()],
            vec![Entry::Seq(vec![bold("hi")])],
        );
        assert_eq!(
            render_table(&entry, &options).unwrap().text(),
            "| X      |\n| ------ |\n| **hi** |"
        );
    }

    #[test]
    fn test_multi_line_cell_is_an_error() {
        let options = RenderOptions::default();
        let entry = table(
            vec!["X".into()],
            vec![Entry::Seq(vec!["one\ntwo".into()])],
        );
        assert!(matches!(
            render_table(&entry, &options),
            Err(Error::UnsupportedShape(_))
        ));
    }

    #[test]
    fn test_non_string_primitives_in_cells() {
        let options = RenderOptions::default();
        let entry = table(
            vec!["V".into()],
            vec![
                Entry::Seq(vec![Entry::Int(7)]),
                Entry::Seq(vec![Entry::Bool(false)]),
            ],
        );
        assert_eq!(
            render_table(&entry, &options).unwrap().text(),
            "| V     |\n| ----- |\n| 7     |\n| false |"
        );
    }
}
