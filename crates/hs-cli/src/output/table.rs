#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const GAP: &str = "  ";
const MIN_COLUMN: usize = 6;

/// Render an aligned text table. Cells too wide for `max_width` are cut
/// with an ellipsis, widest column first.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();

    if let Some(max_width) = options.max_width {
        shrink(&mut widths, max_width);
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&clip(header, *width), *width))
        .collect::<Vec<_>>()
        .join(GAP);
    lines.push(header_line.trim_end().to_string());
    lines.push("-".repeat(widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1)));

    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = clip(row.get(index).map_or("-", String::as_str), *width);
                let padded = pad(&cell, *width);
                if options.color {
                    paint(&cell, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn shrink(widths: &mut [usize], max_width: usize) {
    let gaps = GAP.len() * widths.len().saturating_sub(1);
    while widths.iter().sum::<usize>() + gaps > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|width| **width > MIN_COLUMN)
            .max_by_key(|width| **width)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut clipped = value.chars().take(width.saturating_sub(1)).collect::<String>();
    clipped.push('…');
    clipped
}

fn pad(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(value.chars().count());
    format!("{value}{}", " ".repeat(fill))
}

/// Color session and status words. `padded` is `cell` plus trailing spaces.
fn paint(cell: &str, padded: String) -> String {
    let code = match cell.to_ascii_lowercase().as_str() {
        "ready" | "active" | "true" | "dashboard" | "render" => "32",
        "terms_pending" | "pending" | "redirect" => "33",
        "unauthenticated" | "false" | "invalid" | "failed" => "31",
        _ => return padded,
    };
    let fill = &padded[cell.len()..];
    format!("\u{1b}[{code}m{cell}\u{1b}[0m{fill}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{TableOptions, render};

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_align_to_widest_cell() {
        let rows = vec![
            vec!["phase".to_string(), "ready".to_string()],
            vec!["navigation.route".to_string(), "dashboard".to_string()],
        ];
        let table = render(&["field", "value"], &rows, PLAIN);
        let lines = table.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "field             value");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "phase             ready");
        assert_eq!(lines[3], "navigation.route  dashboard");
    }

    #[test]
    fn narrow_terminal_clips_widest_column() {
        let rows = vec![vec![
            "view.guidelines[0].body".to_string(),
            "Complete your registration and form teams of up to 4 members.".to_string(),
        ]];
        let table = render(
            &["field", "value"],
            &rows,
            TableOptions {
                max_width: Some(50),
                color: false,
            },
        );
        let row = table.lines().nth(2).unwrap();
        assert!(row.chars().count() <= 50);
        assert!(row.ends_with('…'));
    }

    #[test]
    fn color_wraps_status_words_only() {
        let rows = vec![vec!["phase".to_string(), "ready".to_string()]];
        let table = render(
            &["field", "value"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(table.contains("\u{1b}[32mready\u{1b}[0m"));
        assert!(!table.contains("\u{1b}[32mphase"));
    }
}
