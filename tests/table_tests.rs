use rattendlog::utils::colors::{GREEN, RESET};
use rattendlog::utils::table::{Table, strip_ansi, visible_len};

/// Display column at which `needle` starts in `line`.
fn column_of(line: &str, needle: &str) -> usize {
    let idx = line.find(needle).unwrap();
    visible_len(&line[..idx])
}

#[test]
fn wide_characters_count_double() {
    assert_eq!(visible_len("bob"), 3);
    assert_eq!(visible_len("田中"), 4);
    assert_eq!(visible_len(&format!("{GREEN}Running{RESET}")), 7);
    assert_eq!(strip_ansi(&format!("{GREEN}09:00{RESET}")), "09:00");
}

#[test]
fn columns_line_up_with_wide_cells() {
    let mut table = Table::new(&["BY", "DEV"], "-");
    table.add_row(vec!["田中".into(), "WEB".into()]);
    table.add_row(vec!["bob".into(), "IOS".into()]);

    let out = table.render();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(column_of(lines[2], "WEB"), column_of(lines[3], "IOS"));
    assert_eq!(column_of(lines[0], "DEV"), column_of(lines[2], "WEB"));
    // separator spans the rendered width
    assert_eq!(lines[1], "-".repeat(8));
}

#[test]
fn coloured_cells_do_not_widen_columns() {
    let mut table = Table::new(&["IN", "X"], "=");
    table.add_row(vec![format!("{GREEN}09:00{RESET}"), "a".into()]);
    table.add_row(vec!["10:00".into(), "b".into()]);

    let out = table.render();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(column_of(lines[2], "a"), column_of(lines[3], "b"));
    assert_eq!(column_of(lines[3], "b"), 6);
}
