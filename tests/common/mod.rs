use std::fmt::Write;

/// A synthetic two-character lowercase symbol for row `index` ("aa", "ab", ...),
/// distinct for every index a table can hold.
pub fn synthetic_symbol(index: usize) -> String {
    let first = (b'a' + (index / 26) as u8) as char;
    let second = (b'a' + (index % 26) as u8) as char;
    format!("{}{}", first, second)
}

/// A well-formed TOML row for `index` with valid placeholder values.
pub fn synthetic_row(index: usize) -> String {
    format!(
        "{{ symbol = \"{}\", radius = 1.00, color = [0.50, 0.50, 0.50], energy = [0.60, 0.60, 0.60] }}",
        synthetic_symbol(index)
    )
}

/// Builds a TOML document from the given rows.
pub fn table_toml(rows: &[String]) -> String {
    let mut doc = String::from("elements = [\n");
    for row in rows {
        writeln!(doc, "    {},", row).unwrap();
    }
    doc.push_str("]\n");
    doc
}

/// A full, valid synthetic table document with one row per index.
pub fn synthetic_table_toml() -> String {
    let rows: Vec<String> = (0..elemtab::ELEMENT_COUNT).map(synthetic_row).collect();
    table_toml(&rows)
}

/// A full synthetic table document with the row at `index` replaced by `row`.
pub fn synthetic_table_with_row(index: usize, row: &str) -> String {
    let mut rows: Vec<String> = (0..elemtab::ELEMENT_COUNT).map(synthetic_row).collect();
    rows[index] = row.to_string();
    table_toml(&rows)
}
