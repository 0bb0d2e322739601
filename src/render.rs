use std::fmt::{self, Write};

/// Placeholder written for variables without a value, keeps the line a valid assignment
pub const EMPTY_PLACEHOLDER: &str = "...";

/// Writes one shell-script record: the description as `#` comment lines, then `KEY=value`
pub(crate) fn write_entry(
    out: &mut impl Write,
    key: &str,
    description: &str,
    value: &str,
) -> fmt::Result {
    if !description.is_empty() {
        for line in description.split('\n') {
            writeln!(out, "# {}", line)?;
        }
    }

    let value = if value.is_empty() {
        EMPTY_PLACEHOLDER
    } else {
        value
    };
    writeln!(out, "{}={}", key, value)
}

/// One row of the documentation table
pub(crate) struct DocRow<'r> {
    pub key: &'r str,
    pub description: &'r str,
    pub value: String,
    pub required: bool,
}

/// Markdown summary table of all variables
pub(crate) fn markdown_table<'r>(rows: impl IntoIterator<Item = DocRow<'r>>) -> String {
    let mut md = String::new();

    md.push_str("## Environment Variables Summary\n\n");
    md.push_str("| Variable | Required | Description | Default/Current |\n");
    md.push_str("|----------|----------|-------------|-----------------|\n");
    for row in rows {
        let required_str = if row.required { "Yes" } else { "No" };
        let value_display = if row.value.is_empty() {
            "-".to_string()
        } else {
            format!("`{}`", row.value)
        };
        // Pipes would end the cell early
        let description = row.description.replace('|', "\\|").replace('\n', "<br>");
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            row.key, required_str, description, value_display
        ));
    }

    md
}
