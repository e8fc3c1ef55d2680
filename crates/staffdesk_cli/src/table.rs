//! Plain-text table rendering for employee lists.

use staffdesk_core::Employee;

const EMPTY_MESSAGE: &str = "No employees found.";
const HEADERS: [&str; 5] = ["(index)", "id", "name", "role", "department"];

/// Renders `employees` as a boxed table, or the empty-result line.
///
/// The `(index)` column is the row position within this result, starting at 0.
pub fn render_employees<'a, I>(employees: I) -> String
where
    I: IntoIterator<Item = &'a Employee>,
{
    let rows: Vec<[String; 5]> = employees
        .into_iter()
        .enumerate()
        .map(|(index, employee)| {
            [
                index.to_string(),
                employee.id.clone(),
                employee.name.clone(),
                employee.role.clone(),
                employee.department.clone(),
            ]
        })
        .collect();

    if rows.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = separator_line(&widths);
    let mut lines = vec![separator.clone(), row_line(&widths, &HEADERS), separator.clone()];
    lines.extend(rows.iter().map(|row| row_line(&widths, row)));
    lines.push(separator);
    lines.join("\n")
}

fn separator_line(widths: &[usize; 5]) -> String {
    let segments: Vec<String> = widths.iter().map(|width| "-".repeat(width + 2)).collect();
    format!("+{}+", segments.join("+"))
}

fn row_line<S: AsRef<str>>(widths: &[usize; 5], cells: &[S; 5]) -> String {
    let segments: Vec<String> = widths
        .iter()
        .zip(cells)
        .map(|(width, cell)| format!(" {:<width$} ", cell.as_ref(), width = *width))
        .collect();
    format!("|{}|", segments.join("|"))
}
