//! Excel export functionality.

use std::path::{Path, PathBuf};

use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, XlsxError};

use crate::models::employee::Employee;

/// Export the employee roster to an Excel file.
pub fn export_employees_to_excel(employees: &[Employee], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Employees")?;

    // Header format
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin);

    let headers = [
        "First Name",
        "Last Name",
        "Email",
        "Job Title",
        "Department",
        "Location",
        "Start Date",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    // Column widths
    worksheet.set_column_width(0, 15)?;
    worksheet.set_column_width(1, 15)?;
    worksheet.set_column_width(2, 30)?;
    worksheet.set_column_width(3, 20)?;
    worksheet.set_column_width(4, 20)?;
    worksheet.set_column_width(5, 15)?;
    worksheet.set_column_width(6, 12)?;

    // Data rows
    for (idx, emp) in employees.iter().enumerate() {
        let row = (idx + 1) as u32;

        worksheet.write_string(row, 0, &emp.first_name)?;
        worksheet.write_string(row, 1, &emp.last_name)?;
        worksheet.write_string(row, 2, &emp.email)?;
        worksheet.write_string(row, 3, emp.job_title.as_deref().unwrap_or(""))?;
        worksheet.write_string(row, 4, emp.department_name.as_deref().unwrap_or(""))?;
        worksheet.write_string(row, 5, emp.location.as_deref().unwrap_or(""))?;
        worksheet.write_string(
            row,
            6,
            emp.start_date.map(|d| d.to_string()).unwrap_or_default(),
        )?;
    }

    // Autofilter
    if !employees.is_empty() {
        let last_row = employees.len() as u32;
        worksheet.autofilter(0, 0, last_row, 6)?;
    }

    // Freeze top row
    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    Ok(())
}

/// Generate a timestamped export filename.
pub fn generate_export_filename(prefix: &str) -> String {
    format!("{}_{}.xlsx", prefix, Local::now().format("%Y%m%d_%H%M%S"))
}

/// Ask the user where to save an export.
pub fn prompt_export_path(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter("Excel", &["xlsx"])
        .save_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_export_filename() {
        let name = generate_export_filename("employees");
        assert!(name.starts_with("employees_"));
        assert!(name.ends_with(".xlsx"));
    }
}
