//! XLSX encoding of the attendance sheet

use rust_xlsxwriter::{Workbook, Worksheet};

use crate::{ExportResult, ExportTable};

/// Deterministic download name for the generated workbook
pub const XLSX_FILE_NAME: &str = "presence_neo_track.xlsx";

/// Worksheet name
pub const SHEET_NAME: &str = "Suivi Présences";

const NAME_COLUMN_WIDTH: f64 = 25.0;
const GROUP_COLUMN_WIDTH: f64 = 15.0;
const DATE_COLUMN_WIDTH: f64 = 15.0;
const TOTAL_COLUMN_WIDTH: f64 = 15.0;
const RATE_COLUMN_WIDTH: f64 = 10.0;

/// Encode a built table to XLSX bytes
pub fn to_xlsx(table: &ExportTable) -> ExportResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let mut worksheet = Worksheet::new();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in table.headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, header)?;
    }

    for (row_index, row) in table.rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            worksheet.write_string(row_index as u32 + 1, col as u16, cell)?;
        }
    }

    for col in 0..table.headers.len() as u16 {
        let width = match col {
            0 => NAME_COLUMN_WIDTH,
            1 => GROUP_COLUMN_WIDTH,
            c if c == table.headers.len() as u16 - 2 => TOTAL_COLUMN_WIDTH,
            c if c == table.headers.len() as u16 - 1 => RATE_COLUMN_WIDTH,
            _ => DATE_COLUMN_WIDTH,
        };
        worksheet.set_column_width(col, width)?;
    }

    workbook.push_worksheet(worksheet);
    Ok(workbook.save_to_buffer()?)
}
