//! Writing flat builder data as CSV.

use std::io::Write;

use crate::cell::Cell;
use crate::error::Result;

/// Write rows of cells as CSV. Integral numbers are written without a
/// fractional part, so `10.0` becomes `10`.
pub fn write_csv<W: Write>(data: &[Vec<Cell>], writer: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);
    for row in data {
        writer.write_record(row.iter().map(csv_field))?;
    }
    writer.flush()?;
    Ok(())
}

fn csv_field(cell: &Cell) -> String {
    match cell {
        Cell::Number(number) => match number.as_f64() {
            Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() < 1e15 => {
                format!("{value:.0}")
            }
            _ => number.to_string(),
        },
        Cell::Text(text) => text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_rows_with_integral_numbers() {
        let data = vec![
            vec![Cell::from("Ethnicity"), Cell::from("Value")],
            vec![Cell::from("White"), Cell::from(10.0)],
            vec![Cell::from("Black, African"), Cell::from(2.5)],
            vec![Cell::from("Mixed")],
        ];
        let mut out = Vec::new();
        write_csv(&data, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Ethnicity,Value\nWhite,10\n\"Black, African\",2.5\nMixed\n"
        );
    }
}
