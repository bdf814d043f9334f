use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use eff_model::{ClassificationOutput, EthnicityOutput};

pub fn print_standardised(pairs: &[(String, String)]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Raw value"), header_cell("Standard value")]);
    apply_table_style(&mut table);
    for (raw, standard) in pairs {
        let standard_cell = if raw.trim() == standard {
            dim_cell(standard)
        } else {
            Cell::new(standard)
        };
        table.add_row(vec![Cell::new(raw), standard_cell]);
    }
    println!("{table}");
}

/// Ranked classifications, then the mapping of the best fit.
pub fn print_classifications(outputs: &[ClassificationOutput]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rank"),
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Values"),
        header_cell("Unmapped"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for (rank, output) in outputs.iter().enumerate() {
        let unmapped = output.data.iter().filter(|row| row.order.is_none()).count();
        table.add_row(vec![
            Cell::new(rank + 1),
            id_cell(&output.classification.id),
            Cell::new(&output.classification.name),
            Cell::new(output.data.len()),
            count_cell(unmapped, Color::Yellow),
        ]);
    }
    println!("{table}");

    if let Some(best) = outputs.first() {
        println!();
        println!("Mapping for {}:", best.classification.id);
        print_mapping(&best.data);
    }
}

fn print_mapping(rows: &[EthnicityOutput]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Raw value"),
        header_cell("Standard"),
        header_cell("Display"),
        header_cell("Parent"),
        header_cell("Order"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    for row in rows {
        let order = match row.order {
            Some(order) => Cell::new(order),
            None => dim_cell("-"),
        };
        let parent = if row.parent == row.display_value {
            dim_cell(&row.parent)
        } else {
            Cell::new(&row.parent)
        };
        table.add_row(vec![
            Cell::new(&row.raw_value),
            Cell::new(&row.standard_value),
            Cell::new(&row.display_value),
            parent,
            order,
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn id_cell(id: &str) -> Cell {
    if id == eff_model::CUSTOM_CLASSIFICATION_ID {
        dim_cell(id)
    } else {
        Cell::new(id)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
