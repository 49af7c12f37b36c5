//! Table rendering for the terminal front end.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use regform_core::{FormState, LocationTable};
use regform_model::Field;
use regform_validate::ValidationReport;

/// Render options taken from the display settings.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub mask_password: bool,
}

/// The form as a table: one row per visible field.
pub fn form_table(state: &FormState, options: RenderOptions) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Options"),
        header_cell("Errors"),
    ]);
    apply_form_table_style(&mut table);

    for field in Field::ALL {
        if !state.is_visible(field) {
            continue;
        }
        table.add_row(vec![
            label_cell(field),
            value_cell(state, field, options),
            options_cell(state, field),
            errors_cell(state.errors_for(field)),
        ]);
    }
    table
}

/// One line describing the location toggle, shown above the form table.
pub fn toggle_line(state: &FormState) -> String {
    let mark = if state.show_location { "x" } else { " " };
    format!("[{mark}] Temporary Address (toggle to show country/state/city/postal code)")
}

/// Issues of a validation report, one row per issue.
pub fn issue_table(report: &ValidationReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Category"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for issue in &report.issues {
        table.add_row(vec![
            Cell::new(issue.field.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(issue.category().label()),
            Cell::new(&issue.message).fg(Color::Red),
        ]);
    }
    table
}

/// The location lookup table, one row per state.
pub fn location_table(locations: &LocationTable) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Country"),
        header_cell("State"),
        header_cell("Cities"),
    ]);
    apply_table_style(&mut table);
    for country in locations.entries() {
        for (index, state) in country.states.iter().enumerate() {
            let country_cell = if index == 0 {
                Cell::new(country.name)
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold)
            } else {
                dim_cell("")
            };
            table.add_row(vec![
                country_cell,
                Cell::new(state.name),
                Cell::new(state.cities.join(", ")),
            ]);
        }
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_form_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
        ]);
    }
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Left);
    }
}

fn label_cell(field: Field) -> Cell {
    let label = if field.is_marked_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn value_cell(state: &FormState, field: Field, options: RenderOptions) -> Cell {
    if !state.is_enabled(field) {
        return dim_cell("(disabled)");
    }
    let value = state.values.get(field);
    if value.is_empty() {
        return match field.placeholder() {
            Some(placeholder) => dim_cell(placeholder.trim()),
            None => dim_cell("-"),
        };
    }
    if field == Field::Password && options.mask_password {
        return Cell::new("*".repeat(value.chars().count()));
    }
    Cell::new(value)
}

fn options_cell(state: &FormState, field: Field) -> Cell {
    if !field.is_select() {
        return dim_cell("");
    }
    let options: Vec<&str> = match field {
        Field::Gender => regform_validate::schema::GENDER_CHOICES.to_vec(),
        _ => state.location.options(field),
    };
    if options.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(options.join(", ")).fg(Color::DarkGrey)
    }
}

fn errors_cell(messages: &[String]) -> Cell {
    if messages.is_empty() {
        Cell::new("✓").fg(Color::Green)
    } else {
        Cell::new(messages.join("\n")).fg(Color::Red)
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
