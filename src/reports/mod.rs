use chrono::NaiveDate;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;
use skillforge::core_types::Skill;
use skillforge::decor::Season;
use skillforge::geometry::{slot_angle, GeometrySnapshot};
use skillforge::tone::Rgb;

/// One skill's derived geometry, flattened for tables and CSV.
#[derive(Debug, Serialize)]
pub struct GeometryRow {
    pub index: usize,
    pub id: u64,
    pub label: String,
    pub value: u8,
    pub angle_deg: f64,
    pub vertex_x: f64,
    pub vertex_y: f64,
    pub label_x: f64,
    pub label_y: f64,
    pub anchor: String,
}

pub fn geometry_rows(skills: &[Skill], snapshot: &GeometrySnapshot) -> Vec<GeometryRow> {
    skills
        .iter()
        .zip(&snapshot.vertices)
        .zip(&snapshot.labels)
        .enumerate()
        .map(|(i, ((skill, vertex), label))| {
            let at = label.position();
            GeometryRow {
                index: i,
                id: skill.id.0,
                label: skill.label.clone(),
                value: skill.value,
                angle_deg: slot_angle(i, skills.len()).unwrap_or(0.0).to_degrees(),
                vertex_x: vertex.x,
                vertex_y: vertex.y,
                label_x: at.x,
                label_y: at.y,
                anchor: label.anchor.to_string(),
            }
        })
        .collect()
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_geometry(rows: &[GeometryRow], snapshot: &GeometrySnapshot) {
    let mut table = new_table();

    table.add_row(vec![
        Cell::new("#"),
        Cell::new("Skill").add_attribute(Attribute::Bold),
        Cell::new("Value").fg(Color::Cyan),
        Cell::new("Angle"),
        Cell::new("Vertex X"),
        Cell::new("Vertex Y"),
        Cell::new("Label X"),
        Cell::new("Label Y"),
        Cell::new("Anchor"),
    ]);

    for i in 2..=7 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for row in rows {
        let label = if row.label.is_empty() {
            "(unnamed)".to_string()
        } else {
            row.label.clone()
        };
        table.add_row(vec![
            Cell::new(row.index),
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(row.value).fg(Color::Cyan),
            Cell::new(format!("{:.1}°", row.angle_deg)),
            Cell::new(format!("{:.1}", row.vertex_x)),
            Cell::new(format!("{:.1}", row.vertex_y)),
            Cell::new(format!("{:.1}", row.label_x)),
            Cell::new(format!("{:.1}", row.label_y)),
            Cell::new(&row.anchor),
        ]);
    }

    println!(
        "\n=== SKILL POLYGON (guide r={}, labels r={}) ===",
        snapshot.guide_radius, snapshot.label_radius
    );
    println!("{}", table);
}

pub fn print_tone(contrast: f64, slider: f64, noise: Option<(f64, f64)>, accents: &[Rgb]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Control").add_attribute(Attribute::Bold),
        Cell::new("Stored"),
        Cell::new("Slider"),
    ]);
    table.add_row(vec![
        Cell::new("Contrast"),
        Cell::new(format!("{:.3}", contrast)),
        Cell::new(format!("{:.1}", slider)),
    ]);
    if let Some((stored, pos)) = noise {
        table.add_row(vec![
            Cell::new("Noise"),
            Cell::new(format!("{:.3}", stored)),
            Cell::new(format!("{:.1}", pos)),
        ]);
    }
    println!("{}", table);

    let swatches: Vec<String> = accents.iter().map(|c| c.to_string()).collect();
    println!("Accents: {}", swatches.join(" "));
}

pub fn print_season(date: NaiveDate, title: Season, icon: Season, favicon: &str) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Date").add_attribute(Attribute::Bold),
        Cell::new("Title season"),
        Cell::new("Icon season"),
        Cell::new("Favicon"),
    ]);
    table.add_row(vec![
        Cell::new(date),
        Cell::new(title).fg(Color::Green),
        Cell::new(icon).fg(Color::Green),
        Cell::new(favicon),
    ]);
    println!("{}", table);
}
