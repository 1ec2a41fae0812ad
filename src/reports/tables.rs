use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use fontaine::cohort::{CohortReport, CohortStat, RelativeStyle};
use fontaine::player::PlayerReport;
use fontaine::scorer::types::{Color as Tag, TextWeight, Tooltip};
use fontaine::scorer::{ArtifactRating, Slot};
use strum::IntoEnumIterator;

fn term_color(tag: Tag) -> Option<Color> {
    match tag {
        Tag::White => Some(Color::White),
        Tag::Black | Tag::Transparent => None,
        Tag::Red200 | Tag::Red700 => Some(Color::Red),
        Tag::Red600 => Some(Color::DarkRed),
        Tag::Green200 | Tag::Green700 => Some(Color::Green),
        Tag::Green600 => Some(Color::DarkGreen),
        Tag::Indigo600 => Some(Color::Blue),
    }
}

fn styled(mut cell: Cell, fg: Tag, bg: Option<Tag>, weight: TextWeight) -> Cell {
    if let Some(c) = term_color(fg) {
        cell = cell.fg(c);
    }
    if let Some(c) = bg.and_then(term_color) {
        cell = cell.bg(c);
    }
    if weight == TextWeight::Bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

fn rating_cell(rating: &ArtifactRating) -> Cell {
    let text = format!("{} {} ({:.1})", rating.emoji, rating.label, rating.value);
    styled(
        Cell::new(text),
        rating.text_color,
        Some(rating.background_color),
        TextWeight::Normal,
    )
}

fn tooltip_cell(tooltip: &Tooltip) -> Cell {
    styled(
        Cell::new(format!("{:.1}", tooltip.value)).set_alignment(CellAlignment::Right),
        tooltip.text_color,
        None,
        tooltip.text_weight,
    )
}

pub fn player(report: &PlayerReport) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        Cell::new("Character").add_attribute(Attribute::Bold),
        Cell::new("Progress").fg(Color::Blue),
    ];
    header.extend(Slot::iter().map(|s| Cell::new(s.to_string())));
    table.add_row(header);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for character in &report.characters {
        let mut row = vec![
            Cell::new(&character.name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.0}%", character.progress.bucketed)).fg(Color::Blue),
        ];
        for slot in Slot::iter() {
            match character.artifacts.iter().find(|a| a.slot == slot) {
                Some(a) => row.push(rating_cell(&a.rating)),
                None => row.push(Cell::new("-").set_alignment(CellAlignment::Center)),
            }
        }
        table.add_row(row);
    }
    println!("\n{}", table);
}

pub fn breakdown(report: &PlayerReport) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Character").add_attribute(Attribute::Bold),
        Cell::new("Slot"),
        Cell::new("Substats"),
        Cell::new("Rolls"),
        Cell::new("Crit Value"),
        Cell::new("CV"),
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new("Notes"),
    ]);

    for character in &report.characters {
        for a in &character.artifacts {
            let mut row = vec![
                Cell::new(&character.name).add_attribute(Attribute::Bold),
                Cell::new(a.slot.to_string()),
            ];
            row.extend(a.rating.tooltips.iter().map(tooltip_cell));
            row.push(
                Cell::new(format!("{:.1}", a.breakdown.crit_value()))
                    .set_alignment(CellAlignment::Right),
            );
            row.push(
                Cell::new(format!("{:.1}", a.score))
                    .set_alignment(CellAlignment::Right)
                    .add_attribute(Attribute::Bold),
            );
            let notes: Vec<&str> = a.rating.tooltips.iter().map(|t| t.text.as_str()).collect();
            row.push(Cell::new(notes.join(", ")));
            table.add_row(row);
        }
    }
    println!("\n{}", table);
}

pub fn cohort(report: &CohortReport) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        Cell::new("#"),
        Cell::new("Owner").add_attribute(Attribute::Bold),
        Cell::new("UID"),
    ];
    header.extend(CohortStat::iter().map(|s| Cell::new(s.to_string())));
    table.add_row(header);

    for i in 3..3 + CohortStat::iter().count() {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for entry in &report.characters {
        let mut row = vec![
            Cell::new(entry.rank),
            Cell::new(&entry.bundle.owner.nickname).add_attribute(Attribute::Bold),
            Cell::new(&entry.bundle.owner.uid),
        ];
        for stat in CohortStat::iter() {
            let value = stat.value(&entry.bundle);
            let cell = match stat {
                CohortStat::Hp | CohortStat::Atk | CohortStat::Def | CohortStat::Em => {
                    Cell::new(format!("{:.0}", value))
                }
                _ => Cell::new(format!("{:.1}", value)),
            };
            let cell = match entry.styles.get(&stat) {
                Some(RelativeStyle::Below) => cell.fg(Color::Red),
                Some(RelativeStyle::Above) => cell.fg(Color::Green),
                _ => cell,
            };
            row.push(cell);
        }
        table.add_row(row);
    }
    println!("\n{}", table);

    let mut legend = Table::new();
    legend.load_preset(ASCII_FULL);
    legend.add_row(vec![Cell::new("Stat"), Cell::new("P25"), Cell::new("P75")]);
    for (stat, q) in &report.quartiles {
        legend.add_row(vec![
            Cell::new(stat.to_string()),
            Cell::new(format!("{:.1}", q.p25)).fg(Color::Red),
            Cell::new(format!("{:.1}", q.p75)).fg(Color::Green),
        ]);
    }
    println!("{}", legend);
}
