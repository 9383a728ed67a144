//! Roadmap report for the know flow

use std::fmt::Write as _;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::flows::know::Roadmap;

/// Render a roadmap as terminal text
pub fn render_roadmap(roadmap: &Roadmap) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "    {} {}",
        style("🧭").cyan(),
        style(format!("STAGE-WISE ROADMAP FOR {}", roadmap.career.to_uppercase()))
            .white()
            .bold()
    );
    let _ = writeln!(out, "    {}", style("─".repeat(50)).dim());

    bullet_section(&mut out, "Skills to learn", &roadmap.skills_to_learn);

    if !roadmap.courses.is_empty() {
        section_header(&mut out, "Courses (free + paid)");
        for course in &roadmap.courses {
            let _ = writeln!(
                out,
                "        {} {} {}",
                style("•").dim(),
                course.title,
                style(&course.url).cyan().underlined()
            );
        }
    }

    if !roadmap.tools_to_master.is_empty() {
        section_header(&mut out, "Tools to master");
        let _ = writeln!(
            out,
            "        {}",
            roadmap
                .tools_to_master
                .iter()
                .map(|t| format!("[{}]", style(t).blue()))
                .collect::<Vec<_>>()
                .join(" ")
        );
    }

    bullet_section(&mut out, "Ideal side projects / activities", &roadmap.side_projects);
    bullet_section(&mut out, "Internships to target", &roadmap.internships);
    bullet_section(
        &mut out,
        "Certifications (optional but helpful)",
        &roadmap.certifications,
    );
    bullet_section(&mut out, "Mistakes to avoid", &roadmap.mistakes_to_avoid);

    if !roadmap.timeline.is_empty() {
        section_header(&mut out, "Realistic timeline");
        for stage in &roadmap.timeline {
            let _ = writeln!(out, "        {}", style(&stage.stage).bold());
            for focus in &stage.focus {
                let _ = writeln!(out, "          {} {}", style("•").dim(), focus);
            }
        }
    }

    section_header(&mut out, "Expected salary ranges");
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Level").add_attribute(Attribute::Bold),
        Cell::new("Range").add_attribute(Attribute::Bold),
    ]);
    let salary = &roadmap.salary_ranges;
    table.add_row(vec![Cell::new("Entry"), Cell::new(&salary.entry)]);
    table.add_row(vec![Cell::new("Mid"), Cell::new(&salary.mid)]);
    table.add_row(vec![
        Cell::new("Senior"),
        Cell::new(&salary.senior)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    for line in table.to_string().lines() {
        let _ = writeln!(out, "      {}", line);
    }
    if !salary.note.is_empty() {
        let _ = writeln!(out, "      {}", style(&salary.note).dim());
    }

    bullet_section(&mut out, "How to build a portfolio", &roadmap.portfolio_tips);
    bullet_section(
        &mut out,
        "How to find your first opportunity",
        &roadmap.first_opportunity,
    );

    out
}

/// Print a roadmap to stdout
pub fn display_roadmap(roadmap: &Roadmap) {
    print!("{}", render_roadmap(roadmap));
}

fn section_header(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "      {}:", style(title).yellow());
}

/// Empty sections are left out
fn bullet_section(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    section_header(out, title);
    for item in items {
        let _ = writeln!(out, "        {} {}", style("•").dim(), item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::know::{SalaryRanges, Stage};

    #[test]
    fn renders_sections_and_skips_empty_certifications() {
        let roadmap = Roadmap {
            career: "Data Analyst".to_string(),
            skills_to_learn: vec!["SQL".to_string()],
            timeline: vec![Stage {
                stage: "Months 0-3".to_string(),
                focus: vec!["Excel".to_string()],
            }],
            salary_ranges: SalaryRanges {
                entry: "4-6 LPA".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let text = render_roadmap(&roadmap);
        assert!(text.contains("DATA ANALYST"));
        assert!(text.contains("SQL"));
        assert!(text.contains("Months 0-3"));
        assert!(text.contains("4-6 LPA"));
        assert!(!text.contains("Certifications"));
    }
}
