//! Career-match report for the discover flow

use std::fmt::Write as _;

use console::style;

use crate::flows::DiscoveryMatch;

pub fn render_discovery(matched: &DiscoveryMatch) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "    {} {}",
        style("✨").cyan(),
        style("YOUR VIBE MATCH").white().bold()
    );
    let _ = writeln!(out, "    {}", style("─".repeat(50)).dim());

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "      {}",
        style("Here are the careers that fit you best:").yellow()
    );
    let _ = writeln!(out, "        {}", tags(&matched.best_fit_careers, true));

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "      {}",
        style("Here are careers you should avoid:").yellow()
    );
    let _ = writeln!(out, "        {}", tags(&matched.careers_to_avoid, false));

    for (prompt, hint) in [
        (
            &matched.ask_salary_prompt,
            "Pick a role with `pathwise know` to see salary bands.",
        ),
        (
            &matched.ask_full_roadmap_prompt,
            "Run `pathwise know` to generate a full roadmap.",
        ),
        (
            &matched.ask_counselor_prompt,
            "Talking to a counselor is coming soon.",
        ),
    ] {
        if prompt.is_empty() {
            continue;
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "      {}", style(prompt).yellow());
        let _ = writeln!(out, "        {}", style(hint).dim());
    }

    if !matched.courses_to_start_now.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "      {}",
            style("Here are courses you can start right now:").yellow()
        );
        for (role, courses) in &matched.courses_to_start_now {
            let _ = writeln!(out, "        {}", style(role).bold());
            for course in courses {
                let _ = writeln!(
                    out,
                    "          {} {} {}",
                    style("•").dim(),
                    course.title,
                    style(&course.url).cyan().underlined()
                );
            }
        }
    }

    out
}

pub fn display_discovery(matched: &DiscoveryMatch) {
    print!("{}", render_discovery(matched));
}

fn tags(items: &[String], good: bool) -> String {
    if items.is_empty() {
        return style("(none)").dim().to_string();
    }
    items
        .iter()
        .map(|item| {
            let tag = format!("[{}]", item);
            if good {
                style(tag).green().to_string()
            } else {
                style(tag).red().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
