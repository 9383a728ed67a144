//! Answer summary shown before submission

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::engine::{AnswerSet, AnswerValue, Question};

/// Table of every question with its current answer
#[derive(Debug)]
pub struct AnswerSummary<'a> {
    questions: &'a [Question],
    answers: &'a AnswerSet,
}

impl<'a> AnswerSummary<'a> {
    pub fn new(questions: &'a [Question], answers: &'a AnswerSet) -> Self {
        Self { questions, answers }
    }

    /// Number of questions with a usable answer
    pub fn answered(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| self.answers.is_answered(q))
            .count()
    }

    pub fn render(&self) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Question").add_attribute(Attribute::Bold),
            Cell::new("Answer").add_attribute(Attribute::Bold),
        ]);

        for question in self.questions {
            let answer = match self.answers.get(&question.id) {
                Some(AnswerValue::One(s)) if !s.trim().is_empty() => Cell::new(s),
                Some(AnswerValue::Many(set)) if !set.is_empty() => {
                    Cell::new(set.iter().collect::<Vec<_>>().join(", "))
                }
                _ if question.required => Cell::new("(required)").fg(Color::Red),
                _ => Cell::new("(skipped)").fg(Color::DarkGrey),
            };
            table.add_row(vec![Cell::new(&question.prompt), answer]);
        }

        let mut out = String::new();
        // Indent the table
        for line in table.to_string().lines() {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {} {}",
            style("📋").cyan(),
            style("YOUR ANSWERS").white().bold(),
            style(format!("({}/{})", self.answered(), self.questions.len())).dim()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();
        print!("{}", self.render());
    }
}
