use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel};
use roster::model::StudentRecord;
use unicode_width::UnicodeWidthStr;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// One row per student, columns padded to the widest cell.
///
/// Padding is computed with `unicode-width` and applied before coloring;
/// format-width specifiers don't know about ANSI escapes.
pub(crate) fn print_roster(students: &[StudentRecord]) {
    if students.is_empty() {
        println!("No students found.");
        return;
    }

    let name_w = column_width(students.iter().map(|s| s.name.as_str()), "Name");
    let class_w = column_width(students.iter().map(|s| s.class.as_str()), "Class");

    let header = format!(
        "{:>4}  {:<name_w$}  {:>3}  {:<class_w$}  {}",
        "Id", "Name", "Age", "Class", "Interests"
    );
    println!("{}", header.bold());

    for s in students {
        let name_pad = " ".repeat(name_w.saturating_sub(s.name.width()));
        let class_pad = " ".repeat(class_w.saturating_sub(s.class.width()));
        println!(
            "{}  {}{}  {:>3}  {}{}  {}",
            format!("{:>4}", s.id).yellow(),
            s.name,
            name_pad,
            s.age,
            s.class,
            class_pad,
            s.interests.dimmed(),
        );
    }
}

pub(crate) fn print_student_card(s: &StudentRecord) {
    println!("{} {}", format!("#{}", s.id).yellow(), s.name.bold());
    println!("--------------------------------");
    println!("Age:       {}", s.age);
    println!("Class:     {}", s.class);
    println!("Interests: {}", s.interests);
    println!("Added:     {}", s.date_added);
    if s.last_updated != s.date_added {
        println!("Updated:   {}", s.last_updated);
    }
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|v| v.width())
        .chain(std::iter::once(header.width()))
        .max()
        .unwrap_or(0)
}
