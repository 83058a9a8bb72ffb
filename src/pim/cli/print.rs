use colored::Colorize;
use pim::api::{CmdMessage, MessageLevel};
use pim::config::PimConfig;
use pim::model::{Note, Record, UpcomingBirthday};
use unicode_width::UnicodeWidthStr;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub fn print_records(records: &[Record]) {
    if records.is_empty() {
        println!("No contacts.");
        return;
    }

    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let mut lines = record.to_string().lines().map(String::from).collect::<Vec<_>>();
        if let Some(first) = lines.first_mut() {
            *first = format!("{}. {}", i + 1, first).bold().to_string();
        }
        for line in lines {
            println!("{}", line);
        }
    }
}

pub fn print_notes(notes: &[Note]) {
    if notes.is_empty() {
        println!("No notes.");
        return;
    }

    for note in notes {
        let tags = if note.tags.is_empty() {
            "—".dimmed().to_string()
        } else {
            note.tags.join(", ").cyan().to_string()
        };
        println!(
            "{} {} {}",
            format!("[{}]", note.id()).yellow(),
            note.text,
            format!("(tags: {})", tags).dimmed()
        );
    }
}

pub fn print_birthdays(birthdays: &[UpcomingBirthday]) {
    let width = birthdays
        .iter()
        .map(|b| b.name.width())
        .max()
        .unwrap_or(0);

    for b in birthdays {
        let padding = width.saturating_sub(b.name.width());
        println!("{}{}  {}", b.name.bold(), " ".repeat(padding), b.birthday);
    }
}

pub fn print_config(config: &PimConfig) {
    for key in pim::config::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}
