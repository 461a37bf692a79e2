use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;
use sunpanelapp::api::{CmdMessage, CollectionSummary, MessageLevel, SunpanelPaths};
use sunpanelapp::config::SunpanelConfig;
use sunpanelapp::index::DisplayRecord;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const ORDER_WIDTH: usize = 7;
const NAME_WIDTH: usize = 22;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(super) fn print_records(records: &[DisplayRecord]) {
    if records.is_empty() {
        println!("No records found.");
        return;
    }

    for dp in records {
        let idx_str = format!("{:>3}. ", dp.position);
        let idx_width = idx_str.width();
        let available = LINE_WIDTH.saturating_sub(idx_width + ORDER_WIDTH + TIME_WIDTH);

        let label = truncate_to_width(&dp.record.label(), available);
        let padding = available.saturating_sub(label.width());

        let order = format_order(dp.record.order_index);
        let order_colored = if dp.record.order_index.is_some() {
            order.dimmed()
        } else {
            order.yellow()
        };

        println!(
            "{}{}{}{}{}",
            idx_str.yellow(),
            label,
            " ".repeat(padding),
            order_colored,
            format_time_ago(dp.record.updated_at).dimmed()
        );
    }
}

pub(super) fn print_full_records(records: &[DisplayRecord]) {
    for (i, dp) in records.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {}",
            format!("{}.", dp.position).yellow(),
            dp.record.label().bold()
        );
        println!("--------------------------------");
        println!("{:<14}{}", "id".dimmed(), dp.record.id);
        println!(
            "{:<14}{}",
            "order_index".dimmed(),
            dp.record
                .order_index
                .map(|v| v.to_string())
                .unwrap_or_else(|| "(missing)".to_string())
        );
        for (key, value) in &dp.record.fields {
            println!("{:<14}{}", key.dimmed(), format_field(value));
        }
    }
}

pub(super) fn print_collections(summaries: &[CollectionSummary]) {
    for summary in summaries {
        let name = summary.collection.name();
        let padding = NAME_WIDTH.saturating_sub(name.width());
        let health = if summary.healthy {
            "ok".green()
        } else {
            "needs doctor".yellow()
        };
        println!(
            "{}{}{:>5}  {}",
            name,
            " ".repeat(padding),
            summary.records,
            health
        );
    }
}

pub(super) fn print_config(config: &SunpanelConfig, paths: &SunpanelPaths) {
    for (key, value) in config.entries() {
        println!("{} = {}", key, value);
    }
    println!();
    println!("{} {}", "data dir:".dimmed(), paths.data_dir.display());
    match &paths.config_dir {
        Some(dir) => println!("{} {}", "config dir:".dimmed(), dir.display()),
        None => println!("{} (none)", "config dir:".dimmed()),
    }
}

fn format_order(order_index: Option<u32>) -> String {
    let text = match order_index {
        Some(value) => format!("#{}", value),
        None => "#-".to_string(),
    };
    format!("{:>width$}", text, width = ORDER_WIDTH)
}

fn format_field(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
