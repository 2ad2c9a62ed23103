//! Terminal output: the subnet table and its summary header.

use crate::models::{AddressCount, SubnetRecord};
use crate::processing::Summary;
use colored::Colorize;
use itertools::Itertools;

/// Right-align a value in a field of at least `width` characters.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:>width$}")
}

/// Group digits in threes: `1234567` -> `1,234,567`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let head = digits.len() % 3;
    let mut groups: Vec<&str> = Vec::new();
    if head > 0 {
        groups.push(&digits[..head]);
    }
    groups.extend(
        digits.as_bytes()[head..]
            .chunks(3)
            .map(|c| std::str::from_utf8(c).unwrap_or_default()),
    );
    groups.join(",")
}

/// Address count as shown to a user.
pub fn display_count(count: &AddressCount) -> String {
    match count {
        AddressCount::Exact(n) => group_thousands(*n),
        AddressCount::PowerOfTwo(_) => count.to_string(),
    }
}

/// Summary lines followed by a numbered table of subnets.
pub fn render_table(summary: &Summary, subnets: &[SubnetRecord]) -> String {
    let headers = ["#", "Network", "Start IP", "End IP", "Addresses"];
    let rows: Vec<[String; 5]> = subnets
        .iter()
        .enumerate()
        .map(|(i, s)| {
            [
                (i + 1).to_string(),
                s.network.clone(),
                s.start_ip.clone(),
                s.end_ip.clone(),
                display_count(&s.address_count),
            ]
        })
        .collect();

    let mut widths = headers.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n{} {}\n{} {}\n\n",
        "Base network:".bold(),
        summary.base_cidr,
        "Subnets:".bold(),
        summary.subnet_count,
        "Total addresses:".bold(),
        display_count(&summary.total_addresses),
    ));

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(h, &w)| format!("{h:<w$}"))
        .join(" | ");
    out.push_str(&format!("{}\n", header_line.cyan()));
    out.push_str(&format!(
        "{}\n",
        widths.iter().map(|w| "-".repeat(*w)).join("-+-")
    ));

    for row in &rows {
        let line = row
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(col, (cell, &w))| match col {
                0 | 4 => format_field(cell, w),
                _ => format!("{cell:<w$}"),
            })
            .join(" | ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}
