//! Plain-text rendering for terminal output.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use records::bulk::Identified;
use records::grid::format_number;
use records::pivot::{MonthPivot, format_cell};
use records::search::{Searchable, filter_items};
use records::types::{
    AttendanceRecord, BucketTotals, ClassCountRecord, ClassRange, Director, DirectorTiming, EarningRecord, Employee,
    ExpenseRecord, Student,
};

/// One-line description of a record for `list` output.
pub trait Summary {
    fn summary(&self) -> String;
}

impl Summary for Student {
    fn summary(&self) -> String {
        format!("{} (class {}) {} fee {}", self.name, self.class_level, self.phone, format_number(self.monthly_fee))
    }
}

impl Summary for Employee {
    fn summary(&self) -> String {
        format!("{} [{}] {}", self.name, self.role.label(), self.phone)
    }
}

impl Summary for Director {
    fn summary(&self) -> String {
        match &self.phone {
            Some(phone) => format!("{} {phone}", self.name),
            None => self.name.clone(),
        }
    }
}

impl Summary for AttendanceRecord {
    fn summary(&self) -> String {
        format!("{} {} {}", records::pivot::date_key(&self.date), self.person.name, self.status.label())
    }
}

impl Summary for ExpenseRecord {
    fn summary(&self) -> String {
        format!("{} {} [{}] {}", records::pivot::date_key(&self.date), self.title, self.category, format_number(self.amount))
    }
}

impl Summary for EarningRecord {
    fn summary(&self) -> String {
        format!("{} {} {}", records::pivot::date_key(&self.date), self.source, format_number(self.amount))
    }
}

impl Summary for ClassCountRecord {
    fn summary(&self) -> String {
        let counts = ClassRange::ALL
            .iter()
            .map(|range| format!("{range}:{}", self.class_count.get(*range)))
            .collect::<Vec<_>>()
            .join(" ");
        format!("{} {} {counts} proxies:{}", records::pivot::date_key(&self.date), self.teacher.name, self.proxy_classes.len())
    }
}

impl Summary for DirectorTiming {
    fn summary(&self) -> String {
        let slots = self
            .timings
            .iter()
            .map(|s| format!("{}-{}", s.in_time, s.out_time))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} {} {slots}", records::pivot::date_key(&self.date), self.director.name)
    }
}

/// `id<TAB>summary` for every item matching `term`.
pub fn summary_lines<T: Searchable + Summary + Identified + Clone>(items: &[T], term: &str) -> Vec<String> {
    filter_items(items, term)
        .iter()
        .map(|item| format!("{}\t{}", item.id(), item.summary()))
        .collect()
}

const DATE_WIDTH: usize = 12;
const CELL_WIDTH: usize = 6;

fn bucket_line(label: &str, totals: &[BucketTotals]) -> String {
    let mut line = format!("{label:<DATE_WIDTH$}");
    for total in totals {
        for range in ClassRange::ALL {
            line.push_str(&format!("{:>CELL_WIDTH$}", format_number(total.get(range))));
        }
    }
    line
}

fn combined_line(label: &str, totals: &[BucketTotals]) -> String {
    let mut line = format!("{label:<DATE_WIDTH$}");
    for total in totals {
        line.push_str(&format!("{:>width$}", format_number(total.total), width = CELL_WIDTH * 3));
    }
    line
}

/// Fixed-width table: a teacher header line, a bucket header line, one line
/// per day, then the four footer lines.
pub fn render_pivot(pivot: &MonthPivot) -> String {
    let mut out = vec![pivot.title()];
    if pivot.is_empty() {
        out.push("no class counts".to_owned());
        return out.join("\n");
    }

    let mut names = " ".repeat(DATE_WIDTH);
    let mut buckets = format!("{:<DATE_WIDTH$}", "Date");
    for column in &pivot.columns {
        let name: String = column.employee_name.chars().take(CELL_WIDTH * 3 - 1).collect();
        names.push_str(&format!("{name:>width$}", width = CELL_WIDTH * 3));
        for range in ClassRange::ALL {
            buckets.push_str(&format!("{:>CELL_WIDTH$}", range.label()));
        }
    }
    out.push(names);
    out.push(buckets);

    for row in &pivot.rows {
        let mut line = format!("{:<DATE_WIDTH$}", row.date);
        for count in &row.cells {
            for range in ClassRange::ALL {
                line.push_str(&format!("{:>CELL_WIDTH$}", format_cell(count.get(range))));
            }
        }
        out.push(line);
    }

    out.push(bucket_line("Classes", &pivot.footer.classes_taken));
    out.push(combined_line("Total", &pivot.footer.classes_taken));
    out.push(bucket_line("Income", &pivot.footer.income));
    out.push(combined_line("Income tot", &pivot.footer.income));
    out.join("\n")
}
