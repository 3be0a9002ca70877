//! Backend endpoint paths.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both the browser fetch layer and the CLI join these paths onto the
//! configured base URL, so path spelling lives in exactly one place.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

/// Collection resources exposed by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Students,
    Employees,
    Teachers,
    Directors,
    Attendance,
    Expenses,
    Earnings,
    ClassCount,
    MonthlyClassCount,
    ManagementTiming,
}

impl Resource {
    pub const ALL: [Self; 10] = [
        Self::Students,
        Self::Employees,
        Self::Teachers,
        Self::Directors,
        Self::Attendance,
        Self::Expenses,
        Self::Earnings,
        Self::ClassCount,
        Self::MonthlyClassCount,
        Self::ManagementTiming,
    ];

    /// Collection path, e.g. `/students`.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Students => "/students",
            Self::Employees => "/employees",
            Self::Teachers => "/teachers",
            Self::Directors => "/directors",
            Self::Attendance => "/attendance",
            Self::Expenses => "/expenses",
            Self::Earnings => "/earnings",
            Self::ClassCount => "/class-count",
            Self::MonthlyClassCount => "/monthly-class-count",
            Self::ManagementTiming => "/management-regular-timing",
        }
    }

    /// Short name used by the CLI (`students`, `class-count`, ...).
    #[must_use]
    pub fn slug(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Look a resource up by its CLI slug.
    #[must_use]
    pub fn from_slug(raw: &str) -> Option<Self> {
        let raw = raw.trim().trim_start_matches('/');
        Self::ALL.into_iter().find(|resource| resource.slug() == raw)
    }

    /// Item path, e.g. `/students/abc`.
    #[must_use]
    pub fn item(self, id: &str) -> String {
        format!("{}/{}", self.path(), crate::escape::path_segment(id))
    }

    /// Bulk-delete path; only people collections support it.
    #[must_use]
    pub fn bulk_delete(self) -> Option<String> {
        match self {
            Self::Students | Self::Employees | Self::Teachers => Some(format!("{}/bulk-delete", self.path())),
            _ => None,
        }
    }
}

pub const LOGIN: &str = "/auth/login";
pub const REGISTER: &str = "/auth/register";

/// `/expenses/monthly` for a zero-based month.
#[must_use]
pub fn monthly_expenses(month0: u32, year: i32) -> String {
    format!("/expenses/monthly?month={}&year={year}", month0 + 1)
}

/// `/monthly-class-count` filtered to one month.
#[must_use]
pub fn monthly_class_count(month0: u32, year: i32) -> String {
    format!("{}?month={}&year={year}", Resource::MonthlyClassCount.path(), month0 + 1)
}

/// `/class-count` day entries, optionally for one teacher.
#[must_use]
pub fn class_count_records(teacher_id: Option<&str>, month0: u32, year: i32) -> String {
    let mut path = format!("{}?month={}&year={year}", Resource::ClassCount.path(), month0 + 1);
    if let Some(id) = teacher_id.filter(|id| !id.trim().is_empty()) {
        path.push_str("&teacher=");
        path.push_str(&crate::escape::path_segment(id.trim()));
    }
    path
}

/// Join a base URL and a path without doubling or dropping the slash.
#[must_use]
pub fn join(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}
