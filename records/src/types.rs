//! Wire DTOs mirroring the school backend's JSON responses.
//!
//! DESIGN
//! ======
//! These types follow the backend's field names (camelCase, Mongo-style
//! `_id`) so serde round-trips stay lossless. The client only holds read
//! projections and write payloads; nothing here enforces domain invariants.
//!
//! The backend is loosely typed, so integer fields go through
//! [`deserialize_u32_from_number`] which also accepts `2.0` and `null`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// CLASS-RANGE BUCKETS
// =============================================================================

/// One of the three fixed grade bands classes are counted under.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClassRange {
    #[default]
    #[serde(rename = "3-8")]
    ThreeToEight,
    #[serde(rename = "9-10")]
    NineToTen,
    #[serde(rename = "11-12")]
    ElevenToTwelve,
}

impl ClassRange {
    /// All buckets in display order.
    pub const ALL: [Self; 3] = [Self::ThreeToEight, Self::NineToTen, Self::ElevenToTwelve];

    /// Wire label, e.g. `"9-10"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ThreeToEight => "3-8",
            Self::NineToTen => "9-10",
            Self::ElevenToTwelve => "11-12",
        }
    }

    /// Parse a wire label back into a bucket.
    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.label() == raw.trim())
    }
}

impl fmt::Display for ClassRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-bucket class counts for one day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCount {
    #[serde(rename = "3-8", default, deserialize_with = "deserialize_u32_from_number")]
    pub three_to_eight: u32,
    #[serde(rename = "9-10", default, deserialize_with = "deserialize_u32_from_number")]
    pub nine_to_ten: u32,
    #[serde(rename = "11-12", default, deserialize_with = "deserialize_u32_from_number")]
    pub eleven_to_twelve: u32,
}

impl ClassCount {
    /// Count for a single bucket.
    #[must_use]
    pub fn get(&self, range: ClassRange) -> u32 {
        match range {
            ClassRange::ThreeToEight => self.three_to_eight,
            ClassRange::NineToTen => self.nine_to_ten,
            ClassRange::ElevenToTwelve => self.eleven_to_twelve,
        }
    }

    /// Overwrite the count for a single bucket.
    pub fn set(&mut self, range: ClassRange, value: u32) {
        match range {
            ClassRange::ThreeToEight => self.three_to_eight = value,
            ClassRange::NineToTen => self.nine_to_ten = value,
            ClassRange::ElevenToTwelve => self.eleven_to_twelve = value,
        }
    }

    /// True when every bucket is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.three_to_eight == 0 && self.nine_to_ten == 0 && self.eleven_to_twelve == 0
    }
}

/// Backend-computed monthly totals, per bucket plus a combined total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketTotals {
    #[serde(rename = "3-8", default)]
    pub three_to_eight: f64,
    #[serde(rename = "9-10", default)]
    pub nine_to_ten: f64,
    #[serde(rename = "11-12", default)]
    pub eleven_to_twelve: f64,
    #[serde(default)]
    pub total: f64,
}

impl BucketTotals {
    /// Total for a single bucket.
    #[must_use]
    pub fn get(&self, range: ClassRange) -> f64 {
        match range {
            ClassRange::ThreeToEight => self.three_to_eight,
            ClassRange::NineToTen => self.nine_to_ten,
            ClassRange::ElevenToTwelve => self.eleven_to_twelve,
        }
    }
}

// =============================================================================
// PEOPLE
// =============================================================================

/// A student as listed by `/students`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub class_level: u32,
    #[serde(default)]
    pub roll: Option<String>,
    #[serde(default)]
    pub guardian_name: Option<String>,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub admission_date: Option<String>,
    #[serde(default)]
    pub monthly_fee: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Role an employee record is filed under.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeRole {
    #[default]
    Employee,
    Teacher,
    Director,
}

impl EmployeeRole {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Teacher => "Teacher",
            Self::Director => "Director",
        }
    }
}

/// How an employee is paid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    Monthly,
    PerClass,
}

impl PaymentMethod {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::PerClass => "PerClass",
        }
    }
}

/// Per-class rate for one bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassPayment {
    pub class_range: ClassRange,
    pub amount: f64,
}

/// Education block of an employee record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub is_currently_studying: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admission_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passing_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cgpa: Option<f64>,
}

/// An employee, teacher, or director record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub role: EmployeeRole,
    #[serde(default)]
    pub join_date: Option<String>,
    #[serde(default)]
    pub education: Education,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub payment_per_month: Option<f64>,
    #[serde(default)]
    pub per_class_payments: Vec<ClassPayment>,
}

/// Minimal director projection from `/directors`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Director {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Reference to a person embedded in another record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonRef {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

// =============================================================================
// ATTENDANCE / MONEY
// =============================================================================

/// Whether an attendance row belongs to a student or a staff member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonKind {
    #[default]
    Student,
    Employee,
}

/// Attendance mark for one person on one day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
    Late,
    Leave,
}

impl AttendanceStatus {
    pub const ALL: [Self; 4] = [Self::Present, Self::Absent, Self::Late, Self::Leave];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Late => "Late",
            Self::Leave => "Leave",
        }
    }

    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label().eq_ignore_ascii_case(raw.trim()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub person: PersonRef,
    #[serde(default)]
    pub person_kind: PersonKind,
    pub date: String,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    pub amount: f64,
    pub date: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub source: String,
    pub amount: f64,
    pub date: String,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub received_by: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

// =============================================================================
// CLASS COUNTS / TIMING
// =============================================================================

/// A class covered on behalf of another teacher.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyClass {
    pub class_range: ClassRange,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub count: u32,
    #[serde(default)]
    pub covered_for: String,
}

/// One day's class-count entry for one teacher.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassCountRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub teacher: PersonRef,
    pub date: String,
    #[serde(default)]
    pub class_count: ClassCount,
    #[serde(default)]
    pub proxy_classes: Vec<ProxyClass>,
}

/// One sparse detail entry inside a monthly class-count record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassCountDetail {
    /// ISO date or datetime string; only the part before `T` is compared.
    pub date: String,
    #[serde(default)]
    pub class_count: ClassCount,
}

/// Element of the `/monthly-class-count` response: one teacher's month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeClassCount {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    pub employee: PersonRef,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub class_count_details: Vec<ClassCountDetail>,
    #[serde(default)]
    pub total_class_taken_this_month_so_far: BucketTotals,
    #[serde(default)]
    pub total_income_this_month_so_far: BucketTotals,
}

/// A single in/out slot, `HH:MM` on both ends.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingSlot {
    pub in_time: String,
    pub out_time: String,
}

/// A director's regular presence timings for one day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorTiming {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub director: PersonRef,
    pub date: String,
    #[serde(default)]
    pub timings: Vec<TimingSlot>,
}

// =============================================================================
// AUTH / BULK
// =============================================================================

/// The signed-in user as echoed by login/register.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Token pair returned by `/auth/login` and `/auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// One id the backend refused to delete.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkFailure {
    pub id: String,
    #[serde(default)]
    pub message: String,
}

/// Per-id outcome of a bulk delete.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkDeleteResponse {
    #[serde(default, alias = "success", alias = "deleted")]
    pub succeeded: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_bulk_failures")]
    pub failed: Vec<BulkFailure>,
}

// =============================================================================
// DESERIALIZERS
// =============================================================================

fn default_true() -> bool {
    true
}

/// Accept `3`, `3.0`, or `null` (as zero) for a non-negative count.
fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return u32::try_from(int).map_err(|_| D::Error::custom(format!("value {int} out of range for u32")));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= f64::from(u32::MAX)
            {
                return Ok(float as u32);
            }
            Err(D::Error::custom("expected non-negative integer-compatible number"))
        }
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| D::Error::custom(format!("expected count, got {raw:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}

/// Failures arrive either as `[{id, message}]` or as bare `[id]`.
fn deserialize_bulk_failures<'de, D>(deserializer: D) -> Result<Vec<BulkFailure>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Entry {
        Bare(String),
        Full(BulkFailure),
    }

    let entries = Vec::<Entry>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            Entry::Bare(id) => BulkFailure { id, message: String::new() },
            Entry::Full(failure) => failure,
        })
        .collect())
}
