//! Form inputs and their validated write payloads.
//!
//! DESIGN
//! ======
//! Each form struct holds raw strings exactly as the user typed them, so a
//! failed submit never loses input. `validate()` returns either the typed
//! payload the backend expects or a [`FieldErrors`] map keyed by wire field
//! name. Conditional rules (payment method, studying status, fee source) are
//! declared next to the fields they guard.
//!
//! Repeatable sub-records use `<group>.<index>.<field>` error keys.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use serde::Serialize;

use crate::repeat::RepeatGroup;
use crate::types::{
    AttendanceStatus, ClassCount, ClassPayment, ClassRange, DirectorTiming, Education, Employee, EmployeeRole,
    PaymentMethod, PersonKind, ProxyClass, Student, TimingSlot,
};
use crate::validate::{self, FieldErrors};

const MIN_YEAR: i32 = 1950;
const MAX_YEAR: i32 = 2100;
const MAX_DAILY_CLASSES: i64 = 20;

fn count(raw: &str, min: i64, max: i64) -> Result<u32, String> {
    validate::integer(raw, min, max).and_then(|n| u32::try_from(n).map_err(|_| format!("Must be between {min} and {max}")))
}

// =============================================================================
// STUDENT
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentForm {
    pub name: String,
    pub class_level: String,
    pub roll: String,
    pub guardian_name: String,
    pub phone: String,
    pub email: String,
    pub admission_date: String,
    pub monthly_fee: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPayload {
    pub name: String,
    pub class_level: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll: Option<String>,
    pub guardian_name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub admission_date: String,
    pub monthly_fee: f64,
}

impl StudentForm {
    /// Prefill from an existing record for editing.
    #[must_use]
    pub fn from_student(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            class_level: student.class_level.to_string(),
            roll: student.roll.clone().unwrap_or_default(),
            guardian_name: student.guardian_name.clone().unwrap_or_default(),
            phone: student.phone.clone(),
            email: student.email.clone().unwrap_or_default(),
            admission_date: student
                .admission_date
                .as_deref()
                .map(crate::pivot::date_key)
                .unwrap_or_default()
                .to_owned(),
            monthly_fee: crate::grid::format_number(student.monthly_fee),
        }
    }

    /// # Errors
    ///
    /// Returns every failing field.
    pub fn validate(&self) -> Result<StudentPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = errors.check("name", validate::text(&self.name, 2, 80));
        let class_level = errors.check("classLevel", count(&self.class_level, 3, 12));
        let roll = errors.check("roll", validate::optional_text(&self.roll, 20));
        let guardian_name = errors.check("guardianName", validate::text(&self.guardian_name, 2, 80));
        let phone = errors.check("phone", validate::phone(&self.phone));
        let email = errors.check("email", validate::optional_email(&self.email));
        let admission_date = errors.check("admissionDate", validate::date(&self.admission_date));
        let monthly_fee = errors.check("monthlyFee", validate::number(&self.monthly_fee, 0.0, 100_000.0));

        let (
            Some(name),
            Some(class_level),
            Some(roll),
            Some(guardian_name),
            Some(phone),
            Some(email),
            Some(admission_date),
            Some(monthly_fee),
        ) = (name, class_level, roll, guardian_name, phone, email, admission_date, monthly_fee)
        else {
            return Err(errors);
        };
        Ok(StudentPayload {
            name,
            class_level,
            roll,
            guardian_name,
            phone,
            email,
            admission_date: admission_date.to_string(),
            monthly_fee,
        })
    }
}

// =============================================================================
// EMPLOYEE / TEACHER (multi-step)
// =============================================================================

/// Steps of the employee/teacher wizard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmployeeStep {
    #[default]
    Personal,
    Education,
    Payment,
    Review,
}

impl EmployeeStep {
    pub const ALL: [Self; 4] = [Self::Personal, Self::Education, Self::Payment, Self::Review];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Education => "Education",
            Self::Payment => "Payment",
            Self::Review => "Review",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL.get(self.index() + 1).copied().unwrap_or(self)
    }

    #[must_use]
    pub fn prev(self) -> Self {
        self.index().checked_sub(1).and_then(|i| Self::ALL.get(i).copied()).unwrap_or(self)
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self == Self::Review
    }

    /// Error keys owned by this step.
    #[must_use]
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Personal => &["name", "phone", "email", "gender", "designation", "joinDate"],
            Self::Education => &["institution", "subject", "admissionYear", "passingYear", "cgpa"],
            Self::Payment => &["paymentMethod", "paymentPerMonth", "perClassPayments"],
            Self::Review => &[],
        }
    }
}

/// One per-class payment row as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassPaymentInput {
    pub class_range: String,
    pub amount: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmployeeForm {
    pub role: EmployeeRole,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub gender: String,
    pub designation: String,
    pub join_date: String,
    pub institution: String,
    pub subject: String,
    pub is_currently_studying: bool,
    pub admission_year: String,
    pub passing_year: String,
    pub cgpa: String,
    pub payment_method: PaymentMethod,
    pub payment_per_month: String,
    pub per_class_payments: RepeatGroup<ClassPaymentInput>,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self::for_role(EmployeeRole::Employee)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    pub role: EmployeeRole,
    pub join_date: String,
    pub education: Education,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_per_month: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub per_class_payments: Vec<ClassPayment>,
}

pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

impl EmployeeForm {
    #[must_use]
    pub fn for_role(role: EmployeeRole) -> Self {
        Self {
            role,
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            gender: String::new(),
            designation: String::new(),
            join_date: String::new(),
            institution: String::new(),
            subject: String::new(),
            is_currently_studying: false,
            admission_year: String::new(),
            passing_year: String::new(),
            cgpa: String::new(),
            payment_method: if role == EmployeeRole::Teacher { PaymentMethod::PerClass } else { PaymentMethod::Monthly },
            payment_per_month: String::new(),
            per_class_payments: RepeatGroup::default(),
        }
    }

    /// Prefill from an existing record for editing.
    #[must_use]
    pub fn from_employee(employee: &Employee) -> Self {
        let opt_num = |n: Option<f64>| n.map(crate::grid::format_number).unwrap_or_default();
        let opt_year = |y: Option<i32>| y.map(|y| y.to_string()).unwrap_or_default();
        Self {
            role: employee.role,
            name: employee.name.clone(),
            phone: employee.phone.clone(),
            email: employee.email.clone().unwrap_or_default(),
            gender: employee.gender.clone().unwrap_or_default(),
            designation: employee.designation.clone().unwrap_or_default(),
            join_date: employee
                .join_date
                .as_deref()
                .map(crate::pivot::date_key)
                .unwrap_or_default()
                .to_owned(),
            institution: employee.education.institution.clone(),
            subject: employee.education.subject.clone(),
            is_currently_studying: employee.education.is_currently_studying,
            admission_year: opt_year(employee.education.admission_year),
            passing_year: opt_year(employee.education.passing_year),
            cgpa: opt_num(employee.education.cgpa),
            payment_method: employee.payment_method,
            payment_per_month: opt_num(employee.payment_per_month),
            per_class_payments: RepeatGroup::from_values(
                employee
                    .per_class_payments
                    .iter()
                    .map(|p| ClassPaymentInput {
                        class_range: p.class_range.label().to_owned(),
                        amount: crate::grid::format_number(p.amount),
                    })
                    .collect(),
                ClassPaymentInput::default(),
            ),
        }
    }

    /// Errors belonging to one wizard step; empty means the step may advance.
    #[must_use]
    pub fn validate_step(&self, step: EmployeeStep) -> FieldErrors {
        match self.validate() {
            Ok(_) => FieldErrors::new(),
            Err(errors) => errors.only(step.fields()),
        }
    }

    /// # Errors
    ///
    /// Returns every failing field across all steps.
    pub fn validate(&self) -> Result<EmployeePayload, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = errors.check("name", validate::text(&self.name, 2, 80));
        let phone = errors.check("phone", validate::phone(&self.phone));
        let email = errors.check("email", validate::optional_email(&self.email));
        let gender = errors.check(
            "gender",
            validate::choice(&self.gender, |raw| {
                GENDERS.iter().find(|g| g.eq_ignore_ascii_case(raw.trim())).map(|g| (*g).to_owned())
            }),
        );
        let designation = errors.check("designation", validate::optional_text(&self.designation, 60));
        let join_date = errors.check("joinDate", validate::date(&self.join_date));

        let institution = errors.check("institution", validate::text(&self.institution, 2, 120));
        let subject = errors.check("subject", validate::text(&self.subject, 2, 80));
        let education = if self.is_currently_studying {
            let admission_year = errors.check("admissionYear", validate::year(&self.admission_year, MIN_YEAR, MAX_YEAR));
            admission_year.map(|year| (Some(year), None, None))
        } else {
            let passing_year = errors.check("passingYear", validate::year(&self.passing_year, MIN_YEAR, MAX_YEAR));
            let cgpa = errors.check("cgpa", validate::number(&self.cgpa, 0.0, 5.0));
            passing_year.zip(cgpa).map(|(year, cgpa)| (None, Some(year), Some(cgpa)))
        };

        let payment = match self.payment_method {
            PaymentMethod::Monthly => errors
                .check("paymentPerMonth", validate::amount(&self.payment_per_month))
                .map(|amount| (Some(amount), Vec::new())),
            PaymentMethod::PerClass => self.validate_class_payments(&mut errors).map(|rows| (None, rows)),
        };

        if !errors.is_empty() {
            return Err(errors);
        }
        let (Some(personal), Some(institution), Some(subject), Some(education), Some(payment)) = (
            name.zip(phone).zip(email).zip(gender).zip(designation).zip(join_date),
            institution,
            subject,
            education,
            payment,
        ) else {
            return Err(errors);
        };
        let (((((name, phone), email), gender), designation), join_date) = personal;
        let (admission_year, passing_year, cgpa) = education;
        let (payment_per_month, per_class_payments) = payment;
        Ok(EmployeePayload {
            name,
            phone,
            email,
            gender,
            designation,
            role: self.role,
            join_date: join_date.to_string(),
            education: Education {
                institution,
                subject,
                is_currently_studying: self.is_currently_studying,
                admission_year,
                passing_year,
                cgpa,
            },
            payment_method: self.payment_method,
            payment_per_month,
            per_class_payments,
        })
    }

    fn validate_class_payments(&self, errors: &mut FieldErrors) -> Option<Vec<ClassPayment>> {
        let mut rows = Vec::with_capacity(self.per_class_payments.len());
        let mut ok = true;
        let mut seen = Vec::new();
        for (idx, input) in self.per_class_payments.values().enumerate() {
            let range = errors.check(
                &format!("perClassPayments.{idx}.classRange"),
                validate::choice(&input.class_range, ClassRange::from_label),
            );
            let amount = errors.check(&format!("perClassPayments.{idx}.amount"), validate::amount(&input.amount));
            if let Some(range) = range {
                if seen.contains(&range) {
                    errors.add(&format!("perClassPayments.{idx}.classRange"), "Class range already listed");
                    ok = false;
                }
                seen.push(range);
            }
            match range.zip(amount) {
                Some((class_range, amount)) => rows.push(ClassPayment { class_range, amount }),
                None => ok = false,
            }
        }
        ok.then_some(rows)
    }
}

// =============================================================================
// ATTENDANCE
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttendanceForm {
    pub person_id: String,
    pub person_kind: PersonKind,
    pub date: String,
    pub status: String,
    pub note: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendancePayload {
    pub person_id: String,
    pub person_kind: PersonKind,
    pub date: String,
    pub status: AttendanceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl AttendanceForm {
    /// # Errors
    ///
    /// Returns every failing field.
    pub fn validate(&self) -> Result<AttendancePayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let person_id = errors.check("personId", validate::text(&self.person_id, 1, 64));
        let date = errors.check("date", validate::date(&self.date));
        let status = errors.check("status", validate::choice(&self.status, AttendanceStatus::from_label));
        let note = errors.check("note", validate::optional_text(&self.note, 200));

        let (Some(person_id), Some(date), Some(status), Some(note)) = (person_id, date, status, note) else {
            return Err(errors);
        };
        Ok(AttendancePayload { person_id, person_kind: self.person_kind, date: date.to_string(), status, note })
    }
}

// =============================================================================
// EXPENSE / EARNING
// =============================================================================

pub const EXPENSE_CATEGORIES: [&str; 6] = ["Salary", "Rent", "Utilities", "Supplies", "Maintenance", "Other"];
pub const EARNING_SOURCES: [&str; 4] = ["Student Fee", "Admission Fee", "Donation", "Other"];
/// Earnings from this source must name the paying student.
pub const STUDENT_FEE_SOURCE: &str = "Student Fee";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseForm {
    pub title: String,
    pub category: String,
    pub amount: String,
    pub date: String,
    pub note: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePayload {
    pub title: String,
    pub category: String,
    pub amount: f64,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ExpenseForm {
    /// # Errors
    ///
    /// Returns every failing field.
    pub fn validate(&self) -> Result<ExpensePayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let title = errors.check("title", validate::text(&self.title, 2, 100));
        let category = errors.check(
            "category",
            validate::choice(&self.category, |raw| {
                EXPENSE_CATEGORIES.iter().find(|c| **c == raw.trim()).map(|c| (*c).to_owned())
            }),
        );
        let amount = errors.check("amount", validate::amount(&self.amount));
        let date = errors.check("date", validate::date(&self.date));
        let note = errors.check("note", validate::optional_text(&self.note, 300));

        let (Some(title), Some(category), Some(amount), Some(date), Some(note)) = (title, category, amount, date, note)
        else {
            return Err(errors);
        };
        Ok(ExpensePayload { title, category, amount, date: date.to_string(), note })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EarningForm {
    pub source: String,
    pub amount: String,
    pub date: String,
    pub student_id: String,
    pub received_by: String,
    pub note: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningPayload {
    pub source: String,
    pub amount: f64,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl EarningForm {
    /// # Errors
    ///
    /// Returns every failing field.
    pub fn validate(&self) -> Result<EarningPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let source = errors.check(
            "source",
            validate::choice(&self.source, |raw| {
                EARNING_SOURCES.iter().find(|s| **s == raw.trim()).map(|s| (*s).to_owned())
            }),
        );
        let amount = errors.check("amount", validate::amount(&self.amount));
        let date = errors.check("date", validate::date(&self.date));
        let student_id = if source.as_deref() == Some(STUDENT_FEE_SOURCE) {
            errors.check("studentId", validate::text(&self.student_id, 1, 64)).map(Some)
        } else {
            Some(None)
        };
        let received_by = errors.check("receivedBy", validate::optional_text(&self.received_by, 64));
        let note = errors.check("note", validate::optional_text(&self.note, 300));

        let (Some(source), Some(amount), Some(date), Some(student_id), Some(received_by), Some(note)) =
            (source, amount, date, student_id, received_by, note)
        else {
            return Err(errors);
        };
        Ok(EarningPayload { source, amount, date: date.to_string(), student_id, received_by, note })
    }
}

// =============================================================================
// CLASS COUNT ENTRY
// =============================================================================

/// One proxy-class row as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProxyClassInput {
    pub class_range: String,
    pub count: String,
    pub covered_for: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassCountForm {
    pub teacher_id: String,
    pub date: String,
    pub three_to_eight: String,
    pub nine_to_ten: String,
    pub eleven_to_twelve: String,
    pub has_proxy: bool,
    pub proxy_classes: RepeatGroup<ProxyClassInput>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassCountPayload {
    pub teacher: String,
    pub date: String,
    pub class_count: ClassCount,
    pub proxy_classes: Vec<ProxyClass>,
}

impl ClassCountForm {
    /// Raw input for one bucket.
    #[must_use]
    pub fn bucket(&self, range: ClassRange) -> &str {
        match range {
            ClassRange::ThreeToEight => &self.three_to_eight,
            ClassRange::NineToTen => &self.nine_to_ten,
            ClassRange::ElevenToTwelve => &self.eleven_to_twelve,
        }
    }

    pub fn set_bucket(&mut self, range: ClassRange, value: String) {
        match range {
            ClassRange::ThreeToEight => self.three_to_eight = value,
            ClassRange::NineToTen => self.nine_to_ten = value,
            ClassRange::ElevenToTwelve => self.eleven_to_twelve = value,
        }
    }

    /// Blank buckets count as zero; at least one class (regular or proxy)
    /// must be logged.
    ///
    /// # Errors
    ///
    /// Returns every failing field.
    pub fn validate(&self) -> Result<ClassCountPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let teacher = errors.check("teacher", validate::text(&self.teacher_id, 1, 64));
        let date = errors.check("date", validate::date(&self.date));

        let mut class_count = Some(ClassCount::default());
        for range in ClassRange::ALL {
            let raw = self.bucket(range);
            let raw = if raw.trim().is_empty() { "0" } else { raw };
            let parsed = errors.check(&format!("classCount.{}", range.label()), count(raw, 0, MAX_DAILY_CLASSES));
            class_count = class_count.zip(parsed).map(|(mut count, n)| {
                count.set(range, n);
                count
            });
        }

        let proxy_classes = if self.has_proxy { self.validate_proxies(&mut errors) } else { Some(Vec::new()) };

        if let (Some(count), Some(proxies)) = (class_count.as_ref(), proxy_classes.as_ref()) {
            if count.is_empty() && proxies.is_empty() {
                errors.add("classCount", "Log at least one class");
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        let (Some(teacher), Some(date), Some(class_count), Some(proxy_classes)) =
            (teacher, date, class_count, proxy_classes)
        else {
            return Err(errors);
        };
        Ok(ClassCountPayload { teacher, date: date.to_string(), class_count, proxy_classes })
    }

    fn validate_proxies(&self, errors: &mut FieldErrors) -> Option<Vec<ProxyClass>> {
        let mut rows = Vec::with_capacity(self.proxy_classes.len());
        let mut ok = true;
        for (idx, input) in self.proxy_classes.values().enumerate() {
            let range = errors.check(
                &format!("proxyClasses.{idx}.classRange"),
                validate::choice(&input.class_range, ClassRange::from_label),
            );
            let count = errors.check(&format!("proxyClasses.{idx}.count"), count(&input.count, 1, MAX_DAILY_CLASSES));
            let covered_for = errors.check(&format!("proxyClasses.{idx}.coveredFor"), validate::text(&input.covered_for, 2, 80));
            match (range, count, covered_for) {
                (Some(class_range), Some(count), Some(covered_for)) => {
                    rows.push(ProxyClass { class_range, count, covered_for });
                }
                _ => ok = false,
            }
        }
        ok.then_some(rows)
    }
}

// =============================================================================
// DIRECTOR TIMING
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimingForm {
    pub director_id: String,
    pub date: String,
    pub slots: RepeatGroup<TimingSlot>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingPayload {
    pub director: String,
    pub date: String,
    pub timings: Vec<TimingSlot>,
}

impl TimingForm {
    #[must_use]
    pub fn from_timing(timing: &DirectorTiming) -> Self {
        Self {
            director_id: timing.director.id.clone(),
            date: crate::pivot::date_key(&timing.date).to_owned(),
            slots: RepeatGroup::from_values(timing.timings.clone(), TimingSlot::default()),
        }
    }

    /// Each slot needs `in < out`; slots may not overlap each other.
    ///
    /// # Errors
    ///
    /// Returns every failing field.
    pub fn validate(&self) -> Result<TimingPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let director = errors.check("director", validate::text(&self.director_id, 1, 64));
        let date = errors.check("date", validate::date(&self.date));

        let mut spans = Vec::with_capacity(self.slots.len());
        let mut timings = Vec::with_capacity(self.slots.len());
        for (idx, slot) in self.slots.values().enumerate() {
            let start = errors.check(&format!("timings.{idx}.inTime"), validate::time_of_day(&slot.in_time));
            let end = errors.check(&format!("timings.{idx}.outTime"), validate::time_of_day(&slot.out_time));
            let (Some(start), Some(end)) = (start, end) else {
                continue;
            };
            if end <= start {
                errors.add(&format!("timings.{idx}.outTime"), "Out time must be after in time");
                continue;
            }
            if spans.iter().any(|&(s, e)| start < e && s < end) {
                errors.add(&format!("timings.{idx}.inTime"), "Overlaps another slot");
                continue;
            }
            spans.push((start, end));
            timings.push(TimingSlot { in_time: slot.in_time.trim().to_owned(), out_time: slot.out_time.trim().to_owned() });
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        let (Some(director), Some(date)) = (director, date) else {
            return Err(errors);
        };
        Ok(TimingPayload { director, date: date.to_string(), timings })
    }
}

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns every failing field.
    pub fn validate(&self) -> Result<LoginPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let email = errors.check("email", validate::email(&self.email));
        let password = if self.password.is_empty() {
            errors.add("password", validate::REQUIRED);
            None
        } else {
            Some(self.password.clone())
        };
        let (Some(email), Some(password)) = (email, password) else {
            return Err(errors);
        };
        Ok(LoginPayload { email, password })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    /// # Errors
    ///
    /// Returns every failing field.
    pub fn validate(&self) -> Result<RegisterPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = errors.check("name", validate::text(&self.name, 2, 80));
        let email = errors.check("email", validate::email(&self.email));
        let password = if self.password.chars().count() < 6 {
            errors.add("password", "Must be at least 6 characters");
            None
        } else {
            Some(self.password.clone())
        };
        if self.confirm_password != self.password {
            errors.add("confirmPassword", "Passwords do not match");
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        let (Some(name), Some(email), Some(password)) = (name, email, password) else {
            return Err(errors);
        };
        Ok(RegisterPayload { name, email, password })
    }
}
