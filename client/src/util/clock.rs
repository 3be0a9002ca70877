//! Current calendar month for default selections.

/// Zero-based month and year "now": browser local time when hydrated, UTC
/// on the server.
pub fn current_month_year() -> (u32, i32) {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        (now.get_month(), i32::try_from(now.get_full_year()).unwrap_or(1970))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .ok()
            .and_then(|d| i64::try_from(d.as_secs()).ok())
            .unwrap_or(0);
        records::pivot::month_year_at(secs).unwrap_or((0, 1970))
    }
}

/// Today's date as `YYYY-MM-DD`, used to prefill date inputs.
pub fn today() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format!("{:04}-{:02}-{:02}", now.get_full_year(), now.get_month() + 1, now.get_date())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
