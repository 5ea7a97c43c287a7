//! Date helpers for form constraints

/// Today's local date as `YYYY-MM-DD`, used as the `min` of date inputs.
pub fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}
