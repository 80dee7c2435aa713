use time::Date;
use time::macros::format_description;

/// Parses a calendar date in `YYYY-MM-DD` form. Anything else is `None`.
pub fn parse_iso_date(value: &str) -> Option<Date> {
    Date::parse(value, format_description!("[year]-[month]-[day]")).ok()
}

/// Five groups of five ASCII alphanumerics separated by dashes.
pub fn is_passport_format(value: &str) -> bool {
    let groups: Vec<&str> = value.split('-').collect();
    groups.len() == 5
        && groups
            .iter()
            .all(|g| g.len() == 5 && g.chars().all(|c| c.is_ascii_alphanumeric()))
}
