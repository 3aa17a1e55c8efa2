use chrono::{DateTime, Datelike, Utc};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// en-GB long date, e.g. `12 August 2026`.
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    let month = MONTHS[(timestamp.month0()) as usize];
    format!("{} {} {}", timestamp.day(), month, timestamp.year())
}

/// Bare domain for link display: scheme, `www.` prefix, path, and trailing
/// slashes stripped. Input that is not URL-shaped comes back trimmed.
pub fn format_link_domain(url: &str) -> String {
    let trimmed = url.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    let without_www = without_scheme.strip_prefix("www.").unwrap_or(without_scheme);
    let domain = without_www
        .split(['/', '?', '#'])
        .next()
        .unwrap_or(without_www);
    domain.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn dates_render_in_en_gb_long_form() {
        let date = Utc.with_ymd_and_hms(2026, 8, 12, 16, 45, 0).unwrap();
        assert_eq!(format_date(date), "12 August 2026");

        let single_digit = Utc.with_ymd_and_hms(2026, 1, 3, 0, 0, 0).unwrap();
        assert_eq!(format_date(single_digit), "3 January 2026");
    }

    #[test]
    fn link_domains_drop_scheme_www_and_path() {
        assert_eq!(
            format_link_domain("https://www.gmc-uk.org/registration"),
            "gmc-uk.org"
        );
        assert_eq!(format_link_domain("http://arb.org.uk/"), "arb.org.uk");
        assert_eq!(format_link_domain("sra.org.uk?utm=1"), "sra.org.uk");
        assert_eq!(format_link_domain("  not a url  "), "not a url");
    }
}
