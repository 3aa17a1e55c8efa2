//! Display normalization for free-text telephone numbers.
//!
//! The policy is fail-closed: a number is only rendered in normalized form
//! when the normalized digits provably round-trip to the digits the user
//! entered. Anything else comes back as the trimmed original input.

/// Country dialling codes the normalizer recognizes, longest first so prefix
/// matching is unambiguous.
const COUNTRY_CODES: [&str; 16] = [
    "353", "351", "358", "420", "44", "49", "33", "34", "39", "31", "32", "46", "47", "48", "45",
    "1",
];

const UK_CODE: &str = "44";

/// Normalizes a telephone number for display. UK numbers render as
/// `+44 (0)XXX XXXX XXXX`; other recognized international numbers as
/// `+<cc> <local>`. Input that cannot be confidently normalized is returned
/// trimmed, never an error.
pub fn format_telephone(input: &str) -> String {
    let trimmed = input.trim();

    let Some(candidate) = preprocess(trimmed) else {
        return trimmed.to_string();
    };

    let formatted = match candidate.country_code.as_deref() {
        Some(UK_CODE) | None => {
            // "+44 20..." carries the local part without its trunk zero.
            let national = if candidate.country_code.is_some() && !candidate.local.starts_with('0')
            {
                format!("0{}", candidate.local)
            } else {
                candidate.local.clone()
            };
            group_uk_national(&national).map(|grouped| {
                let without_trunk = grouped.trim_start_matches('0');
                format!("+44 (0){without_trunk}")
            })
        }
        Some(code) => Some(format!("+{} {}", code, candidate.local)),
    };

    match formatted {
        Some(formatted) if round_trips(&formatted, &candidate) => formatted,
        _ => trimmed.to_string(),
    }
}

struct Candidate {
    country_code: Option<String>,
    /// National digits; retains a leading trunk zero when the input had one.
    local: String,
}

/// Strips decorative characters and splits off an explicit country code.
/// Returns `None` for anything containing letters or too few digits.
fn preprocess(trimmed: &str) -> Option<Candidate> {
    let mut compact = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        match ch {
            '-' | '.' | '(' | ')' | '[' | ']' => {}
            ch if ch.is_whitespace() => {}
            ch => compact.push(ch),
        }
    }

    let (has_plus, digits) = match compact.strip_prefix('+') {
        Some(rest) => (true, rest),
        None => (false, compact.as_str()),
    };

    if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }

    if has_plus {
        let (code, local) = split_country_code(digits)?;
        return Some(Candidate {
            country_code: Some(code),
            local,
        });
    }

    if let Some(rest) = digits.strip_prefix("00") {
        let (code, local) = split_country_code(rest)?;
        return Some(Candidate {
            country_code: Some(code),
            local,
        });
    }

    if digits.len() < 7 {
        return None;
    }

    Some(Candidate {
        country_code: None,
        local: digits.to_string(),
    })
}

fn split_country_code(digits: &str) -> Option<(String, String)> {
    let code = COUNTRY_CODES
        .iter()
        .find(|code| digits.starts_with(**code))?;
    let local = &digits[code.len()..];
    if local.len() < 5 {
        return None;
    }
    Some(((*code).to_string(), local.to_string()))
}

/// UK national grouping table over digits that include the trunk zero.
/// Returns `None` for lengths or prefixes it cannot place confidently.
fn group_uk_national(national: &str) -> Option<String> {
    let bytes = national.as_bytes();
    if !national.starts_with('0') {
        return None;
    }

    match national.len() {
        11 if national.starts_with("02") => Some(group(national, &[3, 4, 4])),
        11 if national.starts_with("011") || bytes.get(3) == Some(&b'1') => {
            Some(group(national, &[4, 3, 4]))
        }
        11 if national.starts_with("01") => Some(group(national, &[5, 6])),
        11 if national.starts_with("07") => Some(group(national, &[5, 6])),
        11 if matches!(&national[..2], "03" | "08" | "09") => Some(group(national, &[4, 3, 4])),
        10 if national.starts_with("01") => Some(group(national, &[5, 5])),
        _ => None,
    }
}

fn group(digits: &str, widths: &[usize]) -> String {
    let mut parts = Vec::with_capacity(widths.len());
    let mut offset = 0;
    for width in widths {
        parts.push(&digits[offset..offset + width]);
        offset += width;
    }
    parts.join(" ")
}

/// The formatted number must carry exactly the significant digits of the
/// input, normalized to international form. The `(0)` trunk marker is not a
/// significant digit.
fn round_trips(formatted: &str, candidate: &Candidate) -> bool {
    let formatted_digits: String = formatted
        .replace("(0)", "")
        .chars()
        .filter(|ch| ch.is_ascii_digit())
        .collect();

    let expected = match candidate.country_code.as_deref() {
        Some(UK_CODE) | None => {
            let local = candidate.local.trim_start_matches('0');
            format!("{UK_CODE}{local}")
        }
        Some(code) => format!("{}{}", code, candidate.local),
    };

    formatted_digits == expected
}
