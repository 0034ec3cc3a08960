//! Natural ("human") ordering for filenames.
//!
//! Names are walked character by character. Runs of ASCII digits on both
//! sides compare by numeric value, everything else compares case-insensitively,
//! so `E_2.gif` sorts before `E_10.gif`. Names that compare equal under those
//! rules (`E_01` / `E_1`, `a.GIF` / `a.gif`) fall back to plain byte order,
//! which keeps the ordering total.

use std::cmp::Ordering;

fn digit_run(s: &str) -> &str {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    &s[..end]
}

fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    // Arbitrary length: compare by magnitude first, then digit by digit.
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compares two filenames in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (mut i, mut j) = (0, 0);
    loop {
        match (a[i..].chars().next(), b[j..].chars().next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let run_a = digit_run(&a[i..]);
                let run_b = digit_run(&b[j..]);
                match cmp_digits(run_a, run_b) {
                    Ordering::Equal => {
                        i += run_a.len();
                        j += run_b.len();
                    }
                    ord => return ord,
                }
            }
            (Some(x), Some(y)) => match Iterator::cmp(x.to_lowercase(), y.to_lowercase()) {
                Ordering::Equal => {
                    i += x.len_utf8();
                    j += y.len_utf8();
                }
                ord => return ord,
            },
        }
    }
}
