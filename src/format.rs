use std::fmt;

use crate::duration::CalendarDuration;

/// Renders a duration as English text, e.g. "12 years, 1 month, and 3 days".
///
/// Zero components are dropped. Two components are joined with "and", three
/// with an Oxford comma. All-zero renders as "0 days".
pub fn format_duration(years: u32, months: u32, days: u32) -> String {
    let parts: Vec<String> = [(years, "year"), (months, "month"), (days, "day")]
        .into_iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| format!("{n} {unit}{}", plural(n)))
        .collect();

    match parts.as_slice() {
        [] => "0 days".to_string(),
        [one] => one.clone(),
        [a, b] => format!("{a} and {b}"),
        [head @ .., last] => format!("{}, and {last}", head.join(", ")),
    }
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

impl fmt::Display for CalendarDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(self.years, self.months, self.days))
    }
}
