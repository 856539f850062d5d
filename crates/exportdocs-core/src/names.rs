//! Person name rendering.

use tracing::warn;

use crate::event::Person;

/// Text used in place of a missing contribution title.
pub const UNTITLED: &str = "Без названия";

/// Formats a speaker as `Last F.S.`.
///
/// The second initial is taken from the *second character of the first
/// name*, not from the middle name: `Anna Petrova` becomes `Petrova A.n.`.
/// A one-character first name yields a single initial (`Petrov A.`).
///
/// An empty first name falls back to the bare last name.
pub fn short_name(person: &Person) -> String {
    let mut chars = person.first_name.chars();
    let Some(first) = chars.next() else {
        warn!(last_name = %person.last_name, "Person has an empty first name");
        return person.last_name.clone();
    };

    match chars.next() {
        Some(second) => format!("{} {}.{}.", person.last_name, first, second),
        None => format!("{} {}.", person.last_name, first),
    }
}

/// Formats a full name for the publications list.
///
/// With a middle name the order is `Last First Middle`; without one it is
/// `First Last`.
pub fn full_name(person: &Person) -> String {
    match person.middle_name.as_deref() {
        Some(middle) if !middle.is_empty() => {
            format!("{} {} {}", person.last_name, person.first_name, middle)
        }
        _ => format!("{} {}", person.first_name, person.last_name),
    }
}

/// Returns the title, or [`UNTITLED`] when it is missing or empty.
pub fn display_title(title: Option<&str>) -> &str {
    title.filter(|t| !t.is_empty()).unwrap_or(UNTITLED)
}
