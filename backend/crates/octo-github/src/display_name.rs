/// Split a provider display name into `(first, last)` on the first space.
///
/// A name without a space becomes the first name; an empty name yields two
/// empty strings.
pub fn split_display_name(full_name: &str) -> (String, String) {
    if full_name.is_empty() {
        return (String::new(), String::new());
    }

    match full_name.split_once(' ') {
        Some((first, last)) => (first.to_string(), last.to_string()),
        None => (full_name.to_string(), String::new()),
    }
}
