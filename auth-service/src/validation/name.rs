pub const MAX_NAME_LEN: usize = 100;

/// Display names must contain something other than whitespace.
pub fn is_valid_name(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty() && trimmed.chars().count() <= MAX_NAME_LEN
}
