/// Parses a free-text duration such as `"1 hour 30 minutes"` into seconds.
///
/// Any whitespace-delimited token containing `hour` or `minute` contributes
/// its number: the leading digits of the token itself (`"45minutes"`) or,
/// failing that, the preceding token (`"45 minutes"`). Numbers that cannot be
/// parsed count as zero and every other token is ignored, so the result is
/// never an error.
///
/// # Examples
///
/// ```
/// use foodscribe_core::parse_duration;
///
/// assert_eq!(parse_duration("1 hour 30 minutes"), 5400);
/// assert_eq!(parse_duration("45 minutes"), 2700);
/// assert_eq!(parse_duration("overnight"), 0);
/// ```
pub fn parse_duration(text: &str) -> u64 {
    let tokens: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();

    let mut hours = 0u64;
    let mut minutes = 0u64;
    for (i, token) in tokens.iter().enumerate() {
        let unit = if token.contains("hour") {
            &mut hours
        } else if token.contains("minute") {
            &mut minutes
        } else {
            continue;
        };

        let previous = i.checked_sub(1).map(|p| tokens[p].as_str());
        *unit = unit.saturating_add(component_value(token, previous));
    }

    hours
        .saturating_mul(3600)
        .saturating_add(minutes.saturating_mul(60))
}

fn component_value(token: &str, previous: Option<&str>) -> u64 {
    let digits: String = token.chars().take_while(|c| c.is_ascii_digit()).collect();
    if !digits.is_empty() {
        return digits.parse().unwrap_or(0);
    }
    previous.and_then(|p| p.parse().ok()).unwrap_or(0)
}
