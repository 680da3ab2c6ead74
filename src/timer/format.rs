//! Display formatting for remaining time

/// Format whole seconds as `MM:SS`.
///
/// Minutes are not wrapped into hours, so an hour renders as `60:00` and
/// values past 99 minutes simply grow wider.
pub fn format_display(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_minutes_and_seconds() {
        assert_eq!(format_display(0), "00:00");
        assert_eq!(format_display(65), "01:05");
        assert_eq!(format_display(599), "09:59");
    }

    #[test]
    fn minutes_are_not_wrapped() {
        assert_eq!(format_display(3600), "60:00");
        assert_eq!(format_display(6000), "100:00");
        assert_eq!(format_display(6061), "101:01");
    }
}
