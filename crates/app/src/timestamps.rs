//! Server-assigned timestamps.

use jiff::Timestamp;

/// The current time with sub-second precision discarded.
pub(crate) fn now_truncated() -> Timestamp {
    truncate_to_second(Timestamp::now())
}

pub(crate) fn truncate_to_second(timestamp: Timestamp) -> Timestamp {
    Timestamp::from_second(timestamp.as_second()).unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn truncation_drops_fractional_seconds() -> TestResult {
        let timestamp: Timestamp = "2026-03-01T10:15:30.987654321Z".parse()?;
        let expected: Timestamp = "2026-03-01T10:15:30Z".parse()?;

        assert_eq!(truncate_to_second(timestamp), expected);

        Ok(())
    }

    #[test]
    fn now_truncated_has_no_subsecond_component() {
        assert_eq!(now_truncated().subsec_nanosecond(), 0);
    }
}
