//! Session state shared between flows
//!
//! The only value that survives across user interactions is the daily
//! calorie target computed by the BMI flow. It is modeled as an explicit
//! context object passed between flows rather than ambient global state,
//! so the core stays testable without a UI harness.

/// Session-scoped state for a single interactive run
///
/// Written by the BMI flow when a calorie target is computed, read by the
/// diet-chart flow, and overwritten on each new BMI calculation. Nothing
/// here outlives the process.
#[derive(Debug, Clone, Default)]
pub struct Session {
    calorie_target: Option<f64>,
}

impl Session {
    /// Create an empty session with no stored calorie target
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a daily calorie target, replacing any previous value
    pub fn set_calorie_target(&mut self, daily_calories: f64) {
        self.calorie_target = Some(daily_calories);
    }

    /// Read the stored daily calorie target, if one has been computed
    pub fn calorie_target(&self) -> Option<f64> {
        self.calorie_target
    }

    /// Discard the stored calorie target
    ///
    /// Used when a new BMI calculation lands in the underweight range,
    /// where no calorie recommendation is produced.
    pub fn clear_calorie_target(&mut self) {
        self.calorie_target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_no_target() {
        let session = Session::new();
        assert_eq!(session.calorie_target(), None);
    }

    #[test]
    fn test_set_and_read_target() {
        let mut session = Session::new();
        session.set_calorie_target(1978.5);
        assert_eq!(session.calorie_target(), Some(1978.5));
    }

    #[test]
    fn test_target_is_overwritten() {
        let mut session = Session::new();
        session.set_calorie_target(1978.5);
        session.set_calorie_target(2100.0);
        assert_eq!(session.calorie_target(), Some(2100.0));
    }

    #[test]
    fn test_clear_target() {
        let mut session = Session::new();
        session.set_calorie_target(1978.5);
        session.clear_calorie_target();
        assert_eq!(session.calorie_target(), None);
    }
}
