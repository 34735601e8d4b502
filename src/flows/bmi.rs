//! BMI calculator flow
//!
//! Computes BMI and weight status from user measurements and, for
//! non-underweight users, derives a daily calorie target that is stored
//! in the session for the diet-chart flow. The BMI >= 18.5 gate lives
//! here as caller policy; the metrics engine itself does not enforce it.

use crate::error::{NutriSenseError, Result};
use crate::metrics::{self, BmiCategory, BmiResult, BodyMetrics};
use crate::session::Session;

/// Outcome of a BMI calculation
#[derive(Debug, Clone, PartialEq)]
pub struct BmiReport {
    /// BMI value and its classification
    pub result: BmiResult,
    /// Daily calorie target, present only when BMI >= 18.5
    pub calorie_target: Option<f64>,
}

impl BmiReport {
    /// Whether the user should be pointed to a healthcare professional
    /// instead of receiving a calorie recommendation
    pub fn needs_professional_advice(&self) -> bool {
        self.result.category == BmiCategory::Underweight
    }
}

/// Parse free-text measurement fields into validated body metrics
///
/// # Arguments
///
/// * `weight` - Weight in kg as entered by the user
/// * `height` - Height in cm as entered by the user
/// * `age` - Age in years as entered by the user
///
/// # Errors
///
/// Returns `InvalidInput` for empty, non-numeric, or non-positive values
pub fn parse_body_metrics(weight: &str, height: &str, age: &str) -> Result<BodyMetrics> {
    let weight_kg = parse_field(weight, "weight")?;
    let height_cm = parse_field(height, "height")?;
    let age_years = parse_field(age, "age")?;
    BodyMetrics::new(weight_kg, height_cm, age_years)
}

fn parse_field(value: &str, field: &str) -> Result<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(NutriSenseError::InvalidInput(format!(
            "please enter {} to calculate BMI",
            field
        ))
        .into());
    }
    trimmed.parse::<f64>().map_err(|_| {
        NutriSenseError::InvalidInput(format!("{} must be a number, got '{}'", field, trimmed))
            .into()
    })
}

/// Run the BMI flow for validated body metrics
///
/// Computes and classifies BMI, then, when the value is at least 18.5,
/// computes the daily calorie target and stores it in the session
/// (overwriting any previous value). Underweight results clear the
/// stored target instead.
///
/// # Errors
///
/// Returns `InvalidInput` if the metrics fail engine validation
///
/// # Examples
///
/// ```
/// use nutrisense::flows::run_bmi_flow;
/// use nutrisense::metrics::BodyMetrics;
/// use nutrisense::session::Session;
///
/// let mut session = Session::new();
/// let metrics = BodyMetrics::new(70.0, 175.0, 30.0).unwrap();
/// let report = run_bmi_flow(&mut session, metrics).unwrap();
/// assert!(report.calorie_target.is_some());
/// assert_eq!(session.calorie_target(), report.calorie_target);
/// ```
pub fn run_bmi_flow(session: &mut Session, body: BodyMetrics) -> Result<BmiReport> {
    let result = metrics::evaluate_bmi(body.weight_kg, body.height_cm)?;
    tracing::info!("Computed BMI {:.2} ({})", result.bmi, result.category);

    let calorie_target = if result.bmi >= 18.5 {
        let daily =
            metrics::compute_daily_calories(body.weight_kg, body.height_cm, body.age_years)?;
        session.set_calorie_target(daily);
        Some(daily)
    } else {
        session.clear_calorie_target();
        None
    };

    Ok(BmiReport {
        result,
        calorie_target,
    })
}
