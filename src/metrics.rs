//! Body-metrics engine for NutriSense
//!
//! Pure functions computing BMI and estimated daily calorie requirement
//! from weight, height, and age, plus classification of BMI into a
//! weight-status category. No side effects, no I/O.

use crate::error::{NutriSenseError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Activity factor applied to BMR for a sedentary lifestyle
pub const SEDENTARY_ACTIVITY_FACTOR: f64 = 1.2;

/// Validated body measurements supplied by the user
///
/// All fields are strictly positive; construction fails otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Body height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: f64,
}

impl BodyMetrics {
    /// Create validated body metrics
    ///
    /// # Arguments
    ///
    /// * `weight_kg` - Body weight in kilograms (must be positive)
    /// * `height_cm` - Body height in centimeters (must be positive)
    /// * `age_years` - Age in years (must be positive)
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any value is non-positive or non-finite
    ///
    /// # Examples
    ///
    /// ```
    /// use nutrisense::metrics::BodyMetrics;
    ///
    /// let metrics = BodyMetrics::new(70.0, 175.0, 30.0).unwrap();
    /// assert_eq!(metrics.weight_kg, 70.0);
    /// ```
    pub fn new(weight_kg: f64, height_cm: f64, age_years: f64) -> Result<Self> {
        validate_positive(weight_kg, "weight")?;
        validate_positive(height_cm, "height")?;
        validate_positive(age_years, "age")?;
        Ok(Self {
            weight_kg,
            height_cm,
            age_years,
        })
    }
}

/// Weight-status category derived from BMI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or above
    Obese,
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Underweight => write!(f, "Underweight"),
            Self::Normal => write!(f, "Normal weight"),
            Self::Overweight => write!(f, "Overweight"),
            Self::Obese => write!(f, "Obese"),
        }
    }
}

/// BMI value with its weight-status classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// Body mass index value
    pub bmi: f64,
    /// Weight-status category for the value
    pub category: BmiCategory,
}

/// Compute body mass index from weight and height
///
/// Formula: `weight_kg / (height_cm / 100)^2`
///
/// # Arguments
///
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Body height in centimeters
///
/// # Errors
///
/// Returns `InvalidInput` if weight or height is non-positive or non-finite;
/// never returns NaN or Infinity silently
///
/// # Examples
///
/// ```
/// use nutrisense::metrics::compute_bmi;
///
/// let bmi = compute_bmi(70.0, 175.0).unwrap();
/// assert!((bmi - 22.86).abs() < 0.01);
/// ```
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Result<f64> {
    validate_positive(weight_kg, "weight")?;
    validate_positive(height_cm, "height")?;

    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Classify a BMI value into a weight-status category
///
/// Boundaries are inclusive on the lower bound, exclusive on the upper
/// bound; the top category is unbounded above.
///
/// # Examples
///
/// ```
/// use nutrisense::metrics::{classify_bmi, BmiCategory};
///
/// assert_eq!(classify_bmi(18.5), BmiCategory::Normal);
/// assert_eq!(classify_bmi(30.0), BmiCategory::Obese);
/// ```
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Estimate daily calorie requirement from body metrics
///
/// Applies a simplified Harris-Benedict-style estimate:
/// `bmr = 10*weight_kg + 6.25*height_cm - 5*age_years + 5`, scaled by the
/// sedentary activity factor (1.2).
///
/// The engine itself does not gate on BMI; the BMI flow only requests a
/// calorie target when BMI >= 18.5.
///
/// # Arguments
///
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Body height in centimeters
/// * `age_years` - Age in years
///
/// # Errors
///
/// Returns `InvalidInput` if any input is non-positive or non-finite
///
/// # Examples
///
/// ```
/// use nutrisense::metrics::compute_daily_calories;
///
/// let calories = compute_daily_calories(70.0, 175.0, 30.0).unwrap();
/// assert!((calories - 1978.5).abs() < 0.01);
/// ```
pub fn compute_daily_calories(weight_kg: f64, height_cm: f64, age_years: f64) -> Result<f64> {
    validate_positive(weight_kg, "weight")?;
    validate_positive(height_cm, "height")?;
    validate_positive(age_years, "age")?;

    let bmr = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years + 5.0;
    Ok(bmr * SEDENTARY_ACTIVITY_FACTOR)
}

/// Compute BMI and classify it in a single step
///
/// # Errors
///
/// Returns `InvalidInput` if weight or height is non-positive
pub fn evaluate_bmi(weight_kg: f64, height_cm: f64) -> Result<BmiResult> {
    let bmi = compute_bmi(weight_kg, height_cm)?;
    Ok(BmiResult {
        bmi,
        category: classify_bmi(bmi),
    })
}

fn validate_positive(value: f64, field: &str) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(NutriSenseError::InvalidInput(format!(
            "{} must be a positive number, got {}",
            field, value
        ))
        .into());
    }
    Ok(())
}
