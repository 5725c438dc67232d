mod client;
mod errors;

use std::fmt;
use std::fmt::{Display, Formatter};

use serde::Serialize;
use serde_json::Value;

pub use client::{PredictionClient, DEFAULT_ENDPOINT};
pub use errors::PredictionError;

const SALARY: &str = "salary";
const PREDICTION: &str = "prediction";

/// Inputs of the salary model, serialized with the field names the serving endpoint expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub age: f64,
    pub gender: String,
    pub education: String,
    pub job_title: String,
    pub years_of_experience: f64
}

/// The model's answer, kept verbatim.
///
/// Hosted endpoints answer with `salary`, the self-hosted service with `prediction`.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub salary: Option<Value>
}

impl Prediction {
    pub fn from_response(body: &Value) -> Self {
        Self {
            salary: body.get(SALARY).or_else(|| body.get(PREDICTION)).cloned()
        }
    }
}

impl Display for Prediction {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match &self.salary {
            Some(Value::String(salary)) => write!(formatter, "Predicted Salary: {salary}"),
            Some(salary) => write!(formatter, "Predicted Salary: {salary}"),
            None => formatter.write_str("Predicted Salary: undefined")
        }
    }
}
