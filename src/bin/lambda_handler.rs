//! AWS Lambda handler for mortgage calculations
//!
//! Accepts loan parameters as JSON and returns the payment breakdown, totals,
//! yearly milestones, optional full schedule and charity impact.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use chrono::NaiveDate;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use mortgage_engine::amortization::{compute_payoff_time_months, DEFAULT_PAYOFF_TOLERANCE};
use mortgage_engine::tax_rates::{Location, TaxRateLookup, TaxRateTable};
use mortgage_engine::{
    compute_charity_impact, AmortizationEngine, AmortizationSummary, EngineConfig, ImpactSummary,
    MortgageInputs, ScheduleEntry,
};

/// Input parameters for one calculation
#[derive(Debug, Deserialize)]
pub struct MortgageRequest {
    pub house_price: f64,

    #[serde(default)]
    pub down_payment: f64,

    /// Annual rate as a fraction (default: 6.5%)
    #[serde(default = "default_annual_rate")]
    pub annual_rate: f64,

    /// Term in years (default: 30); zero or negative gives the empty result
    #[serde(default = "default_term_years")]
    pub term_years: i64,

    /// Annual property tax rate; ignored when `zip` is given
    #[serde(default)]
    pub property_tax_rate: f64,

    #[serde(default)]
    pub annual_insurance: f64,

    /// Zip code for a tax rate lookup
    #[serde(default)]
    pub zip: Option<String>,

    /// Location already resolved for `zip` by the caller
    #[serde(default)]
    pub location: Option<Location>,

    /// Apply the input form's clamps before calculating
    #[serde(default)]
    pub sanitize: bool,

    #[serde(default = "default_payoff_tolerance")]
    pub payoff_tolerance: f64,

    #[serde(default)]
    pub first_payment: Option<NaiveDate>,

    /// Extra monthly payment for a payoff-time what-if
    #[serde(default)]
    pub extra_payment: Option<f64>,

    /// Return every month rather than yearly milestones only
    #[serde(default)]
    pub include_schedule: bool,
}

fn default_annual_rate() -> f64 { 0.065 }
fn default_term_years() -> i64 { 30 }
fn default_payoff_tolerance() -> f64 { DEFAULT_PAYOFF_TOLERANCE }

/// Map a requested term onto the engine's `u32` years. Non-positive terms
/// become 0; terms past `u32::MAX` saturate and fail the engine's term limit.
fn requested_term_years(term_years: i64) -> u32 {
    if term_years <= 0 {
        0
    } else {
        u32::try_from(term_years).unwrap_or(u32::MAX)
    }
}

/// Output from the calculation
#[derive(Debug, Serialize)]
pub struct MortgageResponse {
    pub computed: bool,
    pub inputs: MortgageInputs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lookup: Option<TaxRateLookup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<AmortizationSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payoff_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payoff_months_with_extra: Option<f64>,
    pub yearly: Vec<ScheduleEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<ScheduleEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charity_impact: Option<ImpactSummary>,
    pub execution_time_ms: u64,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: u16, message: &str) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(&ErrorBody { error: message.to_string() })?;
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(body))?)
}

fn json_response(body: &MortgageResponse) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body)?))?)
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: MortgageRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => return error_response(400, &format!("Invalid JSON: {}", e)),
    };

    let config = match EngineConfig::with_payoff_tolerance(request.payoff_tolerance) {
        Ok(c) => c,
        Err(e) => return error_response(400, &e.to_string()),
    };

    let tax_lookup = match &request.zip {
        Some(zip) => match TaxRateTable::builtin().lookup_zip_with_location(zip, request.location.as_ref()) {
            Ok(lookup) => Some(lookup),
            Err(e) => return error_response(400, &e.to_string()),
        },
        None => None,
    };
    let property_tax_rate = tax_lookup
        .as_ref()
        .map(|l| l.rate)
        .unwrap_or(request.property_tax_rate);

    let mut inputs = MortgageInputs::from_purchase(
        request.house_price,
        request.down_payment.max(0.0),
        request.annual_rate,
        requested_term_years(request.term_years),
        property_tax_rate,
        request.annual_insurance,
    );
    if request.sanitize {
        inputs = inputs.sanitized();
    }

    let engine = AmortizationEngine::new(config);
    let amortization = engine.generate_schedule(&inputs);

    let mut response = MortgageResponse {
        computed: false,
        inputs,
        tax_lookup,
        summary: None,
        payoff_date: None,
        payoff_months_with_extra: None,
        yearly: Vec::new(),
        schedule: None,
        charity_impact: None,
        execution_time_ms: 0,
    };

    if let Some(result) = amortization.into_result() {
        response.computed = true;
        response.summary = Some(result.summary());
        response.payoff_date = request.first_payment.and_then(|d| result.payoff_date(d));
        response.yearly = result.yearly_snapshots().into_iter().copied().collect();
        response.charity_impact = Some(compute_charity_impact(
            result.total_interest_paid,
            result.total_taxes_paid,
            result.total_insurance_paid,
        ));

        if let Some(extra) = request.extra_payment {
            match compute_payoff_time_months(inputs.principal, inputs.annual_rate, result.monthly_payment + extra) {
                Ok(months) => response.payoff_months_with_extra = Some(months),
                Err(e) => return error_response(400, &e.to_string()),
            }
        }

        if request.include_schedule {
            response.schedule = Some(result.schedule);
        }
    } else {
        warn!("Request had nothing to amortize: {:?}", inputs);
    }

    response.execution_time_ms = start.elapsed().as_millis() as u64;
    info!("Handled request in {} ms (computed={})", response.execution_time_ms, response.computed);

    json_response(&response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_term_is_empty_not_rejected() {
        let request: MortgageRequest =
            serde_json::from_str(r#"{"house_price": 400000, "down_payment": 80000, "term_years": -5}"#).unwrap();
        assert_eq!(request.term_years, -5);

        let term_years = requested_term_years(request.term_years);
        assert_eq!(term_years, 0);

        let inputs = MortgageInputs::from_purchase(400_000.0, 80_000.0, 0.065, term_years, 0.0, 0.0);
        assert!(AmortizationEngine::default().generate_schedule(&inputs).is_empty());
    }

    #[test]
    fn test_requested_term_years() {
        assert_eq!(requested_term_years(0), 0);
        assert_eq!(requested_term_years(30), 30);
        assert_eq!(requested_term_years(i64::MAX), u32::MAX);
    }

    #[test]
    fn test_request_defaults() {
        let request: MortgageRequest = serde_json::from_str(r#"{"house_price": 300000}"#).unwrap();
        assert_eq!(request.term_years, 30);
        assert_eq!(request.annual_rate, 0.065);
        assert_eq!(request.payoff_tolerance, DEFAULT_PAYOFF_TOLERANCE);
        assert!(request.zip.is_none());
    }
}
