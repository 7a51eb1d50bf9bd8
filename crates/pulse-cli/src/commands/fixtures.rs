use pulse_config::PulseConfig;

use crate::bundle::Bundle;
use crate::context::AppContext;

/// A small engineering team with benchmarks and one learned mapping.
pub fn bundle_json() -> serde_json::Value {
    serde_json::json!({
        "employees": [
            {
                "id": "e1", "role": "Software Engineer", "total_compensation": 120000.0,
                "base_salary": 110000.0, "bonus": 10000.0, "start_date": "2021-03-01"
            },
            {
                "id": "e2", "role": "Senior Software Engineer", "total_compensation": 170000.0,
                "base_salary": 150000.0, "bonus": 20000.0, "start_date": "2019-06-15"
            },
            {
                "id": "e3", "role": "Code Ninja", "total_compensation": 60000.0,
                "fte": 0.5, "employment_type": "part_time", "start_date": "2024-02-01"
            },
            {
                "id": "e4", "role": "Software Engineer", "total_compensation": 115000.0,
                "start_date": "2020-01-10", "end_date": "2024-08-31"
            }
        ],
        "metadata": {
            "currency": "USD", "as_of": "2024-12-31", "total_revenue": 1200000.0,
            "industry": "Technology", "region": "US"
        },
        "benchmarks": [
            {
                "role_family": "Engineering", "standardized_title": "Software Engineer",
                "seniority_level": "mid", "industry": "technology", "region": "us",
                "currency": "USD", "sample_size": 80, "source": "Radford",
                "total_compensation": { "p25": 110000.0, "p50": 125000.0, "p75": 140000.0 }
            },
            {
                "role_family": "Engineering", "standardized_title": "Senior Software Engineer",
                "seniority_level": "senior", "industry": "technology", "region": "us",
                "currency": "USD", "sample_size": 60, "source": "Radford",
                "total_compensation": { "p25": 150000.0, "p50": 165000.0, "p75": 185000.0 }
            }
        ],
        "library": [
            {
                "normalized_title": "code ninja", "standardized_title": "Software Engineer",
                "seniority_level": "mid", "role_family": "Engineering",
                "verified_count": 3, "reported_count": 0,
                "updated_at": "2024-11-01T00:00:00Z"
            }
        ],
        "cost_history": [400000.0, 410000.0, 405000.0, 465000.0]
    })
}

pub fn bundle() -> Bundle {
    serde_json::from_value(bundle_json()).expect("fixture bundle should deserialize")
}

pub fn context() -> AppContext {
    AppContext::new(PulseConfig::default(), bundle())
}
