use serde::Deserialize;
use serde::Deserializer;

/// One bar as the provider sends it. Numeric fields arrive as JSON numbers
/// or as numeric strings depending on endpoint mood; anything unparseable
/// degrades to `None` instead of failing the whole response.
#[derive(Deserialize)]
pub(crate) struct WireBar {
    pub(crate) day: String,
    #[serde(default, deserialize_with = "de_opt_f64_from_mixed")]
    pub(crate) open: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64_from_mixed")]
    pub(crate) high: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64_from_mixed")]
    pub(crate) low: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64_from_mixed")]
    pub(crate) close: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_u64_from_mixed")]
    pub(crate) volume: Option<u64>,
}

/// Accepts f64, numeric strings ("10.61"), or null/missing. Non-numeric
/// values become `None`.
fn de_opt_f64_from_mixed<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    let v = Option::<Value>::deserialize(deserializer)?;
    Ok(match v {
        Some(Value::Number(n)) => n.as_f64().filter(|f| f.is_finite()),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    })
}

/// Accepts u64, integer-like f64 (e.g., 120000.0), numeric strings
/// ("120000"), or null/missing. Everything else becomes `None`.
fn de_opt_u64_from_mixed<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    let v = Option::<Value>::deserialize(deserializer)?;
    Ok(match v {
        Some(Value::Number(n)) => match n.as_u64() {
            Some(u) => Some(u),
            None => n.as_f64().and_then(f64_to_u64),
        },
        Some(Value::String(s)) => {
            let s = s.trim();
            match s.parse::<u64>() {
                Ok(u) => Some(u),
                Err(_) => s.parse::<f64>().ok().and_then(f64_to_u64),
            }
        }
        _ => None,
    })
}

fn f64_to_u64(f: f64) -> Option<u64> {
    if f.is_finite() && f >= 0.0 {
        Some(f.round() as u64)
    } else {
        None
    }
}
