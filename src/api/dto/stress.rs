use std::num::IntErrorKind;
use url::form_urlencoded;
use crate::models::stress_spec::StressSpec;

/// Raw `cpu`, `ram` and `storage` query parameters. Kept as strings so an
/// omitted dimension can be told apart from an explicit zero.
#[derive(Debug, Default, Clone)]
pub(crate) struct StressQuery {
    pub(crate) cpu: Option<String>,
    pub(crate) ram: Option<String>,
    pub(crate) storage: Option<String>,
}

fn parse_dimension(value: &Option<String>) -> Option<u64> {
    match value.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match raw.parse::<u64>() {
            Ok(value) => Some(value),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u64::MAX),
            Err(_) => Some(0),
        },
    }
}

impl StressQuery {
    /// Reads the query string. A repeated parameter keeps its first value.
    pub(crate) fn from_raw(query: Option<&str>) -> Self {
        let mut parsed = StressQuery::default();

        for (key, value) in form_urlencoded::parse(query.unwrap_or("").as_bytes()) {
            let slot = match key.as_ref() {
                "cpu" => &mut parsed.cpu,
                "ram" => &mut parsed.ram,
                "storage" => &mut parsed.storage,
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        parsed
    }

    /// Local interpretation: a missing dimension means no load on it.
    pub(crate) fn to_spec(&self) -> StressSpec {
        StressSpec::new(
            parse_dimension(&self.cpu).unwrap_or(0),
            parse_dimension(&self.ram).unwrap_or(0),
            parse_dimension(&self.storage).unwrap_or(0),
        )
    }

    /// Parameters to send to a peer, only those the caller provided.
    pub(crate) fn forward_params(&self) -> Vec<(&'static str, String)> {
        [("cpu", &self.cpu), ("ram", &self.ram), ("storage", &self.storage)]
            .into_iter()
            .filter_map(|(name, value)| parse_dimension(value).map(|v| (name, v.to_string())))
            .collect()
    }
}
