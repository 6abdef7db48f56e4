use serde_json::Value;

/// Where to fetch a rate and how to find it in the JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderDescriptor {
    pub name: String,
    pub url: String,
    /// Object keys leading to the INR-per-USD number
    pub path: Vec<String>,
}

impl ProviderDescriptor {
    pub fn new(name: impl Into<String>, url: impl Into<String>, path: &[&str]) -> Self {
        ProviderDescriptor {
            name: name.into(),
            url: url.into(),
            path: path.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Follow `path` through `body`. Numbers encoded as strings are accepted.
    pub fn extract(&self, body: &Value) -> Option<f64> {
        let mut node = body;
        for key in &self.path {
            node = node.get(key)?;
        }
        match node {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// The three public providers, in cascade order.
pub fn default_providers() -> Vec<ProviderDescriptor> {
    vec![
        ProviderDescriptor::new(
            "open.er-api.com",
            "https://open.er-api.com/v6/latest/USD",
            &["rates", "INR"],
        ),
        ProviderDescriptor::new(
            "fawazahmed0/currency-api",
            "https://cdn.jsdelivr.net/npm/@fawazahmed0/currency-api@latest/v1/currencies/usd.json",
            &["usd", "inr"],
        ),
        ProviderDescriptor::new(
            "exchangerate-api.com",
            "https://v6.exchangerate-api.com/v6/latest/USD",
            &["conversion_rates", "INR"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_order() {
        let providers = default_providers();
        let names: Vec<&str> = providers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["open.er-api.com", "fawazahmed0/currency-api", "exchangerate-api.com"]
        );
    }

    #[test]
    fn test_extract_each_schema() {
        let providers = default_providers();
        assert_eq!(
            providers[0].extract(&json!({"result": "success", "rates": {"INR": 83.2}})),
            Some(83.2)
        );
        assert_eq!(
            providers[1].extract(&json!({"date": "2024-06-01", "usd": {"inr": 83.4}})),
            Some(83.4)
        );
        assert_eq!(
            providers[2].extract(&json!({"conversion_rates": {"INR": 83.6}})),
            Some(83.6)
        );
    }

    #[test]
    fn test_extract_missing_or_wrong_type() {
        let p = &default_providers()[0];
        assert_eq!(p.extract(&json!({"rates": {"EUR": 0.9}})), None);
        assert_eq!(p.extract(&json!({"rates": {"INR": null}})), None);
        assert_eq!(p.extract(&json!([1, 2, 3])), None);
        assert_eq!(p.extract(&json!({"rates": {"INR": "83.1"}})), Some(83.1));
    }
}
