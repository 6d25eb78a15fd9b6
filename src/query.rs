use std::fmt::Display;

/// Unit of distance accepted by the distance, radius and match endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    #[default]
    Km,
    Miles,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Km => "km",
            Unit::Miles => "miles",
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered key/value pairs rendered as a URL-encoded query string.
///
/// Optional parameters passed as `None` are omitted entirely rather than
/// rendered with an empty value, so the server sees only the keys the
/// caller actually supplied.
#[derive(Debug, Clone, Default)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a required parameter.
    pub fn append<V: Display>(mut self, key: &str, value: V) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Append an optional parameter; `None` leaves the key out.
    pub fn append_opt<V: Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.append(key, value),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render as `key=value&key=value` with both sides percent-encoded,
    /// in insertion order.
    pub fn build(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pair() {
        let query = QueryString::new().append("codes", "10001");
        assert_eq!(query.build(), "codes=10001");
    }

    #[test]
    fn test_pairs_keep_insertion_order() {
        let query = QueryString::new()
            .append("code", "10001")
            .append("radius", 25)
            .append("country", "US")
            .append("unit", Unit::Km);
        assert_eq!(query.build(), "code=10001&radius=25&country=US&unit=km");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let query = QueryString::new().append("city", "New York");
        assert_eq!(query.build(), "city=New%20York");
    }

    #[test]
    fn test_comma_separated_codes_are_encoded() {
        let query = QueryString::new().append("codes", "10001,10005,10006");
        assert_eq!(query.build(), "codes=10001%2C10005%2C10006");
    }

    #[test]
    fn test_none_is_omitted() {
        let query = QueryString::new()
            .append("city", "Bikaner")
            .append_opt("state_name", None::<&str>)
            .append("limit", 100);
        assert_eq!(query.build(), "city=Bikaner&limit=100");
    }

    #[test]
    fn test_some_is_appended() {
        let query = QueryString::new()
            .append("city", "Bikaner")
            .append_opt("state_name", Some("Rajasthan"));
        assert_eq!(query.build(), "city=Bikaner&state_name=Rajasthan");
    }

    #[test]
    fn test_empty_query() {
        let query = QueryString::new();
        assert!(query.is_empty());
        assert_eq!(query.build(), "");
    }

    #[test]
    fn test_unit_rendering() {
        assert_eq!(Unit::Km.to_string(), "km");
        assert_eq!(Unit::Miles.to_string(), "miles");
        assert_eq!(Unit::default(), Unit::Km);
    }
}
