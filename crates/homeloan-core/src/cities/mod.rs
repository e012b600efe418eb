//! City names offered by the location selects.
//!
//! A remote lookup (behind the `cities` feature) is tried first; any failure
//! falls back to the static table below. Either way the list is
//! deduplicated and sorted case-insensitively.

use serde_json::Value;

use crate::error::HomeLoanError;
use crate::HomeLoanResult;

#[cfg(feature = "cities")]
pub mod lookup;

/// Offered when the remote lookup is unavailable.
pub const FALLBACK_CITIES: &[&str] = &[
    "Agartala", "Agra", "Ahmedabad", "Ahmednagar", "Aizawl", "Ajmer", "Aligarh", "Almora",
    "Alwar", "Ambala", "Amravati", "Amritsar", "Anand", "Anantapur", "Ankleshwar", "Asansol",
    "Aurangabad", "Ayodhya", "Baddi", "Baharampur", "Bangalore", "Bareilly", "Belagavi",
    "Bellary", "Bhagalpur", "Bharatpur", "Bharuch", "Bhavnagar", "Bhilai", "Bhilwara",
    "Bhimavaram", "Bhopal", "Bhubaneswar", "Bhuj", "Bikaner", "Bilaspur", "Bokaro",
    "Chandigarh", "Chennai", "Coimbatore", "Cuttack", "Darbhanga", "Dehradun", "Delhi",
    "Dhanbad", "Dharwad", "Dibrugarh", "Durg", "Durgapur", "Erode", "Faridabad", "Firozabad",
    "Gandhinagar", "Gaya", "Ghaziabad", "Gorakhpur", "Greater Noida", "Guntur", "Gurgaon",
    "Guwahati", "Gwalior", "Haldwani", "Hisar", "Hubballi", "Hyderabad", "Indore", "Jabalpur",
    "Jaipur", "Jalandhar", "Jammu", "Jamnagar", "Jamshedpur", "Jhansi", "Jodhpur", "Kakinada",
    "Kalyan", "Kannur", "Kanpur", "Karimnagar", "Karur", "Katihar", "Kochi", "Kolhapur",
    "Kolkata", "Kollam", "Korba", "Kota", "Kottayam", "Kurnool", "Lucknow", "Ludhiana",
    "Madurai", "Mangalore", "Mathura", "Meerut", "Moradabad", "Mumbai", "Muzaffarpur",
    "Mysuru", "Nagpur", "Nanded", "Nashik", "Nellore", "Noida", "Palakkad", "Panaji",
    "Panchkula", "Panipat", "Patiala", "Patna", "Pondicherry", "Prayagraj", "Puducherry", "Pune",
    "Raipur", "Rajahmundry", "Rajkot", "Ranchi", "Raurkela", "Rewa", "Rohtak", "Saharanpur",
    "Salem", "Sangli", "Satara", "Shillong", "Shimla", "Sikar", "Siliguri", "Solapur",
    "Srinagar", "Surat", "Thane", "Thiruvananthapuram", "Thrissur", "Tiruchirappalli",
    "Tirunelveli", "Tirupati", "Udaipur", "Ujjain", "Vadodara", "Varanasi", "Vijayawada",
    "Visakhapatnam", "Warangal",
];

/// Deduplicate exact repeats and sort ignoring case.
pub fn normalize_cities<I, S>(cities: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut list: Vec<String> = cities
        .into_iter()
        .map(Into::into)
        .filter(|c| !c.trim().is_empty())
        .collect();
    list.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    list.dedup();
    list
}

pub fn fallback_cities() -> Vec<String> {
    normalize_cities(FALLBACK_CITIES.iter().copied())
}

/// Extract the city names from a lookup response body.
///
/// The body must be an object whose `data` member is a non-empty array of
/// strings.
pub fn parse_city_payload(body: &Value) -> HomeLoanResult<Vec<String>> {
    let data = body
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| HomeLoanError::CityLookup("response has no data array".into()))?;
    if data.is_empty() {
        return Err(HomeLoanError::CityLookup("no data in response".into()));
    }
    data.iter()
        .map(|v| {
            v.as_str()
                .map(str::to_string)
                .ok_or_else(|| HomeLoanError::CityLookup(format!("unexpected city entry {v}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_fallback_table_is_already_clean() {
        let list = fallback_cities();
        assert_eq!(list.len(), FALLBACK_CITIES.len());
        assert_eq!(list.first().map(String::as_str), Some("Agartala"));
        assert_eq!(list.last().map(String::as_str), Some("Warangal"));
    }

    #[test]
    fn test_normalize_dedups_and_ignores_case() {
        let list = normalize_cities(["pune", "Mumbai", "Pune", "agra", "Mumbai", " "]);
        assert_eq!(list, vec!["agra", "Mumbai", "Pune", "pune"]);
    }

    #[test]
    fn test_parse_payload_shapes() {
        let ok = json!({"error": false, "data": ["Pune", "Agra"]});
        assert_eq!(parse_city_payload(&ok).unwrap(), vec!["Pune", "Agra"]);
        assert!(parse_city_payload(&json!({"data": []})).is_err());
        assert!(parse_city_payload(&json!({"msg": "country not found"})).is_err());
        assert!(parse_city_payload(&json!({"data": ["Pune", 7]})).is_err());
        assert!(parse_city_payload(&json!([])).is_err());
    }
}
