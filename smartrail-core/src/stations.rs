//! Static station directory backing the search-form autocomplete.

/// Stations offered as suggestions. A static list; no persistence behind it.
pub const STATIONS: &[&str] = &[
    "Mumbai CSMT",
    "New Delhi (NDLS)",
    "Bangalore City",
    "Kolkata (Howrah)",
    "Chennai Central",
    "Pune Junction",
    "Goa (Madgaon)",
    "Hyderabad",
    "Ahmedabad",
    "Jaipur",
    "Lucknow",
    "Kanpur",
    "Nagpur",
    "Indore",
    "Thane",
    "Bhopal",
    "Visakhapatnam",
    "Patna",
    "Vadodara",
    "Ghaziabad",
    "Ludhiana",
    "Agra Cantt",
    "Nashik",
    "Faridabad",
    "Meerut",
    "Rajkot",
    "Varanasi",
    "Srinagar",
    "Aurangabad",
    "Dhanbad",
    "Amritsar",
    "Allahabad",
    "Ranchi",
    "Howrah",
    "Coimbatore",
    "Jabalpur",
    "Gwalior",
    "Vijayawada",
    "Jodhpur",
    "Madurai",
    "Raipur",
    "Kota",
    "Guwahati",
    "Chandigarh",
    "Shimla",
    "Mysore",
    "Ooty (Udagamandalam)",
    "Darjeeling",
];

/// Case-insensitive prefix filter. Suggestions only kick in from the second
/// typed character onward.
pub fn suggest(prefix: &str) -> Vec<&'static str> {
    if prefix.chars().count() < 2 {
        return Vec::new();
    }
    let needle = prefix.to_lowercase();
    STATIONS
        .iter()
        .copied()
        .filter(|station| station.to_lowercase().starts_with(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_filter_is_case_insensitive() {
        assert_eq!(suggest("mum"), vec!["Mumbai CSMT"]);
        assert_eq!(suggest("MUM"), vec!["Mumbai CSMT"]);
    }

    #[test]
    fn test_short_prefix_yields_nothing() {
        assert!(suggest("m").is_empty());
        assert!(suggest("").is_empty());
    }

    #[test]
    fn test_gate_counts_characters_not_bytes() {
        // One character, three bytes.
        assert!(suggest("म").is_empty());
        assert!(suggest("ü").is_empty());
    }

    #[test]
    fn test_multiple_matches() {
        let hits = suggest("ja");
        assert!(hits.contains(&"Jaipur"));
        assert!(hits.contains(&"Jabalpur"));
    }
}
