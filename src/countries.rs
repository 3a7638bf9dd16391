//! Static ISO 3166-1 country catalog for the picker
//!
//! The form stores only the alpha-2 code; name and flag are display data.

/// One selectable country
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code
    pub code: &'static str,
    pub name: &'static str,
    /// Regional-indicator flag emoji
    pub flag: &'static str,
}

/// Alphabetical by name.
pub const COUNTRIES: &[Country] = &[
    Country { code: "AR", name: "Argentina", flag: "🇦🇷" },
    Country { code: "AU", name: "Australia", flag: "🇦🇺" },
    Country { code: "AT", name: "Austria", flag: "🇦🇹" },
    Country { code: "BD", name: "Bangladesh", flag: "🇧🇩" },
    Country { code: "BE", name: "Belgium", flag: "🇧🇪" },
    Country { code: "BR", name: "Brazil", flag: "🇧🇷" },
    Country { code: "BG", name: "Bulgaria", flag: "🇧🇬" },
    Country { code: "CA", name: "Canada", flag: "🇨🇦" },
    Country { code: "CL", name: "Chile", flag: "🇨🇱" },
    Country { code: "CN", name: "China", flag: "🇨🇳" },
    Country { code: "CO", name: "Colombia", flag: "🇨🇴" },
    Country { code: "HR", name: "Croatia", flag: "🇭🇷" },
    Country { code: "CZ", name: "Czechia", flag: "🇨🇿" },
    Country { code: "DK", name: "Denmark", flag: "🇩🇰" },
    Country { code: "EG", name: "Egypt", flag: "🇪🇬" },
    Country { code: "EE", name: "Estonia", flag: "🇪🇪" },
    Country { code: "FI", name: "Finland", flag: "🇫🇮" },
    Country { code: "FR", name: "France", flag: "🇫🇷" },
    Country { code: "DE", name: "Germany", flag: "🇩🇪" },
    Country { code: "GH", name: "Ghana", flag: "🇬🇭" },
    Country { code: "GR", name: "Greece", flag: "🇬🇷" },
    Country { code: "HK", name: "Hong Kong", flag: "🇭🇰" },
    Country { code: "HU", name: "Hungary", flag: "🇭🇺" },
    Country { code: "IS", name: "Iceland", flag: "🇮🇸" },
    Country { code: "IN", name: "India", flag: "🇮🇳" },
    Country { code: "ID", name: "Indonesia", flag: "🇮🇩" },
    Country { code: "IE", name: "Ireland", flag: "🇮🇪" },
    Country { code: "IL", name: "Israel", flag: "🇮🇱" },
    Country { code: "IT", name: "Italy", flag: "🇮🇹" },
    Country { code: "JP", name: "Japan", flag: "🇯🇵" },
    Country { code: "KE", name: "Kenya", flag: "🇰🇪" },
    Country { code: "LV", name: "Latvia", flag: "🇱🇻" },
    Country { code: "LT", name: "Lithuania", flag: "🇱🇹" },
    Country { code: "LU", name: "Luxembourg", flag: "🇱🇺" },
    Country { code: "MY", name: "Malaysia", flag: "🇲🇾" },
    Country { code: "MX", name: "Mexico", flag: "🇲🇽" },
    Country { code: "MA", name: "Morocco", flag: "🇲🇦" },
    Country { code: "NL", name: "Netherlands", flag: "🇳🇱" },
    Country { code: "NZ", name: "New Zealand", flag: "🇳🇿" },
    Country { code: "NG", name: "Nigeria", flag: "🇳🇬" },
    Country { code: "NO", name: "Norway", flag: "🇳🇴" },
    Country { code: "PK", name: "Pakistan", flag: "🇵🇰" },
    Country { code: "PE", name: "Peru", flag: "🇵🇪" },
    Country { code: "PH", name: "Philippines", flag: "🇵🇭" },
    Country { code: "PL", name: "Poland", flag: "🇵🇱" },
    Country { code: "PT", name: "Portugal", flag: "🇵🇹" },
    Country { code: "RO", name: "Romania", flag: "🇷🇴" },
    Country { code: "SA", name: "Saudi Arabia", flag: "🇸🇦" },
    Country { code: "RS", name: "Serbia", flag: "🇷🇸" },
    Country { code: "SG", name: "Singapore", flag: "🇸🇬" },
    Country { code: "SK", name: "Slovakia", flag: "🇸🇰" },
    Country { code: "SI", name: "Slovenia", flag: "🇸🇮" },
    Country { code: "ZA", name: "South Africa", flag: "🇿🇦" },
    Country { code: "KR", name: "South Korea", flag: "🇰🇷" },
    Country { code: "ES", name: "Spain", flag: "🇪🇸" },
    Country { code: "LK", name: "Sri Lanka", flag: "🇱🇰" },
    Country { code: "SE", name: "Sweden", flag: "🇸🇪" },
    Country { code: "CH", name: "Switzerland", flag: "🇨🇭" },
    Country { code: "TW", name: "Taiwan", flag: "🇹🇼" },
    Country { code: "TH", name: "Thailand", flag: "🇹🇭" },
    Country { code: "TR", name: "Türkiye", flag: "🇹🇷" },
    Country { code: "UA", name: "Ukraine", flag: "🇺🇦" },
    Country { code: "AE", name: "United Arab Emirates", flag: "🇦🇪" },
    Country { code: "GB", name: "United Kingdom", flag: "🇬🇧" },
    Country { code: "US", name: "United States", flag: "🇺🇸" },
    Country { code: "UY", name: "Uruguay", flag: "🇺🇾" },
    Country { code: "VN", name: "Vietnam", flag: "🇻🇳" },
];

/// Case-insensitive search over names and alpha-2 codes.
///
/// An empty or whitespace query returns the full catalog.
pub fn search(query: &str) -> Vec<&'static Country> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return COUNTRIES.iter().collect();
    }
    COUNTRIES
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&q) || c.code.eq_ignore_ascii_case(&q))
        .collect()
}

/// Look up a country by its alpha-2 code.
pub fn by_code(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_unique_and_two_letters() {
        let mut seen = HashSet::new();
        for country in COUNTRIES {
            assert_eq!(country.code.len(), 2, "{}", country.code);
            assert!(country.code.chars().all(|c| c.is_ascii_uppercase()));
            assert!(seen.insert(country.code), "duplicate {}", country.code);
        }
    }

    #[test]
    fn test_sorted_by_name() {
        for pair in COUNTRIES.windows(2) {
            assert!(pair[0].name <= pair[1].name, "{} > {}", pair[0].name, pair[1].name);
        }
    }

    #[test]
    fn test_empty_query_returns_all() {
        assert_eq!(search("").len(), COUNTRIES.len());
        assert_eq!(search("  ").len(), COUNTRIES.len());
    }

    #[test]
    fn test_search_by_name_is_case_insensitive() {
        let matches = search("uniTED");
        let names: Vec<_> = matches.iter().map(|c| c.name).collect();
        assert_eq!(names, ["United Arab Emirates", "United Kingdom", "United States"]);
    }

    #[test]
    fn test_search_by_code() {
        let matches = search("us");
        assert!(matches.iter().any(|c| c.code == "US"));
    }

    #[test]
    fn test_search_no_match() {
        assert!(search("zzzz").is_empty());
    }

    #[test]
    fn test_by_code_ignores_case() {
        assert_eq!(by_code("us").map(|c| c.name), Some("United States"));
        assert_eq!(by_code("US").map(|c| c.name), Some("United States"));
        assert!(by_code("XX").is_none());
    }
}
