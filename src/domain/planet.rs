/// A character's homeworld.
///
/// Fields hold the API's raw strings. The `display_*` accessors normalize the
/// placeholder values SWAPI uses (`"unknown"`, `"null"`, empty) for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    pub name: String,
    pub terrain: String,
    pub gravity: String,
    pub population: String,
}

const UNKNOWN: &str = "Unknown";

fn is_placeholder(value: &str) -> bool {
    value.trim().is_empty() || value == "null" || value == "unknown"
}

impl Planet {
    pub fn unknown() -> Self {
        Self {
            name: UNKNOWN.to_string(),
            terrain: UNKNOWN.to_string(),
            gravity: UNKNOWN.to_string(),
            population: UNKNOWN.to_string(),
        }
    }

    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() || self.name == "null" {
            "Unknown Planet"
        } else {
            self.name.as_str()
        }
    }

    pub fn display_terrain(&self) -> &str {
        if is_placeholder(&self.terrain) { UNKNOWN } else { self.terrain.as_str() }
    }

    pub fn display_gravity(&self) -> &str {
        if is_placeholder(&self.gravity) { UNKNOWN } else { self.gravity.as_str() }
    }

    /// Human-friendly population: `"0"` is "Uninhabited", large numbers get K/M/B suffixes.
    pub fn display_population(&self) -> String {
        let population = self.population.as_str();
        if is_placeholder(population) {
            return UNKNOWN.to_string();
        }
        if population == "0" {
            return "Uninhabited".to_string();
        }

        let digits: String = population.chars().filter(char::is_ascii_digit).collect();
        match digits.parse::<u64>() {
            Ok(n) => format_count(n),
            Err(_) => capitalize_first(population),
        }
    }
}

/// Formats with one truncated decimal place. Exact multiples drop the decimal,
/// so `1_000_000` is `1M` while `1_050_000` stays `1.0M`.
fn format_count(n: u64) -> String {
    const SCALES: [(u64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

    for (unit, suffix) in SCALES {
        if n >= unit {
            let tenths = n / (unit / 10);
            return if n % unit == 0 {
                format!("{}{suffix}", n / unit)
            } else {
                format!("{}.{}{suffix}", tenths / 10, tenths % 10)
            };
        }
    }
    n.to_string()
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_population(population: &str) -> Planet {
        Planet {
            population: population.to_string(),
            ..Planet::unknown()
        }
    }

    macro_rules! test_population_display {
        ( $($name:ident: $input:expr => $expected:expr,)+ ) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(with_population($input).display_population(), $expected);
                }
            )+
        };
    }

    test_population_display! {
        test_population_zero_is_uninhabited: "0" => "Uninhabited",
        test_population_exact_million: "1000000" => "1M",
        test_population_unknown: "unknown" => "Unknown",
        test_population_empty: "" => "Unknown",
        test_population_null: "null" => "Unknown",
        test_population_small: "200" => "200",
        test_population_thousands_with_decimal: "1500" => "1.5K",
        test_population_truncates_not_rounds: "1999999" => "1.9M",
        test_population_billions: "2000000000" => "2B",
        test_population_tatooine: "200000" => "200K",
        test_population_coruscant: "1000000000000" => "1000B",
        test_population_commas_stripped: "1,200,000" => "1.2M",
        test_population_non_numeric_capitalized: "many" => "Many",
        test_population_inexact_keeps_zero_decimal: "1050000" => "1.0M",
        test_population_just_over_thousand: "1001" => "1.0K",
        test_population_just_over_billion: "1000000001" => "1.0B",
    }

    #[test]
    fn test_display_name_placeholders() {
        let planet = Planet { name: "null".to_string(), ..Planet::unknown() };
        assert_eq!(planet.display_name(), "Unknown Planet");
        let planet = Planet { name: "Tatooine".to_string(), ..Planet::unknown() };
        assert_eq!(planet.display_name(), "Tatooine");
    }

    #[test]
    fn test_display_terrain_and_gravity() {
        let planet = Planet {
            name: "Hoth".to_string(),
            terrain: "unknown".to_string(),
            gravity: "1.1 standard".to_string(),
            population: "unknown".to_string(),
        };
        assert_eq!(planet.display_terrain(), "Unknown");
        assert_eq!(planet.display_gravity(), "1.1 standard");
    }
}
