/// Planet id used when a homeworld URL can't be parsed.
pub const FALLBACK_PLANET_ID: &str = "1";

/// A character returned by a people search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub homeworld_url: String,
}

impl Person {
    pub fn new(name: impl Into<String>, homeworld_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            homeworld_url: homeworld_url.into(),
        }
    }

    /// Extracts the planet id from the homeworld URL.
    ///
    /// Takes the last all-digit path segment, e.g. `https://swapi.dev/api/planets/5/` → `"5"`.
    /// Anything unparsable (blank URL, no numeric segment, zero, overflow) yields
    /// [`FALLBACK_PLANET_ID`], so the result is always a non-empty digit string.
    pub fn planet_id(&self) -> String {
        let url = self.homeworld_url.trim();
        if url.is_empty() {
            return FALLBACK_PLANET_ID.to_string();
        }

        let url = url.strip_suffix('/').unwrap_or(url);
        url.split('/')
            .rev()
            .find(|segment| !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()))
            .filter(|segment| matches!(segment.parse::<i32>(), Ok(n) if n > 0))
            .map(str::to_string)
            .unwrap_or_else(|| FALLBACK_PLANET_ID.to_string())
    }

    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Unknown Character"
        } else {
            self.name.as_str()
        }
    }
}
