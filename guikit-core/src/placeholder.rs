use serde::{Deserialize, Serialize};

/// Substitutes placeholders in displayed text.
///
/// Items are deserialized raw so they can be cached, the resolver runs later
/// for every viewer.
pub trait PlaceholderResolver {
    fn apply(&self, text: &str) -> String;

    fn apply_lines(&self, lines: &[String]) -> Vec<String> {
        lines.iter().map(|line| self.apply(line)).collect()
    }
}

impl<F> PlaceholderResolver for F
where
    F: Fn(&str) -> String,
{
    fn apply(&self, text: &str) -> String {
        self(text)
    }
}

/// Literal key to value replacement, in insertion order.
///
/// Keys are matched exactly, so include the delimiters: `{player}`, `%balance%`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Placeholders {
    values: Vec<Placeholder>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    pub key: String,
    pub value: String,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a placeholder, replacing the value of an existing key.
    pub fn add(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        let key = key.into();
        let value = value.to_string();
        match self.values.iter_mut().find(|p| p.key == key) {
            Some(existing) => existing.value = value,
            None => self.values.push(Placeholder { key, value }),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PlaceholderResolver for Placeholders {
    fn apply(&self, text: &str) -> String {
        self.values
            .iter()
            .fold(text.to_string(), |acc, p| acc.replace(&p.key, &p.value))
    }
}

#[cfg(test)]
mod test {
    use super::{PlaceholderResolver, Placeholders};

    #[test]
    fn test_replaces_every_occurrence() {
        let placeholders = Placeholders::new()
            .add("{player}", "Steve")
            .add("{balance}", 250);
        assert_eq!(
            placeholders.apply("{player} has {balance} coins, {player}!"),
            "Steve has 250 coins, Steve!"
        );
    }

    #[test]
    fn test_add_overrides_value() {
        let placeholders = Placeholders::new().add("{a}", 1).add("{a}", 2);
        assert_eq!(placeholders.apply("{a}"), "2");
    }

    #[test]
    fn test_apply_lines() {
        let placeholders = Placeholders::new().add("%rank%", "Admin");
        let lines = vec!["Rank: %rank%".to_string(), "no placeholder".to_string()];
        assert_eq!(
            placeholders.apply_lines(&lines),
            vec!["Rank: Admin", "no placeholder"]
        );
    }

    #[test]
    fn test_closure_resolver() {
        let upper = |text: &str| text.to_uppercase();
        assert_eq!(upper.apply("shout"), "SHOUT");
    }

    #[test]
    fn test_from_yaml() {
        let placeholders: Placeholders =
            serde_yaml::from_str("- key: '{world}'\n  value: nether\n").unwrap();
        assert_eq!(placeholders.apply("in {world}"), "in nether");
    }
}
