pub use serde::{Deserialize, Serialize};

/// Checkbox-style flag values coming from browser forms.
pub fn truthy_flag(value: &str) -> bool {
    matches!(value, "true" | "on")
}

pub fn de_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Bool(bool),
        Str(String),
    }

    Ok(Option::<Repr>::deserialize(deserializer)?.map(|repr| match repr {
        Repr::Bool(value) => value,
        Repr::Str(value) => truthy_flag(&value),
    }))
}
