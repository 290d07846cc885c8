use crate::utils::validation::trimmed_string;
use serde::Deserialize;
use validator::Validate;

/// Fields accepted when creating or replacing a place.
#[derive(Deserialize, Validate, Debug)]
pub struct PlaceBody {
    #[serde(default, deserialize_with = "trimmed_string")]
    #[validate(length(min = 1, message = "The name field is required."))]
    pub name: String,
    #[serde(default, deserialize_with = "trimmed_string")]
    #[validate(length(min = 1, message = "The city field is required."))]
    pub city: String,
    #[serde(default, deserialize_with = "trimmed_string")]
    #[validate(length(min = 1, message = "The state field is required."))]
    pub state: String,
}
