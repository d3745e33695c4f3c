use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const PET_TYPES: [&str; 10] = [
    "Dogs",
    "Cats",
    "Rabbits",
    "Hamsters",
    "Guinea Pigs",
    "Chinchillas",
    "Ferrets",
    "Birds",
    "Turtles",
    "Iguanas",
];

pub const LOCATIONS: [&str; 6] = [
    "Central (District 1-2)",
    "West (District 5-8, 22-23)",
    "East (District 14-18)",
    "North (District 19-21, 26-28)",
    "South (District 3-4, 9-10)",
    "North-East (District 11-13, 24-25)",
];

pub const SERVICES: [&str; 3] = ["Grooming", "Sitter", "Pet Hotel"];

/// The four-field filter sent to `/api/search`.
///
/// Every field is free text; an empty string means "unspecified". Missing keys
/// in an incoming body deserialize as empty strings.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCriteria {
    pub pet_type: String,
    pub location: String,
    pub pet_service: String,
    pub date_range: String,
}

impl SearchCriteria {
    pub fn new(
        pet_type: impl Into<String>,
        location: impl Into<String>,
        pet_service: impl Into<String>,
        date_range: impl Into<String>,
    ) -> SearchCriteria {
        SearchCriteria {
            pet_type: pet_type.into(),
            location: location.into(),
            pet_service: pet_service.into(),
            date_range: date_range.into(),
        }
    }
}

/// One matched listing. The client only ever displays it.
///
/// `id` is kept as whatever JSON the backend sent; missing fields read as empty.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SearchResult {
    pub id: Value,
    pub title: String,
    pub service: String,
    pub location: String,
    pub price: String,
    pub description: String,
}

impl SearchResult {
    pub fn new(
        id: u64,
        title: &str,
        service: &str,
        location: &str,
        price: &str,
        description: &str,
    ) -> SearchResult {
        SearchResult {
            id: Value::from(id),
            title: title.to_string(),
            service: service.to_string(),
            location: location.to_string(),
            price: price.to_string(),
            description: description.to_string(),
        }
    }
}
