use serde_json::Value;

/// Message returned by [`WeatherResponse::summary`] when an expected field is missing.
pub const NOT_FOUND_MESSAGE: &str = "Could not find weather info.";

/// Raw JSON body returned by the current weather endpoint.
///
/// The payload is kept as-is; the accessors below only read the fields they need:
/// `name`, `weather[0].description`, `weather[0].icon` and `main.temp`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherResponse(Value);

impl WeatherResponse {
    pub fn new(json: Value) -> Self {
        Self(json)
    }

    /// `null`, `{}`, `[]` and `""` all count as an empty response.
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::String(s) => s.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }

    /// Three-line summary: city, conditions and temperature.
    ///
    /// Returns an empty string for an empty response and [`NOT_FOUND_MESSAGE`]
    /// when any of the fields is missing.
    pub fn summary(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let fields = (
            self.0.get("name"),
            self.first_condition().and_then(|w| w.get("description")),
            self.0.get("main").and_then(|m| m.get("temp")),
        );

        match fields {
            (Some(name), Some(desc), Some(temp)) => format!(
                "City: {} \nConditions: {} \nTemperature (F): {}",
                display(name),
                display(desc),
                display(temp),
            ),
            _ => NOT_FOUND_MESSAGE.to_string(),
        }
    }

    /// Icon code of the first weather condition, e.g. `04d`.
    pub fn icon_code(&self) -> Option<&str> {
        self.first_condition()?.get("icon")?.as_str()
    }

    pub fn as_json(&self) -> &Value {
        &self.0
    }

    fn first_condition(&self) -> Option<&Value> {
        self.0.get("weather")?.get(0)
    }
}

// Strings print bare, everything else in its JSON form.
fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
