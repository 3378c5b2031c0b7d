use serde::Serialize;

/// Success envelope: every non-search response body is `{"data": <payload>}`.
#[derive(Debug, Serialize)]
pub struct Data<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Data<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Body for operations that only acknowledge, e.g. delete and logout.
pub fn ok() -> Data<&'static str> {
    Data::new("OK")
}
