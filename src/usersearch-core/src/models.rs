use serde::{Deserialize, Serialize};

/// Largest page the service will hand out in one response.
pub const MAX_PAGE_SIZE: usize = 25;

/// Error code the service returns when it does not know the sort field.
pub const ERROR_BAD_ORDER_FIELD: &str = "ErrorBadOrderField";

/// User represents one record returned by the search service
///
/// Fields missing from the payload decode as zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub about: String,
    pub gender: String,
}

/// Sort direction requested from the service.
///
/// On the wire this is a signed integer: negative sorts descending, zero
/// keeps the service's natural order and positive sorts ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    Desc,
    #[default]
    AsIs,
    Asc,
}

impl OrderBy {
    pub fn as_i8(self) -> i8 {
        match self {
            OrderBy::Desc => -1,
            OrderBy::AsIs => 0,
            OrderBy::Asc => 1,
        }
    }
}

impl From<i32> for OrderBy {
    fn from(value: i32) -> Self {
        match value.signum() {
            -1 => OrderBy::Desc,
            0 => OrderBy::AsIs,
            _ => OrderBy::Asc,
        }
    }
}

/// SearchRequest describes one page of users to fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// Page size the caller wants back
    pub limit: i32,
    /// Index of the first record
    pub offset: i32,
    /// Text filter, empty means no filter
    pub query: String,
    /// Field to sort by, empty lets the service pick its default
    pub order_field: String,
    pub order_by: OrderBy,
}

impl SearchRequest {
    pub fn new(limit: i32, offset: i32) -> Self {
        Self {
            limit,
            offset,
            ..Default::default()
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn order_by_field(mut self, field: impl Into<String>, order_by: OrderBy) -> Self {
        self.order_field = field.into();
        self.order_by = order_by;
        self
    }
}

/// SearchResponse is one page of users plus a hint that more exist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResponse {
    pub users: Vec<User>,
    pub next_page: bool,
}

/// SearchErrorResponse is the body the service sends with a 400
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchErrorResponse {
    #[serde(rename = "Error")]
    pub error: String,
}

impl SearchErrorResponse {
    pub fn is_bad_order_field(&self) -> bool {
        self.error == ERROR_BAD_ORDER_FIELD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_uses_service_field_names() {
        let json = r#"{"Id":1,"Name":"Serj","Age":23,"About":"123","Gender":"male"}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Serj");
        assert_eq!(user.age, 23);
        assert_eq!(user.about, "123");
        assert_eq!(user.gender, "male");

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["Name"], "Serj");
        assert!(back.get("name").is_none());
    }

    #[test]
    fn test_user_missing_fields_are_zeroed() {
        let user: User = serde_json::from_str(r#"{"Id":1,"Name":"x"}"#).unwrap();

        assert_eq!(
            user,
            User {
                id: 1,
                name: "x".to_string(),
                ..Default::default()
            }
        );

        let user: User = serde_json::from_str("{}").unwrap();
        assert_eq!(user, User::default());
    }

    #[test]
    fn test_user_age_accepts_wide_values() {
        let user: User = serde_json::from_str(r#"{"Id":1,"Age":4294967296}"#).unwrap();
        assert_eq!(user.age, 4_294_967_296);
    }

    #[test]
    fn test_order_by_follows_sign() {
        assert_eq!(OrderBy::from(-7), OrderBy::Desc);
        assert_eq!(OrderBy::from(-1), OrderBy::Desc);
        assert_eq!(OrderBy::from(0), OrderBy::AsIs);
        assert_eq!(OrderBy::from(1), OrderBy::Asc);
        assert_eq!(OrderBy::from(42), OrderBy::Asc);

        assert_eq!(OrderBy::Desc.as_i8(), -1);
        assert_eq!(OrderBy::AsIs.as_i8(), 0);
        assert_eq!(OrderBy::Asc.as_i8(), 1);
    }

    #[test]
    fn test_error_response_sentinel() {
        let resp: SearchErrorResponse =
            serde_json::from_str(r#"{"Error": "ErrorBadOrderField"}"#).unwrap();
        assert!(resp.is_bad_order_field());

        let resp: SearchErrorResponse =
            serde_json::from_str(r#"{"Error": "Something went wrong"}"#).unwrap();
        assert!(!resp.is_bad_order_field());
        assert_eq!(resp.error, "Something went wrong");
    }

    #[test]
    fn test_request_builders() {
        let req = SearchRequest::new(3, 6)
            .with_query("Serj")
            .order_by_field("Age", OrderBy::Desc);

        assert_eq!(req.limit, 3);
        assert_eq!(req.offset, 6);
        assert_eq!(req.query, "Serj");
        assert_eq!(req.order_field, "Age");
        assert_eq!(req.order_by, OrderBy::Desc);
    }
}
