//! Request-side and result-side halves of a user search.
//!
//! The client asks the service for one record more than the caller wants.
//! If that extra record comes back, there is another page; the caller never
//! sees the extra record itself.

use url::form_urlencoded;

use crate::models::{SearchRequest, SearchResponse, User, MAX_PAGE_SIZE};

/// Rejected before anything is sent to the service
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("limit must be >= 0, got {0}")]
    NegativeLimit(i32),

    #[error("offset must be >= 0, got {0}")]
    NegativeOffset(i32),
}

/// Page sizes for one search call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// What the caller asked for
    pub requested: usize,
    /// What is sent to the service
    pub fetch: usize,
    /// Index of the first record, as sent
    pub offset: usize,
}

impl PageWindow {
    /// Validate a request and work out the outbound limit.
    ///
    /// Limits above [`MAX_PAGE_SIZE`] are clamped to it; anything else is
    /// bumped by one so the response tells us whether another page exists.
    pub fn for_request(req: &SearchRequest) -> Result<Self, ValidationError> {
        let requested =
            usize::try_from(req.limit).map_err(|_| ValidationError::NegativeLimit(req.limit))?;
        let offset =
            usize::try_from(req.offset).map_err(|_| ValidationError::NegativeOffset(req.offset))?;

        let fetch = if requested > MAX_PAGE_SIZE {
            MAX_PAGE_SIZE
        } else {
            requested + 1
        };

        Ok(Self {
            requested,
            fetch,
            offset,
        })
    }

    /// Turn the users the service returned into a page for the caller.
    ///
    /// Only an exact match on `fetch` counts as "more available". Any other
    /// length is passed through untouched.
    pub fn assemble(&self, mut users: Vec<User>) -> SearchResponse {
        if users.len() == self.fetch {
            users.truncate(self.requested);
            SearchResponse {
                users,
                next_page: true,
            }
        } else {
            SearchResponse {
                users,
                next_page: false,
            }
        }
    }
}

/// Build the query string for the search endpoint.
///
/// Empty `query` and `order_field` are still sent; the service reads them as
/// "no filter" and "default field".
pub fn encode_query(req: &SearchRequest, window: &PageWindow) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("limit", &window.fetch.to_string())
        .append_pair("offset", &window.offset.to_string())
        .append_pair("query", &req.query)
        .append_pair("order_field", &req.order_field)
        .append_pair("order_by", &req.order_by.as_i8().to_string())
        .finish()
}
