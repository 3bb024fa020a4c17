use crate::{ClientError, Result};
use usersearch_core::{SearchErrorResponse, User};

/// Map a service reply to users or a typed error.
///
/// | status | outcome |
/// |---|---|
/// | 200 | body decoded as a list of users |
/// | 401 | [`ClientError::BadAccessToken`], body ignored |
/// | 400 | body decoded as [`SearchErrorResponse`] |
/// | other | [`ClientError::UnexpectedStatus`] |
///
/// The outcome depends only on `status` and `body`. `order_field` is echoed
/// into [`ClientError::OrderField`] so the caller sees which field was
/// rejected; it never changes which variant is returned.
pub fn classify_response(status: u16, body: &[u8], order_field: &str) -> Result<Vec<User>> {
    match status {
        200 => serde_json::from_slice(body).map_err(ClientError::Decode),
        401 => Err(ClientError::BadAccessToken),
        400 => Err(bad_request(body, order_field)),
        status => Err(ClientError::UnexpectedStatus { status }),
    }
}

fn bad_request(body: &[u8], order_field: &str) -> ClientError {
    match serde_json::from_slice::<SearchErrorResponse>(body) {
        Ok(resp) if resp.is_bad_order_field() => ClientError::OrderField {
            field: order_field.to_string(),
        },
        Ok(resp) => ClientError::BadRequest {
            message: resp.error,
        },
        Err(e) => ClientError::MalformedErrorBody(e),
    }
}
