//! Mock identity helpers for integration tests.
//!
//! Services behind the gateway receive the `user-id` header injected by the
//! gateway. In tests, `MockIdentity` builds that header directly.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use bson::oid::ObjectId;

use vet_domain::id::EmployeeId;
use vet_identity::USER_ID_HEADER;

/// Configurable identity injected into test requests.
pub struct MockIdentity {
    pub employee_id: EmployeeId,
}

impl MockIdentity {
    pub fn new(employee_id: EmployeeId) -> Self {
        Self { employee_id }
    }

    /// Identity with a freshly generated employee id.
    pub fn random() -> Self {
        Self::new(EmployeeId(ObjectId::new()))
    }

    pub fn header_name() -> HeaderName {
        HeaderName::from_static(USER_ID_HEADER)
    }

    pub fn header_value(&self) -> HeaderValue {
        HeaderValue::from_str(&self.employee_id.to_string()).unwrap()
    }

    /// Return headers as if the gateway injected them.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(Self::header_name(), self.header_value());
        map
    }
}
