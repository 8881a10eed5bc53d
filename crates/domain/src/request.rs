//! Record of a single debt-check inquiry and its raw response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use debtcheck_core::Entity;

use crate::cuit::Cuit;
use crate::enums::{RequestStatus, RequestType};
use crate::id::DebtCheckRequestId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtCheckRequest {
    id: DebtCheckRequestId,
    /// CUIT the inquiry was made for.
    pub cuit: Cuit,
    pub timestamp: DateTime<Utc>,
    pub request_type: RequestType,
    /// Response time in milliseconds.
    pub response_time: u64,
    pub status: RequestStatus,
    /// Raw response payload, stored as received.
    pub content: String,
}

impl DebtCheckRequest {
    pub fn new(
        id: DebtCheckRequestId,
        cuit: Cuit,
        timestamp: DateTime<Utc>,
        request_type: RequestType,
        response_time: u64,
        status: RequestStatus,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            cuit,
            timestamp,
            request_type,
            response_time,
            status,
            content: content.into(),
        }
    }

    pub fn is_successful(&self) -> bool {
        self.status == RequestStatus::Successful
    }
}

impl Entity for DebtCheckRequest {
    type Id = DebtCheckRequestId;
    const KIND: &'static str = "debt_check_request";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl_identity_equality!(DebtCheckRequest);
