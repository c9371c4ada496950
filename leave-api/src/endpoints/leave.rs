use super::{Decision, EmployeeId, RequestId, STATUS_PENDING};
use crate::macros::setter;
use crate::request::{Request, RequestData};
use chrono::NaiveDate;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Leave type used when the form leaves it blank
pub const DEFAULT_LEAVE_TYPE: &str = "Casual";

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub request_id: RequestId,
    pub employee_id: EmployeeId,
    #[serde(default)]
    pub leave_type: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Inclusive day count, computed by the service
    pub days: f64,
    /// Usually `Pending`, `Approved` or `Rejected`, but never guaranteed
    #[serde(default)]
    pub status: Option<String>,
}

impl LeaveRequest {
    /// Whether the request is still awaiting a decision.
    ///
    /// Only an exact `Pending` counts; other spellings are displayed as pending
    /// but cannot be acted on.
    pub fn is_pending(&self) -> bool {
        self.status.as_deref() == Some(STATUS_PENDING)
    }
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct ListLeave;

impl ListLeave {
    pub fn new() -> Self {
        Self
    }
}

impl Request for ListLeave {
    type Data = ();
    type Response = Vec<LeaveRequest>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/leave".into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplyLeave {
    employee_id: EmployeeId,
    leave_type: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl ApplyLeave {
    pub fn new(employee_id: EmployeeId, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            employee_id,
            leave_type: DEFAULT_LEAVE_TYPE.to_string(),
            start_date,
            end_date,
        }
    }

    setter!(leave_type: String);

    pub fn employee_id(&self) -> EmployeeId {
        self.employee_id
    }
}

impl Request for ApplyLeave {
    type Data = Self;
    type Response = AppliedLeave;

    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/leave".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateLeaveStatus {
    #[serde(skip)]
    request_id: RequestId,
    status: Decision,
}

impl UpdateLeaveStatus {
    pub fn new(request_id: RequestId, status: Decision) -> Self {
        Self { request_id, status }
    }

    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    pub fn decision(&self) -> Decision {
        self.status
    }
}

impl Request for UpdateLeaveStatus {
    type Data = Self;
    type Response = StatusUpdate;

    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/leave/{}", self.request_id).into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}

// Responses

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedLeave {
    pub request_id: RequestId,
    #[serde(default)]
    pub employee_id: Option<EmployeeId>,
    #[serde(default)]
    pub days: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Acknowledgement of a status change.
///
/// A real change comes back as `new_status`; repeating the current status
/// yields `status` plus `message: "no_change"`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    #[serde(default)]
    pub request_id: Option<RequestId>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub new_status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl StatusUpdate {
    pub fn is_no_change(&self) -> bool {
        self.message.as_deref() == Some("no_change")
    }
}
