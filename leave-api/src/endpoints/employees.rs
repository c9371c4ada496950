use super::EmployeeId;
use crate::macros::setter;
use crate::request::{Request, RequestData};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Leave balance the service assigns when none is given
pub const DEFAULT_LEAVE_BALANCE: f64 = 20.0;

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: EmployeeId,
    pub name: String,
    /// Remaining leave days; approved requests are deducted server-side
    pub total_leave_balance: f64,
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct ListEmployees;

impl ListEmployees {
    pub fn new() -> Self {
        Self
    }
}

impl Request for ListEmployees {
    type Data = ();
    type Response = Vec<Employee>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/employees".into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateEmployee {
    name: String,
    total_leave_balance: f64,
}

impl CreateEmployee {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_leave_balance: DEFAULT_LEAVE_BALANCE,
        }
    }

    setter!(total_leave_balance: f64);

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Request for CreateEmployee {
    type Data = Self;
    type Response = CreatedEmployee;

    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/employees".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}

// Responses

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedEmployee {
    pub employee_id: EmployeeId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub total_leave_balance: Option<f64>,
}
