use super::{EmployeeId, RequestId};
use crate::macros::setter;
use crate::request::{Request, RequestData};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub request_id: RequestId,
    #[serde(default)]
    pub leave_type: Option<String>,
    pub days: f64,
    #[serde(default)]
    pub status: Option<String>,
    /// Application date as reported by the service, shown verbatim
    #[serde(default)]
    pub applied_on: String,
}

/// Requests whose `applied_on` falls in the given month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    employee_id: EmployeeId,
    month: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<i32>,
}

impl MonthlySummary {
    pub fn new(employee_id: EmployeeId, month: u32) -> Self {
        Self {
            employee_id,
            month,
            year: None,
        }
    }

    setter!(opt year: i32);

    pub fn employee_id(&self) -> EmployeeId {
        self.employee_id
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The year sent with the query; the service assumes the current year when absent
    pub fn query_year(&self) -> Option<i32> {
        self.year
    }
}

impl Request for MonthlySummary {
    type Data = Self;
    type Response = Vec<SummaryRow>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/summary".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Query(self)
    }
}
