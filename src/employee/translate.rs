//! Translation between upstream wire records and the canonical model.
//!
//! Input has already passed the upstream client's shape checks, so these
//! conversions are total.

use crate::employee::model::{CreateEmployeeRequest, Employee};
use crate::upstream::types::{RawCreateRequest, RawEmployee};

impl From<RawEmployee> for Employee {
    fn from(raw: RawEmployee) -> Self {
        Self {
            id: raw.id,
            name: raw.employee_name,
            salary: raw.employee_salary,
            age: raw.employee_age,
            title: raw.employee_title,
            email: raw.employee_email,
        }
    }
}

impl From<CreateEmployeeRequest> for RawCreateRequest {
    fn from(request: CreateEmployeeRequest) -> Self {
        Self {
            name: request.name,
            salary: request.salary,
            age: request.age,
            title: request.title,
            email: request.email,
        }
    }
}

/// Convert one upstream record.
pub fn to_canonical(raw: RawEmployee) -> Employee {
    raw.into()
}

/// Convert a collection, preserving upstream order.
pub fn to_canonical_list(raw: Vec<RawEmployee>) -> Vec<Employee> {
    raw.into_iter().map(Employee::from).collect()
}

/// Shape a canonical create request for the upstream.
pub fn to_raw_create_request(request: CreateEmployeeRequest) -> RawCreateRequest {
    request.into()
}
