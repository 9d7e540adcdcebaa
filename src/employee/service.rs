//! Employee operations exposed to the routing layer.
//!
//! Each operation is one stateless request/response cycle: fetch from the
//! upstream, translate, reduce, return. Snapshots are never cached or shared
//! between calls, and multi-call operations run their upstream calls in
//! sequence.

use crate::employee::aggregate::{self, TOP_EARNERS_LIMIT};
use crate::employee::error::{EmployeeError, EmployeeResult};
use crate::employee::model::{CreateEmployeeRequest, Employee};
use crate::employee::translate;
use crate::upstream::{EmployeeUpstream, UpstreamError};

/// Facade over an [`EmployeeUpstream`].
#[derive(Debug, Clone)]
pub struct EmployeeService<U> {
    upstream: U,
}

impl<U: EmployeeUpstream> EmployeeService<U> {
    pub fn new(upstream: U) -> Self {
        Self { upstream }
    }

    pub fn upstream(&self) -> &U {
        &self.upstream
    }

    async fn snapshot(&self) -> EmployeeResult<Vec<Employee>> {
        let raw = self.upstream.fetch_all().await?;
        Ok(translate::to_canonical_list(raw))
    }

    /// Full collection in upstream order.
    pub async fn list_all(&self) -> EmployeeResult<Vec<Employee>> {
        let employees = self.snapshot().await?;
        tracing::info!(count = employees.len(), "Fetched all employees");
        Ok(employees)
    }

    /// Employees whose name contains `fragment`, ignoring case. No match is
    /// an empty success, not `NotFound`.
    pub async fn search_by_name(&self, fragment: &str) -> EmployeeResult<Vec<Employee>> {
        let matches = aggregate::search_by_name(self.snapshot().await?, fragment);
        tracing::info!(fragment, count = matches.len(), "Searched employees by name");
        Ok(matches)
    }

    /// The employee with exactly this id.
    pub async fn get_by_id(&self, id: &str) -> EmployeeResult<Employee> {
        match self.upstream.fetch_one(id).await {
            Ok(raw) => Ok(translate::to_canonical(raw)),
            Err(UpstreamError::NotFound) => {
                tracing::info!(id, "Employee not found");
                Err(EmployeeError::NotFound(format!("Employee {id} not found")))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Highest salary across all employees, 0 when there are none.
    pub async fn highest_salary(&self) -> EmployeeResult<u64> {
        let highest = aggregate::highest_salary(&self.snapshot().await?);
        tracing::info!(highest, "Computed highest salary");
        Ok(highest)
    }

    /// Names of the `n` highest earners; ties keep upstream order.
    pub async fn top_earner_names(&self, n: usize) -> EmployeeResult<Vec<String>> {
        let names = aggregate::top_earner_names(self.snapshot().await?, n);
        tracing::info!(requested = n, returned = names.len(), "Computed top earners");
        Ok(names)
    }

    pub async fn top_ten_names(&self) -> EmployeeResult<Vec<String>> {
        self.top_earner_names(TOP_EARNERS_LIMIT).await
    }

    /// Create an employee; the returned record carries the upstream id.
    pub async fn create(&self, request: CreateEmployeeRequest) -> EmployeeResult<Employee> {
        let raw_request = translate::to_raw_create_request(request);
        match self.upstream.create(&raw_request).await {
            Ok(raw) => {
                let employee = translate::to_canonical(raw);
                tracing::info!(id = %employee.id, "Created employee");
                Ok(employee)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Employee creation failed");
                Err(e.into())
            }
        }
    }

    /// Delete by id, returning the deleted employee's name.
    ///
    /// The upstream deletes by name, so the id is resolved first. An unknown
    /// id fails with `NotFound` before any delete is issued. The window
    /// between resolution and deletion is not guarded: a same-named record
    /// created in between may be the one removed.
    pub async fn delete_by_id(&self, id: &str) -> EmployeeResult<String> {
        let name = self.get_by_id(id).await?.name;

        match self.upstream.delete_by_name(&name).await {
            Ok(true) => {
                tracing::info!(id, name = %name, "Deleted employee");
                Ok(name)
            }
            Ok(false) => {
                tracing::error!(id, name = %name, "Upstream reported employee was not deleted");
                Err(EmployeeError::DeleteFailed(format!(
                    "Failed to delete employee {id}"
                )))
            }
            Err(e) => {
                tracing::error!(id, name = %name, error = %e, "Employee delete call failed");
                Err(EmployeeError::DeleteFailed(format!(
                    "Failed to delete employee {id}"
                )))
            }
        }
    }
}
