use crate::error::{LocatorError, Result};
use crate::solver::payload::{SolveRequest, SolveResponse};

/// Boundary to the remote transportation solver: one request, one optimal
/// shipment plan. Implementations must not keep state between calls.
pub trait TransportationSolver {
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse>;
}

/// Blocking HTTP client posting JSON to the solver endpoint.
pub struct HttpSolverClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpSolverClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TransportationSolver for HttpSolverClient {
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse> {
        let response = self.client.post(&self.endpoint).json(request).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(LocatorError::SolverStatus(status.as_u16()));
        }

        Ok(response.json()?)
    }
}
