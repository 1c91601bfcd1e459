use std::future::Future;
use std::time::{Duration, Instant};

use futures_util::future::join_all;

use crate::error::TransportError;

use super::client::{ProbeClient, ProbeResponse, RequestOptions};

/// Runs `count` futures at once and waits for every one of them.
pub async fn fan_out<F, Fut, T>(count: usize, make: F) -> Vec<T>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = T>,
{
    join_all((0..count).map(make)).await
}

/// Every result of a burst plus the wall time until the last one resolved.
#[derive(Debug)]
pub struct BurstOutcome {
    pub results: Vec<Result<ProbeResponse, TransportError>>,
    pub elapsed: Duration,
}

impl BurstOutcome {
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }

    #[must_use]
    pub fn any_status(&self, status: u16) -> bool {
        self.results
            .iter()
            .any(|result| matches!(result, Ok(response) if response.status() == status))
    }

    #[must_use]
    pub fn failures(&self) -> usize {
        self.results.iter().filter(|result| result.is_err()).count()
    }
}

impl ProbeClient {
    /// Sends `count` identical requests concurrently.
    pub async fn burst(
        &self,
        count: usize,
        method: reqwest::Method,
        url: &str,
        options: &RequestOptions,
    ) -> BurstOutcome {
        let started = Instant::now();
        let results = fan_out(count, |_| {
            self.request(method.clone(), url, options.clone())
        })
        .await;
        BurstOutcome {
            results,
            elapsed: started.elapsed(),
        }
    }
}
