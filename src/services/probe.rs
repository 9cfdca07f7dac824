use crate::domain::models::{ProbeReport, WaitReport};
use std::time::{Duration, Instant};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);
const FIRST_PAUSE: Duration = Duration::from_millis(500);
const MAX_PAUSE: Duration = Duration::from_secs(5);

/// One blocking GET against the health endpoint.
///
/// Any 2xx counts as healthy; a network failure and a non-2xx status both
/// count as not, and the report records which it was. The body is discarded.
pub fn probe(url: &str) -> ProbeReport {
    let client = match reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
    {
        Ok(c) => c,
        Err(e) => return failure(url, e.to_string()),
    };
    match client.get(url).send() {
        Ok(resp) => {
            let status = resp.status();
            ProbeReport {
                url: url.to_string(),
                healthy: status.is_success(),
                status: Some(status.as_u16()),
                error: if status.is_success() {
                    None
                } else {
                    Some(format!("unexpected status {}", status))
                },
            }
        }
        Err(e) => failure(url, e.to_string()),
    }
}

/// Poll the health endpoint until it answers 2xx or the deadline passes.
///
/// Pauses start at 500ms and double up to a 5s cap. The deadline is checked
/// after each attempt, so at least one probe always happens and the wait can
/// overshoot the deadline by at most one pause plus one request timeout.
pub fn wait_until_healthy(url: &str, timeout: Duration) -> WaitReport {
    let started = Instant::now();
    let mut pause = FIRST_PAUSE;
    let mut attempts = 0u32;
    loop {
        std::thread::sleep(pause);
        attempts += 1;
        let report = probe(url);
        if report.healthy || started.elapsed() >= timeout {
            return WaitReport {
                healthy: report.healthy,
                attempts,
                elapsed_ms: started.elapsed().as_millis() as u64,
                last: report,
            };
        }
        pause = next_pause(pause);
    }
}

fn next_pause(pause: Duration) -> Duration {
    (pause * 2).min(MAX_PAUSE)
}

fn failure(url: &str, error: String) -> ProbeReport {
    ProbeReport {
        url: url.to_string(),
        healthy: false,
        status: None,
        error: Some(error),
    }
}

#[cfg(test)]
mod tests {
    use super::{next_pause, FIRST_PAUSE};

    #[test]
    fn pause_doubles_then_holds_at_cap() {
        let mut pause = FIRST_PAUSE;
        let mut schedule = Vec::new();
        for _ in 0..6 {
            schedule.push(pause.as_millis());
            pause = next_pause(pause);
        }
        assert_eq!(schedule, vec![500, 1000, 2000, 4000, 5000, 5000]);
    }
}
