use serde::Serialize;

/// Running summary of observed values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Histogram {
    pub count: u64,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
}

impl Histogram {
    pub fn record(&mut self, value: f64) {
        if self.count == 0 {
            self.min = value;
            self.max = value;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
        self.count += 1;
        self.sum += value;
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum / self.count as f64
    }
}

/// Session-resume histograms.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionMetrics {
    pub resumes_total: u64,
    /// `context_index_tokens`
    pub context_index_tokens: Histogram,
    /// `session_duration_ms`
    pub session_duration_ms: Histogram,
}

impl SessionMetrics {
    pub fn record(&mut self, tokens: Option<f64>, duration_ms: Option<f64>) {
        self.resumes_total += 1;
        if let Some(tokens) = tokens {
            self.context_index_tokens.record(tokens);
        }
        if let Some(duration) = duration_ms {
            self.session_duration_ms.record(duration);
        }
    }
}
