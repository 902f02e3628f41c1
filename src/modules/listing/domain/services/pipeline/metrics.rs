use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Counts and stage timings for one catalog pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineMetrics {
    pub total_duration: Duration,

    pub stage_durations: HashMap<String, Duration>,

    /// Records entering the pipeline
    pub input_count: usize,

    /// Listings leaving the pipeline
    pub output_count: usize,

    /// Records dropped for lacking an id
    pub invalid_count: usize,

    /// Records dropped because their id was already seen
    pub duplicate_count: usize,

    /// Listings rejected by the active filter criteria
    pub filtered_count: usize,
}

impl PipelineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of input records dropped as invalid or duplicate
    pub fn rejection_rate(&self) -> f32 {
        if self.input_count == 0 {
            return 0.0;
        }

        ((self.invalid_count + self.duplicate_count) as f32 / self.input_count as f32) * 100.0
    }

    /// Percentage of input listings the filter stage removed
    pub fn filter_rate(&self) -> f32 {
        if self.input_count == 0 {
            return 0.0;
        }

        (self.filtered_count as f32 / self.input_count as f32) * 100.0
    }

    pub fn report(&self) -> String {
        let mut lines = vec![
            "=== Catalog Pipeline ===".to_string(),
            format!("Total Duration: {}ms", self.total_duration.as_millis()),
            format!("Input Count: {}", self.input_count),
            format!("Output Count: {}", self.output_count),
            format!(
                "Rejected: {} invalid, {} duplicate ({:.1}%)",
                self.invalid_count,
                self.duplicate_count,
                self.rejection_rate()
            ),
            format!(
                "Filtered Count: {} ({:.1}%)",
                self.filtered_count,
                self.filter_rate()
            ),
            "Stage Durations:".to_string(),
        ];

        // Slowest first
        let mut stages: Vec<_> = self.stage_durations.iter().collect();
        stages.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        for (stage, duration) in stages {
            lines.push(format!("  {}: {}µs", stage, duration.as_micros()));
        }

        lines.join("\n")
    }
}

/// Times one pipeline stage
pub struct StageTimer {
    stage_name: &'static str,
    start: Instant,
}

impl StageTimer {
    pub fn start(stage_name: &'static str) -> Self {
        Self {
            stage_name,
            start: Instant::now(),
        }
    }

    /// Stop timing and record the duration in the builder
    pub fn stop(self, builder: &mut MetricsBuilder) -> Duration {
        let duration = self.start.elapsed();
        builder.add_stage(self.stage_name, duration);
        duration
    }
}

/// Assembles `PipelineMetrics` while the pipeline runs
pub struct MetricsBuilder {
    metrics: PipelineMetrics,
    pipeline_start: Instant,
}

impl MetricsBuilder {
    /// Starts the pipeline clock
    pub fn start() -> Self {
        Self {
            metrics: PipelineMetrics::new(),
            pipeline_start: Instant::now(),
        }
    }

    pub fn input_count(&mut self, count: usize) {
        self.metrics.input_count = count;
    }

    pub fn output_count(&mut self, count: usize) {
        self.metrics.output_count = count;
    }

    pub fn invalid_count(&mut self, count: usize) {
        self.metrics.invalid_count = count;
    }

    pub fn duplicate_count(&mut self, count: usize) {
        self.metrics.duplicate_count = count;
    }

    pub fn filtered_count(&mut self, count: usize) {
        self.metrics.filtered_count = count;
    }

    pub fn add_stage(&mut self, name: impl Into<String>, duration: Duration) {
        self.metrics.stage_durations.insert(name.into(), duration);
    }

    /// Stops the pipeline clock
    pub fn build(mut self) -> PipelineMetrics {
        self.metrics.total_duration = self.pipeline_start.elapsed();
        self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_empty_metrics() {
        let metrics = PipelineMetrics::new();
        assert_eq!(metrics.rejection_rate(), 0.0);
        assert_eq!(metrics.filter_rate(), 0.0);
    }

    #[test]
    fn test_rejection_rate() {
        let metrics = PipelineMetrics {
            input_count: 10,
            invalid_count: 1,
            duplicate_count: 1,
            ..Default::default()
        };
        assert_eq!(metrics.rejection_rate(), 20.0);
    }

    #[test]
    fn test_stage_timer_records_into_builder() {
        let mut builder = MetricsBuilder::start();
        let timer = StageTimer::start("normalize");
        thread::sleep(Duration::from_millis(5));
        let duration = timer.stop(&mut builder);

        let metrics = builder.build();
        assert!(duration >= Duration::from_millis(5));
        assert!(metrics.stage_durations["normalize"] >= Duration::from_millis(5));
        assert!(metrics.total_duration >= duration);
    }

    #[test]
    fn test_report_lists_slowest_stage_first() {
        let mut metrics = PipelineMetrics::new();
        metrics
            .stage_durations
            .insert("sort".to_string(), Duration::from_micros(10));
        metrics
            .stage_durations
            .insert("filter".to_string(), Duration::from_micros(900));

        let report = metrics.report();
        assert!(report.contains("Catalog Pipeline"));
        assert!(report.find("filter").unwrap() < report.find("sort").unwrap());
    }
}
