//! Visuals view: date range, per-chart status and the chart registry.

use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::ApiError;
use crate::models::{ChartMetric, DateRange};
use crate::surface::{ChartSpec, SurfacePool, SurfaceRegistry, SurfaceTargets};

/// Where one chart card stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartStatus {
    /// Nothing requested yet.
    Idle,
    Loading,
    /// Installed in the registry.
    Ready,
    /// Fetch or shape failure, shown in place of the chart.
    Failed(String),
}

/// Which date input receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    From,
    To,
}

#[derive(Debug)]
pub struct VisualsState {
    pub range: DateRange,
    pub editing: Option<DateField>,
    statuses: HashMap<ChartMetric, ChartStatus>,
    pub registry: SurfaceRegistry,
    pub targets: SurfaceTargets,
}

impl VisualsState {
    pub fn new(pool: SurfacePool) -> Self {
        Self {
            range: DateRange::default(),
            editing: None,
            statuses: HashMap::new(),
            registry: SurfaceRegistry::new(pool),
            targets: SurfaceTargets::new(),
        }
    }

    /// Fresh view: default range ending `today`, all chart targets mounted.
    pub fn open(&mut self, today: NaiveDate) {
        self.close();
        self.range = DateRange::default_for(today);
        self.targets
            .mount_all(ChartMetric::ALL.iter().map(|m| m.target()));
    }

    /// Leave the view: release every chart and unmount the targets.
    pub fn close(&mut self) {
        self.editing = None;
        self.registry.destroy_all();
        self.targets.unmount_all();
        self.statuses.clear();
    }

    pub fn reset_range(&mut self, today: NaiveDate) {
        self.range = DateRange::default_for(today);
    }

    /// Start a full rebuild: destroy every chart, mark all eleven loading
    /// and return the range the fetches must use.
    pub fn begin_rebuild(&mut self) -> DateRange {
        self.registry.destroy_all();
        for metric in ChartMetric::ALL {
            self.statuses.insert(metric, ChartStatus::Loading);
        }
        self.range.clone()
    }

    pub fn status(&self, metric: ChartMetric) -> &ChartStatus {
        self.statuses.get(&metric).unwrap_or(&ChartStatus::Idle)
    }

    /// Apply one chart's fetch result. A failure only affects this chart.
    pub fn apply_chart(&mut self, metric: ChartMetric, result: Result<Value, ApiError>) {
        let status = match result {
            Err(err) => {
                tracing::warn!(metric = metric.endpoint(), %err, "chart fetch failed");
                ChartStatus::Failed(err.to_string())
            }
            Ok(value) => match metric.series_from(&value) {
                Err(err) => {
                    tracing::warn!(metric = metric.endpoint(), %err, "chart data rejected");
                    ChartStatus::Failed(err.to_string())
                }
                Ok(series) => {
                    let installed = self.registry.install(
                        metric.key(),
                        metric.target(),
                        &self.targets,
                        || ChartSpec::new(metric.kind(), metric.title(), series),
                    );
                    match installed {
                        Ok(_) => ChartStatus::Ready,
                        Err(err) => {
                            tracing::debug!(%err, "skipped render");
                            ChartStatus::Idle
                        }
                    }
                }
            },
        };
        self.statuses.insert(metric, status);
    }

    /// Type into the focused date input.
    pub fn input_char(&mut self, c: char) -> bool {
        match self.editing {
            Some(field) => {
                self.field_mut(field).push(c);
                true
            }
            None => false,
        }
    }

    pub fn backspace(&mut self) -> bool {
        match self.editing {
            Some(field) => self.field_mut(field).pop().is_some(),
            None => false,
        }
    }

    fn field_mut(&mut self, field: DateField) -> &mut String {
        match field {
            DateField::From => &mut self.range.from,
            DateField::To => &mut self.range.to,
        }
    }
}
