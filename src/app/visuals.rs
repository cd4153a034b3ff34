//! Visuals chart orchestration.

use super::{App, AppMessage};
use crate::models::ChartMetric;
use crate::request::Channel;

impl App {
    /// Fresh Visuals view over the default range, then build every chart.
    pub(super) fn open_visuals(&mut self) {
        self.requests.invalidate(Channel::Charts);
        self.visuals.open(chrono::Local::now().date_naive());
        self.load_all_charts();
    }

    /// Destroy every chart and fetch all eleven again for the current range.
    ///
    /// The fetches are independent: each result is applied on its own and a
    /// failure only affects its own chart.
    pub fn load_all_charts(&mut self) {
        let range = self.visuals.begin_rebuild();
        let ticket = self.requests.issue(Channel::Charts);
        tracing::info!(from = %range.from, to = %range.to, "rebuilding charts");

        for metric in ChartMetric::ALL {
            let range = range.clone();
            self.spawn_request(move |api| async move {
                AppMessage::ChartLoaded {
                    ticket,
                    metric,
                    result: api.chart(metric, &range).await,
                }
            });
        }
    }

    /// Restore the default range and rebuild.
    pub fn reset_visuals_range(&mut self) {
        self.visuals.reset_range(chrono::Local::now().date_naive());
        self.load_all_charts();
    }
}
