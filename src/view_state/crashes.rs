//! Crashes view: search inputs, results, selection and the summary chart.

use super::Selection;
use crate::debounce::Debouncer;
use crate::models::{ChartKind, ChartSeries, CrashQuery, CrashRecord, CrashSignature};
use crate::surface::{ChartSpec, SurfacePool, SurfaceRegistry, SurfaceTargets};

/// Registry key of the signature bar chart.
pub const SUMMARY_CHART_KEY: &str = "crash_summary";
/// Target slot of the signature bar chart.
pub const SUMMARY_CHART_TARGET: &str = "ch_crash_summary";

pub const NO_CRASHES: &str = "No crashes found.";
pub const NO_CRASH_SELECTED: &str = "Select a crash from the list.";

/// One of the three search inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashField {
    Query,
    ExceptionCode,
    FaultingModule,
}

impl CrashField {
    pub const ALL: [CrashField; 3] = [
        CrashField::Query,
        CrashField::ExceptionCode,
        CrashField::FaultingModule,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CrashField::Query => "Search",
            CrashField::ExceptionCode => "Exception code",
            CrashField::FaultingModule => "Faulting module",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            CrashField::Query => "Search message/module/exception...",
            CrashField::ExceptionCode => "0xc0000409",
            CrashField::FaultingModule => "ucrtbase.dll",
        }
    }

    pub fn next(&self) -> CrashField {
        match self {
            CrashField::Query => CrashField::ExceptionCode,
            CrashField::ExceptionCode => CrashField::FaultingModule,
            CrashField::FaultingModule => CrashField::Query,
        }
    }
}

/// Raw text of the three search inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrashInputs {
    pub query: String,
    pub exception_code: String,
    pub faulting_module: String,
}

impl CrashInputs {
    pub fn get(&self, field: CrashField) -> &str {
        match field {
            CrashField::Query => &self.query,
            CrashField::ExceptionCode => &self.exception_code,
            CrashField::FaultingModule => &self.faulting_module,
        }
    }

    pub fn get_mut(&mut self, field: CrashField) -> &mut String {
        match field {
            CrashField::Query => &mut self.query,
            CrashField::ExceptionCode => &mut self.exception_code,
            CrashField::FaultingModule => &mut self.faulting_module,
        }
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.exception_code.clear();
        self.faulting_module.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.exception_code.is_empty() && self.faulting_module.is_empty()
    }
}

#[derive(Debug)]
pub struct CrashesState {
    pub inputs: CrashInputs,
    /// Input receiving keystrokes, if the operator is typing.
    pub editing: Option<CrashField>,
    list: Option<Vec<CrashRecord>>,
    summary: Option<Vec<CrashSignature>>,
    pub selection: Selection,
    pub debouncer: Debouncer,
    pub registry: SurfaceRegistry,
    pub targets: SurfaceTargets,
}

impl CrashesState {
    pub fn new(pool: SurfacePool) -> Self {
        Self {
            inputs: CrashInputs::default(),
            editing: None,
            list: None,
            summary: None,
            selection: Selection::default(),
            debouncer: Debouncer::crash_search(),
            registry: SurfaceRegistry::new(pool),
            targets: SurfaceTargets::new(),
        }
    }

    /// Fresh view: empty inputs, nothing loaded, chart target mounted.
    pub fn open(&mut self) {
        self.close();
        self.inputs.clear();
        self.list = None;
        self.summary = None;
        self.selection.clear();
        self.targets.mount(SUMMARY_CHART_TARGET);
    }

    /// Leave the view: cancel the pending search, release the chart and
    /// unmount its target.
    pub fn close(&mut self) {
        self.debouncer.cancel();
        self.editing = None;
        self.registry.destroy_all();
        self.targets.unmount_all();
    }

    /// Filters for a fetch scoped to `user`.
    pub fn query_for(&self, user: &str) -> CrashQuery {
        CrashQuery {
            user: user.to_string(),
            query: self.inputs.query.clone(),
            exception_code: self.inputs.exception_code.clone(),
            faulting_module: self.inputs.faulting_module.clone(),
        }
    }

    /// Type into the focused input. Returns whether an input changed.
    pub fn input_char(&mut self, c: char) -> bool {
        match self.editing {
            Some(field) => {
                self.inputs.get_mut(field).push(c);
                true
            }
            None => false,
        }
    }

    /// Delete the last character of the focused input.
    pub fn backspace(&mut self) -> bool {
        match self.editing {
            Some(field) => self.inputs.get_mut(field).pop().is_some(),
            None => false,
        }
    }

    pub fn list(&self) -> Option<&[CrashRecord]> {
        self.list.as_deref()
    }

    pub fn summary(&self) -> Option<&[CrashSignature]> {
        self.summary.as_deref()
    }

    /// Take a completed fetch: replace list and summary, drop the
    /// selection, rebuild the summary chart.
    pub fn apply_results(&mut self, list: Vec<CrashRecord>, summary: Vec<CrashSignature>) {
        let series = ChartSeries::new(
            summary.iter().map(|s| s.signature.clone()).collect(),
            summary.iter().map(|s| s.count as f64).collect(),
        );
        self.list = Some(list);
        self.summary = Some(summary);
        self.selection.clear();

        if let Err(err) = self.registry.install(
            SUMMARY_CHART_KEY,
            SUMMARY_CHART_TARGET,
            &self.targets,
            || ChartSpec::new(ChartKind::Bar, "Top crash signatures", series),
        ) {
            tracing::debug!(%err, "skipped render");
        }
    }

    /// Select list row `index`, deselecting any other.
    pub fn select(&mut self, index: usize) -> bool {
        let len = self.list.as_ref().map(Vec::len).unwrap_or(0);
        self.selection.select(index, len)
    }

    pub fn select_next(&mut self) {
        let len = self.list.as_ref().map(Vec::len).unwrap_or(0);
        self.selection.next(len);
    }

    pub fn select_prev(&mut self) {
        let len = self.list.as_ref().map(Vec::len).unwrap_or(0);
        self.selection.prev(len);
    }

    pub fn selected(&self) -> Option<&CrashRecord> {
        let index = self.selection.index()?;
        self.list.as_ref()?.get(index)
    }

    /// Text of the detail panel.
    pub fn detail_text(&self) -> String {
        self.selected()
            .map(CrashRecord::detail_text)
            .unwrap_or_else(|| NO_CRASH_SELECTED.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crash(id: &str) -> CrashRecord {
        CrashRecord {
            crash_id: id.to_string(),
            ..Default::default()
        }
    }

    fn signature(sig: &str, count: u64) -> CrashSignature {
        CrashSignature {
            signature: sig.to_string(),
            count,
            ..Default::default()
        }
    }

    #[test]
    fn test_typing_needs_focus() {
        let mut state = CrashesState::new(SurfacePool::new());
        assert!(!state.input_char('x'));

        state.editing = Some(CrashField::ExceptionCode);
        state.input_char('0');
        state.input_char('x');
        assert_eq!(state.inputs.exception_code, "0x");
        assert!(state.backspace());
        assert_eq!(state.query_for("bob").exception_code, "0");
        assert_eq!(state.query_for("bob").user, "bob");
    }

    #[test]
    fn test_selecting_b_deselects_a() {
        let mut state = CrashesState::new(SurfacePool::new());
        state.open();
        state.apply_results(vec![crash("A"), crash("B")], vec![]);

        assert!(state.select(0));
        assert!(state.select(1));
        assert!(!state.selection.is_selected(0));
        assert!(state.selection.is_selected(1));
        assert!(state.detail_text().starts_with("Crash ID: B\n"));
    }

    #[test]
    fn test_summary_chart_replaced_not_leaked() {
        let pool = SurfacePool::new();
        let mut state = CrashesState::new(pool.clone());
        state.open();

        state.apply_results(vec![], vec![signature("a | b | 1", 3)]);
        state.apply_results(vec![], vec![signature("a | b | 1", 3), signature("a | b | 2", 1)]);

        assert_eq!(state.registry.len(), 1);
        assert_eq!(pool.live(), 1);
        let chart = state.registry.get(SUMMARY_CHART_KEY).unwrap();
        assert_eq!(chart.series().values, vec![3.0, 1.0]);

        state.close();
        assert_eq!(pool.live(), 0);
    }

    #[test]
    fn test_results_without_mounted_target_skip_chart() {
        let pool = SurfacePool::new();
        let mut state = CrashesState::new(pool.clone());
        state.apply_results(vec![crash("A")], vec![signature("x", 1)]);
        assert!(state.registry.is_empty());
        assert_eq!(state.list().unwrap().len(), 1);
        assert_eq!(state.detail_text(), NO_CRASH_SELECTED);
    }
}
