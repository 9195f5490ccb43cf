//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_chartjs::{ChartJs, ChartRegistry};

use crate::charts::Charts;
use crate::commands::HttpApi;
use crate::notifications::Notifier;
use crate::orchestrator::SolveOrchestrator;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    orchestrator: StoredValue<SolveOrchestrator<HttpApi>, LocalStorage>,
    /// Sole owner of every live chart
    charts: StoredValue<Charts, LocalStorage>,
    pub notifier: Notifier,
    /// Solve-family requests in flight - read
    pub in_flight: ReadSignal<u32>,
    /// Solve-family requests in flight - write
    set_in_flight: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(api: HttpApi, notifier: Notifier) -> Self {
        let (in_flight, set_in_flight) = signal(0u32);
        Self {
            orchestrator: StoredValue::new_local(SolveOrchestrator::new(api)),
            charts: StoredValue::new_local(ChartRegistry::new(ChartJs)),
            notifier,
            in_flight,
            set_in_flight,
        }
    }

    pub fn orchestrator(&self) -> SolveOrchestrator<HttpApi> {
        self.orchestrator.get_value()
    }

    pub fn api(&self) -> Rc<HttpApi> {
        self.orchestrator.with_value(|o| o.api())
    }

    /// Mark a request as started; pair with `end_request`
    pub fn begin_request(&self) {
        self.set_in_flight.update(|n| *n += 1);
    }

    pub fn end_request(&self) {
        self.set_in_flight.update(|n| *n = n.saturating_sub(1));
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.get() > 0
    }

    /// No-op once the registry is disposed, so cleanups may call it
    pub fn with_charts(&self, f: impl FnOnce(&mut Charts)) {
        self.charts.try_update_value(f);
    }
}
