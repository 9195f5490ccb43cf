//! Solve Orchestration
//!
//! Runs the solve and compare request cycles against the solver service.
//! In-flight requests are never cancelled. Issuing a new request makes every
//! older one stale, and a stale reply is dropped when it lands.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use crate::commands::KnapsackApi;
use crate::error::ClientError;
use crate::items::Problem;
use crate::models::{SolveOutcome, SolveResult};

/// How a request ended up once its reply arrived
#[derive(Debug, Clone, PartialEq)]
pub enum Completion<T> {
    /// Newest request; apply it
    Current(T),
    /// A newer request was issued meanwhile; ignore
    Superseded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Request counter shared by all clones of an orchestrator
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    latest: Rc<Cell<u64>>,
}

impl RequestGeneration {
    pub fn issue(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }
}

/// Solve and compare share one generation: either supersedes the other.
pub struct SolveOrchestrator<A> {
    api: Rc<A>,
    generation: RequestGeneration,
}

impl<A> Clone for SolveOrchestrator<A> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            generation: self.generation.clone(),
        }
    }
}

impl<A: KnapsackApi + 'static> SolveOrchestrator<A> {
    pub fn new(api: A) -> Self {
        Self {
            api: Rc::new(api),
            generation: RequestGeneration::default(),
        }
    }

    pub fn api(&self) -> Rc<A> {
        Rc::clone(&self.api)
    }

    /// Recommend, then solve with `algorithm`.
    ///
    /// Validation and ticketing happen on the call, before the returned
    /// future is first polled. A failed recommendation is logged and the
    /// solve goes ahead without it.
    pub fn solve(
        &self,
        problem: Problem,
        algorithm: String,
    ) -> impl Future<Output = Result<Completion<SolveOutcome>, ClientError>> {
        let ticket = problem.validate().map(|()| self.generation.issue());
        let api = Rc::clone(&self.api);
        let generation = self.generation.clone();

        async move {
            let ticket = ticket?;

            let recommendation = match api.recommend(&problem).await {
                Ok(recommendation) => Some(recommendation),
                Err(e) => {
                    log::warn!("recommendation unavailable: {}", e);
                    None
                }
            };

            let solved = api
                .solve(&problem, &algorithm)
                .await
                .map(|result| SolveOutcome { result, recommendation });
            settle(&generation, ticket, solved)
        }
    }

    /// Run every algorithm on the same instance, in one batched request.
    pub fn compare(
        &self,
        problem: Problem,
    ) -> impl Future<Output = Result<Completion<Vec<SolveResult>>, ClientError>> {
        let ticket = problem.validate().map(|()| self.generation.issue());
        let api = Rc::clone(&self.api);
        let generation = self.generation.clone();

        async move {
            let ticket = ticket?;
            let compared = api.compare(&problem).await;
            settle(&generation, ticket, compared)
        }
    }
}

/// Stale replies are dropped whether they succeeded or not.
fn settle<T>(
    generation: &RequestGeneration,
    ticket: Ticket,
    reply: Result<T, ClientError>,
) -> Result<Completion<T>, ClientError> {
    if !generation.is_current(ticket) {
        log::debug!("discarding stale reply #{}", ticket.0);
        return Ok(Completion::Superseded);
    }
    reply.map(Completion::Current)
}
