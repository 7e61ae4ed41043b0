// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Result delivery for a single statement run
//!
//! A [`QueryResult`] wraps the event stream the driver runtime produces for
//! one run and hands it to the caller in one of two modes:
//!
//! - buffered, with [`QueryResult::collect`] returning a [`StatementResult`]
//! - streaming, with [`QueryResult::subscribe`] feeding an [`Observer`]
//!
//! Either way records arrive in server order and the run ends with exactly
//! one terminal delivery: a summary or an error.

use crate::error::Neo4jError;
use crate::record::Record;
use crate::summary::ResultSummary;
use async_trait::async_trait;

/// Event produced by the runtime for one run
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    Record(Record),
    /// Terminal: the run completed
    Summary(ResultSummary),
    /// Terminal: the run failed
    Failure(Neo4jError),
}

/// Source of events for one run, implemented by the driver runtime
#[async_trait]
pub trait RecordStream: Send {
    /// Next event in server order, `None` once nothing more will arrive
    async fn next_event(&mut self) -> Option<StreamEvent>;

    /// Ask the runtime to stop producing records. It must still produce the
    /// terminal event.
    async fn cancel(&mut self) {}
}

/// Whether an observer wants further records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Continue,
    /// Stop delivering records; the summary or error still follows
    Cancel,
}

/// Caller-supplied sink for streaming delivery
pub trait Observer: Send {
    fn on_next(&mut self, record: Record) -> Delivery;

    /// Called once when the run completes
    fn on_completed(&mut self, summary: ResultSummary);

    /// Called once when the run fails
    fn on_error(&mut self, error: Neo4jError);
}

/// Fully buffered outcome of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct StatementResult {
    pub records: Vec<Record>,
    pub summary: ResultSummary,
}

impl StatementResult {
    /// Column names, taken from the first record
    ///
    /// The event stream carries no separate header, so a result without
    /// records reports no columns even when the statement returns some.
    pub fn keys(&self) -> &[String] {
        self.records.first().map(Record::keys).unwrap_or_default()
    }
}

/// Pending result of one statement run
///
/// Borrows the session or transaction that produced it, so no other
/// statement can run on that session until this result is consumed.
pub struct QueryResult<'a> {
    stream: Box<dyn RecordStream + 'a>,
}

impl<'a> QueryResult<'a> {
    pub fn new(stream: Box<dyn RecordStream + 'a>) -> Self {
        Self { stream }
    }

    /// A result whose only event is the given failure
    pub fn failed(error: Neo4jError) -> Self {
        Self::new(Box::new(FailedStream { error: Some(error) }))
    }

    /// Deliver every record, then the summary or error, to `observer`
    pub async fn subscribe<O: Observer + ?Sized>(mut self, observer: &mut O) {
        let mut delivered = 0usize;
        let mut cancelled = false;
        loop {
            match self.stream.next_event().await {
                Some(StreamEvent::Record(record)) => {
                    if cancelled {
                        continue;
                    }
                    delivered += 1;
                    if observer.on_next(record) == Delivery::Cancel {
                        log::debug!("Observer cancelled after {} records", delivered);
                        cancelled = true;
                        self.stream.cancel().await;
                    }
                }
                Some(StreamEvent::Summary(summary)) => {
                    log::debug!("Run completed, {} records delivered", delivered);
                    observer.on_completed(summary);
                    return;
                }
                Some(StreamEvent::Failure(error)) => {
                    log::debug!("Run failed after {} records: {}", delivered, error);
                    observer.on_error(error);
                    return;
                }
                None => {
                    log::warn!("Result stream ended without a summary");
                    observer.on_error(Neo4jError::protocol(
                        "Result stream ended without a summary or failure",
                    ));
                    return;
                }
            }
        }
    }

    /// Buffer all records and wait for the summary
    pub async fn collect(self) -> Result<StatementResult, Neo4jError> {
        let mut collector = Collector::default();
        self.subscribe(&mut collector).await;
        match collector.outcome {
            Some(Ok(summary)) => Ok(StatementResult {
                records: collector.records,
                summary,
            }),
            Some(Err(error)) => Err(error),
            None => Err(Neo4jError::protocol("Result ended without a terminal event")),
        }
    }

    /// Discard the records and return the summary
    pub async fn consume(self) -> Result<ResultSummary, Neo4jError> {
        let mut sink = Collector {
            discard_records: true,
            ..Collector::default()
        };
        self.subscribe(&mut sink).await;
        sink.outcome
            .unwrap_or_else(|| Err(Neo4jError::protocol("Result ended without a terminal event")))
    }
}

#[derive(Default)]
struct Collector {
    records: Vec<Record>,
    discard_records: bool,
    outcome: Option<Result<ResultSummary, Neo4jError>>,
}

impl Observer for Collector {
    fn on_next(&mut self, record: Record) -> Delivery {
        if self.discard_records {
            return Delivery::Cancel;
        }
        self.records.push(record);
        Delivery::Continue
    }

    fn on_completed(&mut self, summary: ResultSummary) {
        self.outcome = Some(Ok(summary));
    }

    fn on_error(&mut self, error: Neo4jError) {
        self.outcome = Some(Err(error));
    }
}

struct FailedStream {
    error: Option<Neo4jError>,
}

#[async_trait]
impl RecordStream for FailedStream {
    async fn next_event(&mut self) -> Option<StreamEvent> {
        self.error.take().map(StreamEvent::Failure)
    }
}
