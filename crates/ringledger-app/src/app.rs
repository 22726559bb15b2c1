//! Application state machine.
//!
//! Pure orchestration of the transform engine, rotation policy, and case
//! ledger: consumes [`Command`]s, produces [`Outcome`]s, performs no I/O.
//! Encode and batch-decode calls are timed through the injected
//! environment; the two ordered timing sequences are kept for the
//! out-of-scope charting collaborator.

use std::time::Duration;

use ringledger_core::{CaseLedger, Environment, RotationPolicy, TransformEngine};

use crate::command::{Command, Outcome};

/// Application state machine over one engine, one policy, one ledger.
pub struct App<E: Environment> {
    env: E,
    engine: TransformEngine,
    rotation: RotationPolicy<E>,
    ledger: CaseLedger,
    encode_timings: Vec<Duration>,
    process_timings: Vec<Duration>,
}

impl<E: Environment> App<E> {
    /// App with freshly generated key material and the default interval.
    pub fn new(env: E) -> Self {
        let engine = TransformEngine::generate(&env);
        let rotation = RotationPolicy::new(&env);
        Self::assemble(env, engine, rotation)
    }

    /// App over an explicit engine and rotation interval.
    pub fn with_engine(env: E, engine: TransformEngine, interval: Duration) -> Self {
        let rotation = RotationPolicy::with_interval(&env, interval);
        Self::assemble(env, engine, rotation)
    }

    fn assemble(env: E, engine: TransformEngine, rotation: RotationPolicy<E>) -> Self {
        Self {
            env,
            engine,
            rotation,
            ledger: CaseLedger::new(),
            encode_timings: Vec::new(),
            process_timings: Vec::new(),
        }
    }

    /// Handle one command.
    pub fn handle(&mut self, command: Command) -> Outcome {
        match command {
            Command::EncodeAndStore { plaintext } => self.encode_and_store(plaintext),
            Command::ProcessAll => self.process_all(),
            Command::ShowTimings => Outcome::Timings {
                encode: self.encode_timings.clone(),
                process: self.process_timings.clone(),
            },
            Command::Quit => Outcome::Quit,
        }
    }

    /// Encode a plaintext, append it as the next case, then poll rotation.
    ///
    /// The rotation poll runs after the store, so a firing rotation leaves
    /// the just-stored case encoded under the pair that was live during
    /// the encode and decodable only under the new one.
    fn encode_and_store(&mut self, plaintext: i64) -> Outcome {
        let start = self.env.now();
        let encoded_value = self.engine.encode(plaintext);
        let elapsed = self.env.now() - start;
        self.encode_timings.push(elapsed);

        let case_id = self.ledger.next_case_id();
        self.ledger.add_case(case_id, encoded_value);
        tracing::info!(case_id, "encoded and stored case");

        let rotated = self.rotation.maybe_rotate(&mut self.engine, &self.env);
        Outcome::CaseStored { case_id, encoded_value, rotated, elapsed }
    }

    /// Decode every stored case through the current key state.
    fn process_all(&mut self) -> Outcome {
        let start = self.env.now();
        let results = self.ledger.process_all(&self.engine);
        let elapsed = self.env.now() - start;
        self.process_timings.push(elapsed);
        tracing::info!(cases = results.len(), "processed ledger");
        Outcome::CasesProcessed { results, elapsed }
    }

    /// The live transform engine.
    pub fn engine(&self) -> &TransformEngine {
        &self.engine
    }

    /// The case ledger.
    pub fn ledger(&self) -> &CaseLedger {
        &self.ledger
    }

    /// One duration per encode call, in call order.
    pub fn encode_timings(&self) -> &[Duration] {
        &self.encode_timings
    }

    /// One duration per process-all call, in call order.
    pub fn process_timings(&self) -> &[Duration] {
        &self.process_timings
    }
}
