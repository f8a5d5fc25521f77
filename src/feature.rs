//! Feature resolver
//!
//! A [`Feature`] routes enable/disable targets to the matching gate and
//! answers the enablement question across every gate and every supplied
//! actor. Gate state is read from the adapter once per question and
//! evaluated as a snapshot.

use crate::actor::Actor;
use crate::adapters::GateAdapter;
use crate::error::FlagResult;
use crate::expression::Expression;
use crate::gates::{GateKind, GateValues};
use crate::groups::GroupRegistry;
use crate::random::RandomSource;
use crate::target::Target;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, trace};

/// One named feature and its gates
#[derive(Clone)]
pub struct Feature {
    name: String,
    adapter: Arc<dyn GateAdapter>,
    groups: GroupRegistry,
    random: Arc<dyn RandomSource>,
}

impl Feature {
    pub(crate) fn new(
        name: String,
        adapter: Arc<dyn GateAdapter>,
        groups: GroupRegistry,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            name,
            adapter,
            groups,
            random,
        }
    }

    /// The feature's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parsed snapshot of every gate for this feature
    pub async fn gate_values(&self) -> FlagResult<GateValues> {
        let raw = self.adapter.read(&self.name).await?;
        GateValues::from_raw(&raw)
    }

    /// Enable this feature for a target.
    ///
    /// The target selects the gate: `Target::All` opens the boolean gate,
    /// actors and groups join their sets, percentages replace the stored
    /// value, expressions replace the stored tree.
    pub async fn enable(&self, target: Target) -> FlagResult<()> {
        debug!(feature = %self.name, gate = %target.kind(), "Enabling feature");
        match target {
            Target::All => {
                self.adapter
                    .write(&self.name, GateKind::Boolean, Value::Bool(true))
                    .await
            }
            Target::Actor(id) => {
                let mut gates = self.gate_values().await?;
                gates.actors.add(id);
                self.adapter
                    .write(&self.name, GateKind::Actors, gates.actors.to_raw())
                    .await
            }
            Target::Group(name) => {
                // Fail fast on a name nobody registered; otherwise the
                // stored set would silently never match.
                self.groups.lookup(&name)?;
                let mut gates = self.gate_values().await?;
                gates.groups.add(name);
                self.adapter
                    .write(&self.name, GateKind::Groups, gates.groups.to_raw())
                    .await
            }
            Target::PercentageOfActors(percentage) => {
                self.adapter
                    .write(
                        &self.name,
                        GateKind::PercentageOfActors,
                        Value::from(percentage.value()),
                    )
                    .await
            }
            Target::PercentageOfTime(percentage) => {
                self.adapter
                    .write(
                        &self.name,
                        GateKind::PercentageOfTime,
                        Value::from(percentage.value()),
                    )
                    .await
            }
            Target::Expression(expression) => {
                let value = serde_json::to_value(&expression)?;
                self.adapter
                    .write(&self.name, GateKind::Expression, value)
                    .await
            }
        }
    }

    /// Disable this feature for a target.
    ///
    /// `Target::All` resets every gate to its baseline, not just the
    /// boolean gate. Actor and group targets leave the rest of their set
    /// intact; percentage targets store the given value (normally zero);
    /// an expression target clears the stored tree.
    pub async fn disable(&self, target: Target) -> FlagResult<()> {
        debug!(feature = %self.name, gate = %target.kind(), "Disabling feature");
        match target {
            Target::All => self.adapter.clear_all(&self.name).await,
            Target::Actor(id) => {
                let mut gates = self.gate_values().await?;
                gates.actors.remove(&id);
                if gates.actors.is_empty() {
                    self.adapter.clear(&self.name, GateKind::Actors).await
                } else {
                    self.adapter
                        .write(&self.name, GateKind::Actors, gates.actors.to_raw())
                        .await
                }
            }
            Target::Group(name) => {
                self.groups.lookup(&name)?;
                let mut gates = self.gate_values().await?;
                gates.groups.remove(&name);
                if gates.groups.is_empty() {
                    self.adapter.clear(&self.name, GateKind::Groups).await
                } else {
                    self.adapter
                        .write(&self.name, GateKind::Groups, gates.groups.to_raw())
                        .await
                }
            }
            Target::PercentageOfActors(percentage) => {
                self.adapter
                    .write(
                        &self.name,
                        GateKind::PercentageOfActors,
                        Value::from(percentage.value()),
                    )
                    .await
            }
            Target::PercentageOfTime(percentage) => {
                self.adapter
                    .write(
                        &self.name,
                        GateKind::PercentageOfTime,
                        Value::from(percentage.value()),
                    )
                    .await
            }
            Target::Expression(_) => self.adapter.clear(&self.name, GateKind::Expression).await,
        }
    }

    /// Answer the enablement question for zero or more actors.
    ///
    /// The boolean gate overrides everything. Otherwise the actor-scoped
    /// gates are OR'd across gates and across actors, the expression gate
    /// is evaluated against the whole actor set, and percentage-of-time
    /// draws exactly once per call regardless of actor count.
    pub async fn is_enabled(&self, actors: &[&dyn Actor]) -> FlagResult<bool> {
        let gates = self.gate_values().await?;

        if gates.boolean.is_open() {
            trace!(feature = %self.name, "Enabled by boolean gate");
            return Ok(true);
        }

        if !actors.is_empty() {
            if gates.actors.satisfied_by(actors) {
                trace!(feature = %self.name, "Enabled by actor gate");
                return Ok(true);
            }
            if gates.groups.satisfied_by(actors, &self.groups)? {
                trace!(feature = %self.name, "Enabled by group gate");
                return Ok(true);
            }
            if gates.percentage_of_actors.satisfied_by(&self.name, actors) {
                trace!(feature = %self.name, "Enabled by percentage-of-actors gate");
                return Ok(true);
            }
        }

        if gates.expression.satisfied_by(actors) {
            trace!(feature = %self.name, "Enabled by expression gate");
            return Ok(true);
        }

        if gates.percentage_of_time.satisfied_by(self.random.as_ref()) {
            trace!(feature = %self.name, "Enabled by percentage-of-time gate");
            return Ok(true);
        }

        Ok(false)
    }

    // Convenience surface mirroring the gate kinds.

    /// Open the boolean gate: enabled for everyone
    pub async fn enable_all(&self) -> FlagResult<()> {
        self.enable(Target::All).await
    }

    /// Reset every gate to its disabled baseline
    pub async fn disable_all(&self) -> FlagResult<()> {
        self.disable(Target::All).await
    }

    /// Enable a single actor
    pub async fn enable_actor(&self, actor: &dyn Actor) -> FlagResult<()> {
        self.enable(Target::actor(actor)).await
    }

    /// Disable a single actor, leaving other actors enabled
    pub async fn disable_actor(&self, actor: &dyn Actor) -> FlagResult<()> {
        self.disable(Target::actor(actor)).await
    }

    /// Enable a registered group
    pub async fn enable_group(&self, name: impl Into<String>) -> FlagResult<()> {
        self.enable(Target::group(name)).await
    }

    /// Disable a single group, leaving other groups enabled
    pub async fn disable_group(&self, name: impl Into<String>) -> FlagResult<()> {
        self.disable(Target::group(name)).await
    }

    /// Store a percentage-of-actors rollout
    pub async fn enable_percentage_of_actors(
        &self,
        percentage: impl Into<f64>,
    ) -> FlagResult<()> {
        self.enable(Target::percentage_of_actors(percentage)?).await
    }

    /// Reset the percentage-of-actors rollout to zero
    pub async fn disable_percentage_of_actors(&self) -> FlagResult<()> {
        self.disable(Target::PercentageOfActors(crate::gates::Percentage::ZERO))
            .await
    }

    /// Store a percentage-of-time rollout
    pub async fn enable_percentage_of_time(&self, percentage: impl Into<f64>) -> FlagResult<()> {
        self.enable(Target::percentage_of_time(percentage)?).await
    }

    /// Reset the percentage-of-time rollout to zero
    pub async fn disable_percentage_of_time(&self) -> FlagResult<()> {
        self.disable(Target::PercentageOfTime(crate::gates::Percentage::ZERO))
            .await
    }

    /// Store an expression rule
    pub async fn enable_expression(&self, expression: Expression) -> FlagResult<()> {
        self.enable(Target::Expression(expression)).await
    }

    /// Clear the stored expression rule
    pub async fn disable_expression(&self) -> FlagResult<()> {
        self.adapter.clear(&self.name, GateKind::Expression).await
    }
}

impl std::fmt::Debug for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Feature")
            .field("name", &self.name)
            .field("adapter", &self.adapter.adapter_type())
            .finish()
    }
}
