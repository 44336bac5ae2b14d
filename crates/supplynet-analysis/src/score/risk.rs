use std::collections::BTreeMap;

use supplynet_core::config::{RiskWeights, SCORE_CEILING};
use supplynet_core::model::{Provider, RiskScoreResult};
use tracing::{debug, instrument};

use crate::graph::SupplierGraph;

/// Composite risk score for one provider.
///
/// `base + connection_weight * degree`, plus `cycle_penalty` when
/// `in_cycle` and `bridge_penalty` when `is_bridge`, capped at `max_score`.
/// Unvalidated weights cannot push the cap past [`SCORE_CEILING`].
/// Degree counts duplicate edges. Arithmetic saturates, so very high
/// degrees still land on the cap.
#[must_use]
pub fn risk_score(provider: &Provider, weights: &RiskWeights) -> u8 {
    let degree = u64::try_from(provider.degree()).unwrap_or(u64::MAX);

    let mut score = u64::from(weights.base_score)
        .saturating_add(u64::from(weights.connection_weight).saturating_mul(degree));
    if provider.in_cycle {
        score = score.saturating_add(u64::from(weights.cycle_penalty));
    }
    if provider.is_bridge {
        score = score.saturating_add(u64::from(weights.bridge_penalty));
    }

    let cap = weights.max_score.min(SCORE_CEILING);
    let capped = score.min(u64::from(cap));
    u8::try_from(capped).unwrap_or(u8::MAX)
}

/// Score every provider and record the result on it.
///
/// Reads `in_cycle` / `is_bridge` as they stand; providers the detectors
/// never touched score from degree alone.
#[instrument(skip_all)]
pub fn score_providers<'a, I>(providers: I, weights: &RiskWeights) -> RiskScoreResult
where
    I: IntoIterator<Item = &'a mut Provider>,
{
    let mut provider_scores = BTreeMap::new();
    for provider in providers {
        let score = risk_score(provider, weights);
        provider.risk_score = Some(score);
        provider_scores.insert(provider.id.clone(), score);
    }

    debug!(count = provider_scores.len(), "risk scoring complete");
    RiskScoreResult { provider_scores }
}

/// Score every provider of `graph` in graph order.
#[instrument(skip_all, fields(nodes = graph.node_count()))]
pub fn score_graph(graph: &mut SupplierGraph, weights: &RiskWeights) -> RiskScoreResult {
    score_providers(graph.providers_mut(), weights)
}
