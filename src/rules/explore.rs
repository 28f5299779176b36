//! Generic exploration over any [`RulesEngine`].
//!
//! These helpers use nothing but `step`, `step_back` and legal-action
//! queries, which is exactly what a tree search needs from the engine.

use tracing::trace;

use super::engine::RulesEngine;
use crate::core::GameRng;
use crate::error::EngineError;

/// Count every line of play `depth` actions deep (finished matches count
/// as leaves). The engine is returned to its starting state.
///
/// Fails with [`EngineError::StepBackDisabled`], before taking any step,
/// if the engine keeps no snapshots.
pub fn count_leaves<E: RulesEngine>(engine: &mut E, depth: usize) -> Result<u64, EngineError> {
    if depth == 0 || engine.is_over() {
        return Ok(1);
    }
    if !engine.supports_step_back() {
        return Err(EngineError::StepBackDisabled);
    }

    let mut leaves = 0;
    for action in engine.legal_actions(engine.current_player()) {
        engine.step(action)?;
        let below = count_leaves(engine, depth - 1);
        if !engine.step_back() {
            return Err(EngineError::StepBackDisabled);
        }
        leaves += below?;
    }
    Ok(leaves)
}

/// Play uniformly random legal actions until the match ends.
///
/// Returns the number of actions taken.
pub fn random_playout<E: RulesEngine>(
    engine: &mut E,
    rng: &mut GameRng,
) -> Result<usize, EngineError> {
    let mut steps = 0;
    while !engine.is_over() {
        let legal = engine.legal_actions(engine.current_player());
        let Some(&action) = rng.choose(&legal) else {
            break;
        };
        engine.step(action)?;
        steps += 1;
    }
    trace!(steps, "playout finished");
    Ok(steps)
}
