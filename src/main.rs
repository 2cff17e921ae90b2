use glam::Vec3;
use rope_chain::{BodyState, ChainError, ChainLineBuilder, ChainRegistry, HasPosition};
use std::collections::HashMap;

const PLAYER: u32 = 1;
const TICKS: u32 = 200;
const WALK_RADIUS: f32 = 4.0;

fn walk(body: BodyState, tick: u32) -> BodyState {
    let angle = tick as f32 * 0.05;
    body.with_position(Vec3::new(angle.cos() * WALK_RADIUS, 0.0, angle.sin() * WALK_RADIUS))
}

fn main() -> Result<(), ChainError> {
    env_logger::init();

    let player = BodyState::new(Vec3::new(WALK_RADIUS, 0.0, 0.0), Vec3::new(0.3, 0.9, 0.3));
    let mut bodies = HashMap::new();
    bodies.insert(PLAYER, player);

    let mut registry = ChainRegistry::new();
    registry.create_default_chain(PLAYER, &player)?;
    registry.create_default_anchored_chain(PLAYER, &player)?;

    let lines = ChainLineBuilder::new();

    for tick in 0..TICKS {
        let body = walk(player, tick);
        bodies.insert(PLAYER, body);

        let summary = registry.tick(&bodies);

        if tick % 50 == 0 {
            log::info!(
                "tick {tick}: body at {:?}, {} chains updated, {} points pushed",
                body.position(),
                summary.updated_chains,
                summary.pushed_points
            );
            for (i, chain) in registry.chains(&PLAYER).iter().enumerate() {
                let vertices = lines.build(chain.points());
                log::info!(
                    "  chain {i}: length {:.3}, lowest {:?}, {} line vertices",
                    chain.length(),
                    chain.lowest_point(),
                    vertices.len()
                );
            }
        }
    }

    let removed = registry.remove_all_chains(&PLAYER);
    log::info!("removed {removed} chains after {TICKS} ticks");

    Ok(())
}
