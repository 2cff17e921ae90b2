//! Per-owner chain bookkeeping and the per-tick driver.

use crate::body::{Body, BodyResolver, HasBounds, HasPosition};
use crate::error::Result;
use crate::rope::{Chain, RopeConfig};
use glam::Vec3;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

pub const DEFAULT_SEGMENT_COUNT: usize = 16;

/// Default fixed chain: hung above and beside the owner...
pub const CHAIN_START_OFFSET: Vec3 = Vec3::new(2.0, 3.0, 0.0);
/// ...down to the owner's middle.
pub const CHAIN_END_OFFSET: Vec3 = Vec3::new(0.0, 1.0, 0.0);
/// Default anchor of a following chain, relative to the owner.
pub const ANCHOR_OFFSET: Vec3 = Vec3::new(5.0, 5.0, 0.0);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub updated_chains: usize,
    /// Owners whose body could not be resolved this tick.
    pub skipped_owners: usize,
    pub pushed_points: usize,
}

/// Chains grouped by the owner that created them.
#[derive(Debug, Clone)]
pub struct ChainRegistry<K> {
    chains: HashMap<K, Vec<Chain>>,
    segment_count: usize,
    config: RopeConfig,
}

impl<K: Eq + Hash + Clone + Debug> ChainRegistry<K> {
    pub fn new() -> Self {
        Self {
            chains: HashMap::new(),
            segment_count: DEFAULT_SEGMENT_COUNT,
            config: RopeConfig::default(),
        }
    }

    /// Segment count for chains created from now on.
    pub fn with_segment_count(mut self, segment_count: usize) -> Self {
        self.segment_count = segment_count;
        self
    }

    pub fn with_config(mut self, config: RopeConfig) -> Self {
        self.config = config;
        self
    }

    /// Fixed chain between two points given relative to the owner's body.
    pub fn create_chain<B: HasPosition + ?Sized>(
        &mut self,
        owner: K,
        body: &B,
        start_offset: Vec3,
        end_offset: Vec3,
    ) -> Result<&Chain> {
        let origin = body.position();
        let chain = self.build(origin + start_offset, origin + end_offset, false)?;
        Ok(self.insert(owner, chain))
    }

    /// Chain from a fixed `anchor` whose end follows the owner's body every tick.
    pub fn create_anchored_chain<B: HasPosition + ?Sized>(
        &mut self,
        owner: K,
        body: &B,
        anchor: Vec3,
    ) -> Result<&Chain> {
        let chain = self.build(anchor, body.position(), true)?;
        Ok(self.insert(owner, chain))
    }

    /// [`create_chain`](Self::create_chain) with the default offsets.
    pub fn create_default_chain<B: HasPosition + ?Sized>(
        &mut self,
        owner: K,
        body: &B,
    ) -> Result<&Chain> {
        self.create_chain(owner, body, CHAIN_START_OFFSET, CHAIN_END_OFFSET)
    }

    /// Anchored chain hung from [`ANCHOR_OFFSET`] above the owner's current position.
    pub fn create_default_anchored_chain<B: HasPosition + ?Sized>(
        &mut self,
        owner: K,
        body: &B,
    ) -> Result<&Chain> {
        let anchor = body.position() + ANCHOR_OFFSET;
        self.create_anchored_chain(owner, body, anchor)
    }

    pub fn insert(&mut self, owner: K, chain: Chain) -> &Chain {
        log::debug!(
            "adding {}-segment chain for {owner:?} (follows body: {})",
            chain.segment_count(),
            chain.follows_body()
        );
        let owned = self.chains.entry(owner).or_default();
        owned.push(chain);
        &owned[owned.len() - 1]
    }

    /// Chains owned by `owner`, oldest first. Empty for unknown owners.
    pub fn chains(&self, owner: &K) -> &[Chain] {
        self.chains.get(owner).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Drops every chain of `owner`, returning how many were removed.
    pub fn remove_all_chains(&mut self, owner: &K) -> usize {
        let removed = self.chains.remove(owner).map_or(0, |chains| chains.len());
        if removed > 0 {
            log::debug!("removed {removed} chains for {owner:?}");
        }
        removed
    }

    pub fn owner_count(&self) -> usize {
        self.chains.len()
    }

    pub fn chain_count(&self) -> usize {
        self.chains.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[Chain])> + '_ {
        self.chains.iter().map(|(owner, chains)| (owner, chains.as_slice()))
    }

    pub fn clear(&mut self) {
        self.chains.clear();
    }

    /// Advances every chain once, using its owner's body from `resolver`.
    ///
    /// Owners without a body are skipped for this tick and keep their chains.
    pub fn tick<R: BodyResolver<K>>(&mut self, resolver: &R) -> TickSummary {
        let mut summary = TickSummary::default();

        for (owner, chains) in self.chains.iter_mut() {
            let Some(body) = resolver.resolve(owner) else {
                log::trace!("no body for {owner:?}, skipping {} chains", chains.len());
                summary.skipped_owners += 1;
                continue;
            };

            let position = body.tether_point();
            let bounds = body.bounds();
            for chain in chains.iter_mut() {
                let result = chain.update(position, &bounds);
                summary.updated_chains += 1;
                summary.pushed_points += result.pushed_points;
            }
        }

        summary
    }

    fn build(&self, start: Vec3, end: Vec3, follows_body: bool) -> Result<Chain> {
        Chain::builder()
            .start(start)
            .end(end)
            .segment_count(self.segment_count)
            .follow_body(follows_body)
            .config(self.config)
            .build()
            .inspect_err(|err| log::warn!("chain creation refused: {err}"))
    }
}

impl<K: Eq + Hash + Clone + Debug> Default for ChainRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyState;
    use crate::error::ChainError;

    fn body_at(position: Vec3) -> BodyState {
        BodyState::new(position, Vec3::new(0.3, 0.9, 0.3))
    }

    #[test]
    fn lookup_of_unknown_owner_is_empty_and_does_not_insert() {
        let registry: ChainRegistry<u32> = ChainRegistry::new();
        assert!(registry.chains(&1).is_empty());
        assert_eq!(registry.owner_count(), 0);
    }

    #[test]
    fn create_chain_uses_body_relative_offsets() {
        let mut registry = ChainRegistry::new();
        let body = body_at(Vec3::new(10.0, 64.0, -3.0));

        let chain = registry
            .create_chain("steve", &body, Vec3::new(2.0, 3.0, 0.0), Vec3::new(0.0, 1.0, 0.0))
            .unwrap();

        assert_eq!(chain.start(), Vec3::new(12.0, 67.0, -3.0));
        assert_eq!(chain.end(), Vec3::new(10.0, 65.0, -3.0));
        assert_eq!(chain.segment_count(), DEFAULT_SEGMENT_COUNT);
        assert!(!chain.follows_body());
    }

    #[test]
    fn chains_are_appended_per_owner() {
        let mut registry = ChainRegistry::new();
        let body = body_at(Vec3::ZERO);

        registry.create_chain(1u8, &body, Vec3::X, Vec3::Y).unwrap();
        registry.create_anchored_chain(1u8, &body, Vec3::splat(5.0)).unwrap();
        registry.create_chain(2u8, &body, Vec3::X, Vec3::Z).unwrap();

        assert_eq!(registry.owner_count(), 2);
        assert_eq!(registry.chain_count(), 3);
        let owned = registry.chains(&1);
        assert_eq!(owned.len(), 2);
        assert!(!owned[0].follows_body());
        assert!(owned[1].follows_body());
        assert_eq!(owned[1].start(), Vec3::splat(5.0));
    }

    #[test]
    fn remove_all_drops_the_entry() {
        let mut registry = ChainRegistry::new();
        let body = body_at(Vec3::ZERO);
        registry.create_chain(1u8, &body, Vec3::X, Vec3::Y).unwrap();
        registry.create_chain(1u8, &body, Vec3::X, Vec3::Z).unwrap();

        assert_eq!(registry.remove_all_chains(&1), 2);
        assert!(registry.is_empty());
        assert_eq!(registry.remove_all_chains(&1), 0);
    }

    #[test]
    fn invalid_segment_count_refuses_creation() {
        let mut registry = ChainRegistry::new().with_segment_count(0);
        let body = body_at(Vec3::ZERO);

        let err = registry.create_chain(1u8, &body, Vec3::X, Vec3::Y).unwrap_err();

        assert!(matches!(err, ChainError::InvalidConfiguration(_)));
        assert_eq!(registry.owner_count(), 0);
    }

    #[test]
    fn tick_skips_unresolved_owners() {
        let mut registry = ChainRegistry::new().with_segment_count(8);
        let body = body_at(Vec3::ZERO);
        registry.create_chain(1u32, &body, Vec3::new(2.0, 3.0, 0.0), Vec3::Y).unwrap();
        registry.create_anchored_chain(2u32, &body, Vec3::new(5.0, 5.0, 0.0)).unwrap();
        let before = registry.chains(&2)[0].snapshot();

        let mut bodies = HashMap::new();
        bodies.insert(1u32, body);
        let summary = registry.tick(&bodies);

        assert_eq!(summary.updated_chains, 1);
        assert_eq!(summary.skipped_owners, 1);
        assert_eq!(registry.chains(&2)[0].points(), before.as_slice());
    }

    #[test]
    fn anchored_chain_end_tracks_tether_point() {
        let mut registry = ChainRegistry::new();
        let mut bodies = HashMap::new();
        bodies.insert(9u32, body_at(Vec3::ZERO));
        registry
            .create_anchored_chain(9, &bodies[&9], Vec3::new(5.0, 5.0, 0.0))
            .unwrap();

        bodies.insert(9, body_at(Vec3::new(1.0, 0.0, 2.0)));
        registry.tick(&bodies);

        let chain = &registry.chains(&9)[0];
        assert!((chain.end() - Vec3::new(1.0, 0.9, 2.0)).abs().max_element() < 1e-6);
        assert_eq!(chain.start(), Vec3::new(5.0, 5.0, 0.0));
    }

    #[test]
    fn default_placements_are_relative_to_the_owner() {
        let mut registry = ChainRegistry::new();
        let body = body_at(Vec3::new(10.0, 64.0, -3.0));

        let fixed = registry.create_default_chain(5u32, &body).unwrap();
        assert_eq!(fixed.start(), Vec3::new(12.0, 67.0, -3.0));
        assert_eq!(fixed.end(), Vec3::new(10.0, 65.0, -3.0));

        let anchored = registry.create_default_anchored_chain(5u32, &body).unwrap();
        assert_eq!(anchored.start(), Vec3::new(15.0, 69.0, -3.0));
        assert_eq!(anchored.end(), Vec3::new(10.0, 64.0, -3.0));
        assert!(anchored.follows_body());
        assert_eq!(registry.chains(&5).len(), 2);
    }
}
