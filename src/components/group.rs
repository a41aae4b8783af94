use bevy_ecs::prelude::Component;

/// Tag naming the scene layer an entity belongs to ("tiles", "trees", "player").
///
/// Every entity spawned by the scene carries one; scene teardown despawns by it.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Group(pub &'static str);
