//! Teardown: releases every entity and stops every mixer.

use hecs::World;

use crate::animation::AnimationMixer;

/// Stop all mixers and despawn everything. Returns how many entities were released.
pub fn release_all(world: &mut World) -> u32 {
    for (_entity, mixer) in world.query_mut::<&mut AnimationMixer>() {
        mixer.stop_all();
    }
    let released = world.len();
    world.clear();
    released
}
