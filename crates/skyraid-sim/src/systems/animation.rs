//! Advances enemy animation mixers.

use hecs::World;

use skyraid_core::components::Enemy;

use crate::animation::AnimationMixer;

pub fn run(world: &mut World, dt: f64) {
    for (_entity, (_enemy, mixer)) in world.query_mut::<(&Enemy, &mut AnimationMixer)>() {
        mixer.update(dt);
    }
}
