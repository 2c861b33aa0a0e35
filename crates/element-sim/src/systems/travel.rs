//! Projectile flight clock. Resolution happens in `bullet_hit`.

use element_core::components::{Bullet, TravelTime};
use element_core::constants::DT;

use crate::ecs::{Mask, World};

pub fn run(world: &mut World) {
    for bullet in world.query(Mask::of::<(Bullet, TravelTime)>()) {
        if let Some(travel) = world.get_mut::<TravelTime>(bullet) {
            travel.remaining -= DT;
        }
    }
}
