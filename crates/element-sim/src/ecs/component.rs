//! Component registration.
//!
//! Every component type gets a fixed mask bit and a table in `Tables`.
//! Hot per-frame data is dense-packed; singleton data and tags that only
//! a handful of entities carry live in sparse tables.

use element_core::components::*;

use super::mask::Mask;
use super::storage::{ComponentStorage, PackedStorage, SparseStorage};

pub trait Component: Copy + 'static {
    const BIT: u32;
    type Storage: ComponentStorage<Self>;

    fn table(tables: &Tables) -> &Self::Storage;
    fn table_mut(tables: &mut Tables) -> &mut Self::Storage;
}

/// A set of component values attached in one call. Implemented for
/// tuples of up to twelve components.
pub trait Bundle {
    fn mask() -> Mask;
    fn insert_into(self, tables: &mut Tables, index: u32);
}

macro_rules! component_tables {
    ($($ty:ident => $field:ident: $storage:ident = $bit:expr,)+) => {
        /// One table per registered component type.
        #[derive(Default)]
        pub struct Tables {
            $(pub $field: $storage<$ty>,)+
        }

        impl Tables {
            /// Drop every component of `index` whose bit is set in `mask`.
            pub fn remove_masked(&mut self, index: u32, mask: Mask) {
                $(
                    if mask.has($bit) {
                        self.$field.remove(index);
                    }
                )+
            }
        }

        $(
            impl Component for $ty {
                const BIT: u32 = $bit;
                type Storage = $storage<$ty>;

                fn table(tables: &Tables) -> &Self::Storage {
                    &tables.$field
                }

                fn table_mut(tables: &mut Tables) -> &mut Self::Storage {
                    &mut tables.$field
                }
            }
        )+

        pub const COMPONENT_COUNT: u32 = [$($bit),+].len() as u32;
    };
}

component_tables! {
    Transform => transforms: PackedStorage = 0,
    Velocity => velocities: PackedStorage = 1,
    Drawable => drawables: PackedStorage = 2,
    Speed => speeds: PackedStorage = 3,
    WaypointIndex => waypoint_indices: PackedStorage = 4,
    Hp => hps: PackedStorage = 5,
    Gold => golds: SparseStorage = 6,
    GoldBounty => gold_bounties: PackedStorage = 7,
    Range => ranges: PackedStorage = 8,
    Damage => damages: PackedStorage = 9,
    FireRate => fire_rates: PackedStorage = 10,
    Target => targets: PackedStorage = 11,
    TravelTime => travel_times: PackedStorage = 12,
    SpawnState => spawn_states: SparseStorage = 13,
    CurrentLevel => current_levels: SparseStorage = 14,
    UiIntent => ui_intents: SparseStorage = 15,
    MouseInput => mouse_inputs: SparseStorage = 16,
    Creep => creep_tags: PackedStorage = 17,
    Player => player_tags: SparseStorage = 18,
    ArrowTower => arrow_tags: SparseStorage = 19,
    CannonTower => cannon_tags: SparseStorage = 20,
    AirTower => air_tags: SparseStorage = 21,
    Bullet => bullet_tags: PackedStorage = 22,
    UiButton => button_tags: SparseStorage = 23,
    NextLevelButton => next_level_tags: SparseStorage = 24,
    Mouse => mouse_tags: SparseStorage = 25,
    GameState => game_state_tags: SparseStorage = 26,
    SpawnManager => spawn_manager_tags: SparseStorage = 27,
}

const _: () = assert!(COMPONENT_COUNT <= Mask::CAPACITY);

macro_rules! impl_bundle {
    ($($name:ident),+) => {
        impl<$($name: Component),+> Bundle for ($($name,)+) {
            fn mask() -> Mask {
                Mask::EMPTY$(.with($name::BIT))+
            }

            #[allow(non_snake_case)]
            fn insert_into(self, tables: &mut Tables, index: u32) {
                let ($($name,)+) = self;
                $($name::table_mut(tables).insert(index, $name);)+
            }
        }
    };
}

impl_bundle!(A);
impl_bundle!(A, B);
impl_bundle!(A, B, C);
impl_bundle!(A, B, C, D);
impl_bundle!(A, B, C, D, E);
impl_bundle!(A, B, C, D, E, F);
impl_bundle!(A, B, C, D, E, F, G);
impl_bundle!(A, B, C, D, E, F, G, H);
impl_bundle!(A, B, C, D, E, F, G, H, I);
impl_bundle!(A, B, C, D, E, F, G, H, I, J);
impl_bundle!(A, B, C, D, E, F, G, H, I, J, K);
impl_bundle!(A, B, C, D, E, F, G, H, I, J, K, L);
