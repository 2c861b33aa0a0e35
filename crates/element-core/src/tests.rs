#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::constants::*;
    use crate::enums::*;
    use crate::input::{InputEvent, Scancode};
    use crate::level::{LevelConfig, LevelError};
    use crate::types::{direction_to, facing_degrees, Rect, SimTime};

    // ---- Geometry ----

    #[test]
    fn test_rect_centered_contains_edges() {
        let rect = Rect::centered(Vec2::new(100.0, 50.0), Vec2::new(20.0, 10.0));
        assert_eq!(rect, Rect::new(90.0, 45.0, 20.0, 10.0));
        assert!(rect.contains(Vec2::new(100.0, 50.0)));
        assert!(rect.contains(Vec2::new(90.0, 45.0)), "edges are inclusive");
        assert!(rect.contains(Vec2::new(110.0, 55.0)));
        assert!(!rect.contains(Vec2::new(110.1, 50.0)));
        assert!(!rect.contains(Vec2::new(100.0, 44.9)));
    }

    #[test]
    fn test_rect_empty() {
        assert!(Rect::EMPTY.is_empty());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn test_facing_degrees() {
        assert!((facing_degrees(Vec2::new(1.0, 0.0)) - 0.0).abs() < 1e-5);
        assert!((facing_degrees(Vec2::new(0.0, 1.0)) - 90.0).abs() < 1e-4);
        assert!((facing_degrees(Vec2::new(-1.0, 0.0)).abs() - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_direction_to_normalizes() {
        let dir = direction_to(Vec2::ZERO, Vec2::new(3.0, 4.0));
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!((dir.x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_direction_to_degenerate_offset() {
        let dir = direction_to(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0));
        assert_eq!(dir, Vec2::ZERO);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-5);
    }

    // ---- Enums ----

    #[test]
    fn test_ui_action_tower_kind() {
        assert_eq!(UiAction::BuyArrow.tower_kind(), Some(TowerKind::Arrow));
        assert_eq!(UiAction::BuyCannon.tower_kind(), Some(TowerKind::Cannon));
        assert_eq!(UiAction::BuyAir.tower_kind(), Some(TowerKind::Air));
        assert_eq!(UiAction::AdvanceLevel.tower_kind(), None);
        assert_eq!(UiAction::None.tower_kind(), None);
        for kind in TowerKind::ALL {
            assert_eq!(kind.buy_action().tower_kind(), Some(kind));
        }
    }

    #[test]
    fn test_button_kind_actions() {
        assert_eq!(ButtonKind::NextLevel.action(), UiAction::AdvanceLevel);
        assert_eq!(
            ButtonKind::Buy(TowerKind::Cannon).action(),
            UiAction::BuyCannon
        );
    }

    #[test]
    fn test_input_event_json_shape() {
        let json = serde_json::to_string(&InputEvent::MouseDown { x: 1.0, y: 2.0 }).unwrap();
        assert!(json.contains("\"type\":\"MouseDown\""));

        let key: InputEvent =
            serde_json::from_str(r#"{"type":"KeyDown","scancode":"Escape"}"#).unwrap();
        assert_eq!(
            key,
            InputEvent::KeyDown {
                scancode: Scancode::Escape
            }
        );
    }

    // ---- Level configuration ----

    #[test]
    fn test_default_level_is_valid() {
        let level = LevelConfig::default();
        level.validate().unwrap();
        assert_eq!(level.path_len(), 14);
        assert_eq!(level.waves.len(), 2);
        assert_eq!(level.waves[0].count, 10);
        assert_eq!(level.waves[1].gold_bounty, 3);
        assert_eq!(level.towers.stats(TowerKind::Arrow).range, 200.0);
        assert_eq!(level.towers.stats(TowerKind::Cannon).damage, 10);
        assert_eq!(level.towers.stats(TowerKind::Air).fire_interval, 0.1);
        assert_eq!(level.player.hp, PLAYER_START_HP);
    }

    #[test]
    fn test_default_path_starts_in_screen_space() {
        let level = LevelConfig::default();
        let start = level.path_start();
        assert!((start.x - (MAP_PAD_X + 125.0 * TEX_SCALE)).abs() < 1e-4);
        assert!((start.y - (MAP_PAD_Y + 1.0 * TEX_SCALE)).abs() < 1e-4);
        assert!(level.map_bounds.contains(start));
    }

    #[test]
    fn test_buttons_lie_outside_map() {
        let level = LevelConfig::default();
        for button in &level.buttons {
            assert!(
                !level.map_bounds.contains(button.center),
                "{:?} overlaps the map",
                button.kind
            );
        }
    }

    #[test]
    fn test_level_json_reload() {
        let level = LevelConfig::default();
        let json = level.to_json_pretty().unwrap();
        let back = LevelConfig::from_json_str(&json).unwrap();
        assert_eq!(level, back);
    }

    #[test]
    fn test_level_player_and_scale_default_when_missing() {
        let mut value = serde_json::to_value(LevelConfig::default()).unwrap();
        let obj = value.as_object_mut().unwrap();
        obj.remove("player");
        obj.remove("tex_scale");
        let level = LevelConfig::from_json_str(&value.to_string()).unwrap();
        assert_eq!(level.player.gold, PLAYER_START_GOLD);
        assert_eq!(level.tex_scale, TEX_SCALE);
    }

    #[test]
    fn test_level_rejects_short_path() {
        let mut level = LevelConfig::default();
        level.waypoints.truncate(1);
        assert!(matches!(level.validate(), Err(LevelError::Invalid(_))));
    }

    #[test]
    fn test_level_rejects_bad_wave() {
        let mut level = LevelConfig::default();
        level.waves[1].count = 0;
        let err = level.validate().unwrap_err();
        assert!(err.to_string().contains("wave 1"), "got: {err}");

        let mut level = LevelConfig::default();
        level.waves[0].spawn_delay = f32::NAN;
        assert!(level.validate().is_err());
    }

    #[test]
    fn test_level_rejects_wave_faster_than_snap_radius() {
        // One tick at 200 px/s covers 3.33 px and can hop over a 1 px snap circle.
        let mut level = LevelConfig::default();
        level.waves[0].speed = 200.0;
        let err = level.validate().unwrap_err();
        assert!(err.to_string().contains("wave 0"), "got: {err}");

        // Two snap radii per tick is the fastest accepted speed.
        let mut level = LevelConfig::default();
        level.waves[0].speed = 2.0 * WAYPOINT_SNAP_RADIUS * TICK_RATE as f32;
        assert!(level.validate().is_ok());
        level.waves[0].speed += 1.0;
        assert!(level.validate().is_err());
    }

    #[test]
    fn test_level_rejects_bad_tower() {
        let mut level = LevelConfig::default();
        level.towers.air.fire_interval = 0.0;
        assert!(level.validate().is_err());
    }

    #[test]
    fn test_level_rejects_malformed_json() {
        let err = LevelConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, LevelError::Json(_)));
    }

    #[test]
    fn test_level_load_missing_file() {
        let err = LevelConfig::load("/definitely/not/here/level.json").unwrap_err();
        assert!(matches!(err, LevelError::Io { .. }));
    }
}
