//! Tests for MissileController.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::config::MissileSettings;
    use crate::error::SimulationError;
    use crate::missile::MissileController;

    const EPS: f32 = 1e-4;

    fn controller(speed: f32, max_age: f32) -> MissileController {
        MissileController::new(MissileSettings { speed, max_age })
    }

    #[test]
    fn test_spawn_normalizes_direction() {
        let mut missiles = controller(10.0, 5.0);
        let id = missiles.spawn(Vec3::ZERO, Vec3::new(3.0, 0.0, 4.0)).unwrap();

        let missile = missiles.get(id).unwrap();
        assert!((missile.direction.length() - 1.0).abs() < EPS);
        assert!((missile.direction - Vec3::new(0.6, 0.0, 0.8)).length() < EPS);
        assert_eq!(missile.speed, 10.0);
    }

    #[test]
    fn test_spawn_rejects_zero_direction() {
        let mut missiles = controller(10.0, 5.0);
        let err = missiles.spawn(Vec3::ONE, Vec3::ZERO).unwrap_err();

        assert!(matches!(err, SimulationError::DegenerateDirection { .. }));
        assert!(missiles.is_empty());
    }

    #[test]
    fn test_spawn_then_zero_advance_keeps_origin() {
        let mut missiles = controller(10.0, 5.0);
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let id = missiles.spawn(origin, Vec3::X).unwrap();

        let expired = missiles.advance(0.0);

        assert!(expired.is_empty());
        assert_eq!(missiles.get(id).unwrap().position, origin);
    }

    #[test]
    fn test_advance_moves_along_direction() {
        let mut missiles = controller(10.0, 5.0);
        let id = missiles.spawn(Vec3::ZERO, Vec3::new(0.0, 0.0, -2.0)).unwrap();

        missiles.advance(0.5);

        let missile = missiles.get(id).unwrap();
        assert!((missile.position - Vec3::new(0.0, 0.0, -5.0)).length() < EPS);
        assert!((missile.age - 0.5).abs() < EPS);
    }

    #[test]
    fn test_distance_equals_speed_times_elapsed() {
        let mut missiles = controller(7.0, 100.0);
        let origin = Vec3::new(-4.0, 1.0, 9.0);
        let id = missiles.spawn(origin, Vec3::new(1.0, -1.0, 0.0)).unwrap();

        let steps = [0.016, 0.033, 0.0, 0.25, 0.1, 1.5, 0.007];
        let mut total = 0.0;
        for dt in steps {
            missiles.advance(dt);
            total += dt;

            let missile = missiles.get(id).unwrap();
            let travelled = (missile.position - origin).length();
            assert!(
                (travelled - 7.0 * total).abs() < 1e-3,
                "travelled {} expected {}",
                travelled,
                7.0 * total
            );
            assert!((missile.distance_travelled() - travelled).abs() < 1e-3);
        }
    }

    #[test]
    fn test_removed_exactly_when_age_reaches_cap() {
        let mut missiles = controller(1.0, 1.0);
        let id = missiles.spawn(Vec3::ZERO, Vec3::Y).unwrap();

        // 0.5 → жива
        assert!(missiles.advance(0.5).is_empty());
        assert!(missiles.get(id).is_some());

        // 1.0 == cap → удалена на этом тике
        let expired = missiles.advance(0.5);
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].id, id);
        assert!(missiles.get(id).is_none());
    }

    #[test]
    fn test_retained_just_below_cap() {
        let mut missiles = controller(1.0, 1.0);
        missiles.spawn(Vec3::ZERO, Vec3::Y).unwrap();

        assert!(missiles.advance(0.999).is_empty());
        assert_eq!(missiles.len(), 1);

        assert_eq!(missiles.advance(0.002).len(), 1);
        assert!(missiles.is_empty());
    }

    #[test]
    fn test_expiry_is_by_predicate_not_spawn_order() {
        let mut missiles = controller(1.0, 1.0);
        let first = missiles.spawn(Vec3::ZERO, Vec3::X).unwrap();
        missiles.advance(0.6);
        let second = missiles.spawn(Vec3::ZERO, Vec3::X).unwrap();

        let expired = missiles.advance(0.5);

        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].id, first);
        assert!(missiles.get(second).is_some());
    }

    #[test]
    fn test_expired_missile_reports_final_position() {
        let mut missiles = controller(4.0, 1.0);
        missiles.spawn(Vec3::ZERO, Vec3::Z).unwrap();

        let expired = missiles.advance(1.5);

        assert_eq!(expired.len(), 1);
        assert!((expired[0].position - Vec3::new(0.0, 0.0, 6.0)).length() < EPS);
    }

    #[test]
    fn test_advance_empty_is_noop() {
        let mut missiles = controller(10.0, 5.0);
        assert!(missiles.advance(1.0).is_empty());
        assert!(missiles.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut missiles = controller(10.0, 1.0);
        let a = missiles.spawn(Vec3::ZERO, Vec3::X).unwrap();
        missiles.advance(2.0);
        let b = missiles.spawn(Vec3::ZERO, Vec3::X).unwrap();

        assert_ne!(a, b);
    }
}
