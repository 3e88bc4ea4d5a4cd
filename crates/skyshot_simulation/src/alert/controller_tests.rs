//! Tests for AlertController.

#[cfg(test)]
mod tests {
    use crate::alert::AlertController;

    #[test]
    fn test_alert_expires_after_second_tick() {
        let mut alerts = AlertController::new();
        let id = alerts.create_alert("X", 2.0).unwrap();

        // Первый тик: осталось 1.0 → алерт жив
        assert!(alerts.check_alerts(1.0).is_empty());
        assert!(alerts.get(id).is_some());

        // Второй тик: осталось 0.0 → удалён
        let expired = alerts.check_alerts(1.0);
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].id, id);
        assert_eq!(expired[0].text, "X");
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_remaining_decreases_by_dt() {
        let mut alerts = AlertController::new();
        let id = alerts.create_alert("tick", 3.0).unwrap();

        alerts.check_alerts(0.25);
        alerts.check_alerts(0.5);

        let remaining = alerts.get(id).unwrap().remaining;
        assert!((remaining - 2.25).abs() < 1e-5, "remaining = {}", remaining);
    }

    #[test]
    fn test_present_while_running_sum_below_lifetime() {
        let mut alerts = AlertController::new();
        let id = alerts.create_alert("sum", 1.0).unwrap();

        let ticks = [0.125, 0.25, 0.125, 0.25, 0.125, 0.125];
        let mut sum = 0.0;
        for dt in ticks {
            alerts.check_alerts(dt);
            sum += dt;

            if sum < 1.0 {
                assert!(alerts.get(id).is_some(), "missing at sum {}", sum);
            } else {
                assert!(alerts.get(id).is_none(), "still present at sum {}", sum);
            }
        }
        assert_eq!(sum, 1.0);
    }

    #[test]
    fn test_non_positive_lifetime_never_displays() {
        let mut alerts = AlertController::new();

        assert!(alerts.create_alert("zero", 0.0).is_none());
        assert!(alerts.create_alert("negative", -1.0).is_none());
        assert!(alerts.create_alert("nan", f32::NAN).is_none());
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_expiry_not_fifo() {
        let mut alerts = AlertController::new();
        let long = alerts.create_alert("long", 5.0).unwrap();
        let short = alerts.create_alert("short", 1.0).unwrap();

        let expired = alerts.check_alerts(1.5);

        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].id, short);
        assert!(alerts.get(long).is_some());
    }

    #[test]
    fn test_iter_keeps_creation_order() {
        let mut alerts = AlertController::new();
        alerts.create_alert("a", 1.0);
        alerts.create_alert("b", 2.0);
        alerts.create_alert("c", 3.0);

        alerts.check_alerts(1.0);

        let texts: Vec<_> = alerts.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "c"]);
    }

    #[test]
    fn test_check_alerts_empty_is_noop() {
        let mut alerts = AlertController::new();
        assert!(alerts.check_alerts(10.0).is_empty());
        assert_eq!(alerts.len(), 0);
    }
}
