//! Snapshot of the health panel values.

/// What the health screen shows for today.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthRecord {
    /// Manually entered steps for today, 0 when none
    pub step_count: u32,
    /// Last saved weight; not date scoped
    pub weight_kg: Option<f64>,
    /// Water drunk today in liters
    pub water_liters: f64,
    /// Last night's sleep, if entered today
    pub sleep_hours: Option<f64>,
}

impl HealthRecord {
    pub fn weight_display(&self) -> String {
        self.weight_kg
            .map(|w| format!("{:.1} kg", w))
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn water_display(&self) -> String {
        format!("{:.2} L", self.water_liters)
    }

    pub fn sleep_display(&self) -> String {
        self.sleep_hours
            .map(|h| format!("{:.1} óra", h))
            .unwrap_or_else(|| "-".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats() {
        let record = HealthRecord {
            step_count: 1200,
            weight_kg: Some(72.5),
            water_liters: 0.75,
            sleep_hours: None,
        };
        assert_eq!(record.weight_display(), "72.5 kg");
        assert_eq!(record.water_display(), "0.75 L");
        assert_eq!(record.sleep_display(), "-");
    }
}
