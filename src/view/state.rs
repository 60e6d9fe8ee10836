use super::info::CreatureInfo;

/// Upper bound of a base stat gauge.
pub const STAT_MAX: i64 = 255;

const GAUGE_WIDTH: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatGauge {
    pub label: &'static str,
    pub value: i64,
    pub maximum: i64,
}

impl StatGauge {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            value: 0,
            maximum: STAT_MAX,
        }
    }

    /// `[████░░░░…]` with the filled share of `value / maximum`, clamped to the gauge.
    pub fn bar(&self) -> String {
        let filled = if self.maximum > 0 {
            let value = self.value.clamp(0, self.maximum);
            value as usize * GAUGE_WIDTH / self.maximum as usize
        } else {
            0
        };
        format!("[{}{}]", "█".repeat(filled), "░".repeat(GAUGE_WIDTH - filled))
    }
}

/// Everything the viewer displays. Overwritten on each successful lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub types: String,
    pub height: String,
    pub weight: String,
    pub hp: StatGauge,
    pub attack: StatGauge,
    pub defense: StatGauge,
    pub special_attack: StatGauge,
    pub special_defense: StatGauge,
    pub speed: StatGauge,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            types: "Types: ".to_string(),
            height: "Height: ".to_string(),
            weight: "Weight: ".to_string(),
            hp: StatGauge::new("HP"),
            attack: StatGauge::new("Attack"),
            defense: StatGauge::new("Defense"),
            special_attack: StatGauge::new("Special Attack"),
            special_defense: StatGauge::new("Special Defense"),
            speed: StatGauge::new("Speed"),
        }
    }
}

impl ViewState {
    pub fn apply(&mut self, info: &CreatureInfo) {
        self.types = info.types_text();
        self.height = info.height_text();
        self.weight = info.weight_text();

        let stats = &info.stats;
        self.hp.value = stats.hp;
        self.attack.value = stats.attack;
        self.defense.value = stats.defense;
        self.special_attack.value = stats.special_attack;
        self.special_defense.value = stats.special_defense;
        self.speed.value = stats.speed;
    }

    pub fn gauges(&self) -> [&StatGauge; 6] {
        [
            &self.hp,
            &self.attack,
            &self.defense,
            &self.special_attack,
            &self.special_defense,
            &self.speed,
        ]
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("┌─────────────────────────────────────────┐\n");
        out.push_str("│ Info\n");
        out.push_str(&format!("│   {}\n", self.types));
        out.push_str(&format!("│   {}\n", self.height));
        out.push_str(&format!("│   {}\n", self.weight));
        out.push_str("├─────────────────────────────────────────┤\n");
        out.push_str("│ Stats\n");
        for gauge in self.gauges() {
            out.push_str(&format!("│   {}\n", gauge.label));
            out.push_str(&format!("│   {} {:>3}\n", gauge.bar(), gauge.value));
        }
        out.push_str("└─────────────────────────────────────────┘");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_blank() {
        let state = ViewState::default();
        assert_eq!(state.types, "Types: ");
        assert_eq!(state.height, "Height: ");
        assert_eq!(state.weight, "Weight: ");
        assert!(state.gauges().iter().all(|g| g.value == 0 && g.maximum == 255));
    }

    #[test]
    fn test_stat_bar() {
        let mut gauge = StatGauge::new("HP");
        assert_eq!(gauge.bar(), format!("[{}]", "░".repeat(20)));

        gauge.value = 255;
        assert_eq!(gauge.bar(), format!("[{}]", "█".repeat(20)));

        gauge.value = 300;
        assert_eq!(gauge.bar(), format!("[{}]", "█".repeat(20)));

        gauge.value = 51;
        assert_eq!(gauge.bar(), format!("[{}{}]", "█".repeat(4), "░".repeat(16)));
    }

    #[test]
    fn render_lists_every_stat() {
        let rendered = ViewState::default().render();
        for label in ["Info", "Stats", "HP", "Attack", "Defense", "Special Attack", "Special Defense", "Speed"] {
            assert!(rendered.contains(label), "missing {}", label);
        }
    }
}
