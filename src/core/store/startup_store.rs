use crate::core::telemetry::{StartupAppEntry, StartupEventRule};

#[derive(Debug, Clone)]
pub struct StartupStore {
    apps: Vec<StartupAppEntry>,
    rules: Vec<StartupEventRule>,
    next_rule_id: u64,
}

impl StartupStore {
    pub fn new(apps: Vec<StartupAppEntry>, rules: Vec<StartupEventRule>) -> Self {
        let next_rule_id = rules
            .iter()
            .filter_map(|r| r.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            apps,
            rules,
            next_rule_id,
        }
    }

    pub fn apps(&self) -> &[StartupAppEntry] {
        &self.apps
    }

    pub fn rules(&self) -> &[StartupEventRule] {
        &self.rules
    }

    /// Flip `enabled`; returns the new value, `None` for an unknown id
    pub fn toggle_app(&mut self, id: &str) -> Option<bool> {
        let app = self.apps.iter_mut().find(|a| a.id == id)?;
        app.enabled = !app.enabled;
        log::debug!("Startup entry {} enabled={}", app.name, app.enabled);
        Some(app.enabled)
    }

    /// Add a rule from raw form input.
    ///
    /// Trigger and launch must be non-blank; a delay that does not parse counts as zero.
    pub fn add_rule(
        &mut self,
        trigger_app: &str,
        launch_app: &str,
        delay_input: &str,
    ) -> Option<&StartupEventRule> {
        let trigger_app = trigger_app.trim();
        let launch_app = launch_app.trim();
        if trigger_app.is_empty() || launch_app.is_empty() {
            return None;
        }

        let rule = StartupEventRule {
            id: self.next_rule_id.to_string(),
            trigger_app: trigger_app.to_string(),
            launch_app: launch_app.to_string(),
            delay_seconds: delay_input.trim().parse().unwrap_or(0),
        };
        self.next_rule_id += 1;
        log::info!(
            "Startup rule added: {} -> {} after {}s",
            rule.trigger_app,
            rule.launch_app,
            rule.delay_seconds
        );
        self.rules.push(rule);
        self.rules.last()
    }

    pub fn remove_rule(&mut self, id: &str) -> bool {
        let before = self.rules.len();
        self.rules.retain(|r| r.id != id);
        before != self.rules.len()
    }
}
