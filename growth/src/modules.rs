//! The three automation modules and their on/off switches.

#[cfg(test)]
#[path = "modules_test.rs"]
mod modules_test;

use serde::{Deserialize, Serialize};

/// One of the three automation modules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Module {
    /// AI conversational agent; lifts traffic-to-lead conversion.
    Chatbot,
    /// CRM follow-up automation; lifts lead-to-sale closing.
    Crm,
    /// SEO content engine; lifts traffic.
    Seo,
}

impl Module {
    /// Canonical order used for labels, cards, and the report.
    pub const ALL: [Self; 3] = [Self::Chatbot, Self::Crm, Self::Seo];

    /// Lowercase identifier, as used in toggle state keys.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Chatbot => "chatbot",
            Self::Crm => "crm",
            Self::Seo => "seo",
        }
    }

    /// Short name listed in the report and the summary prompt.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Chatbot => "AI Agent",
            Self::Crm => "Smart CRM",
            Self::Seo => "SEO Engine",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Chatbot => "AI Conversationalist",
            Self::Crm => "CRM Auto-Pilot",
            Self::Seo => "SEO Content Engine",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Chatbot => "24/7 Intelligent agent to capture & qualify traffic.",
            Self::Crm => "Algorithmic follow-up sequences to close deals.",
            Self::Seo => "Deep topical authority to drive organic reach.",
        }
    }

    /// Badge shown on an active toggle card.
    #[must_use]
    pub fn impact_text(self) -> &'static str {
        match self {
            Self::Chatbot => "+25% Leads",
            Self::Crm => "+30% Closing",
            Self::Seo => "+50% Traffic",
        }
    }

    /// Terminal line written when the module is switched on.
    #[must_use]
    pub fn activation_message(self) -> &'static str {
        match self {
            Self::Chatbot => "Deploying AI Conversationalist agent...",
            Self::Crm => "Syncing CRM automation workflows...",
            Self::Seo => "Indexing content engine parameters...",
        }
    }

    /// Terminal line written when the module is switched off.
    #[must_use]
    pub fn deactivation_message(self) -> String {
        format!("Disabling {} module...", self.key().to_uppercase())
    }
}

/// On/off state of each module. All off on a fresh session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleToggles {
    pub chatbot: bool,
    pub crm: bool,
    pub seo: bool,
}

impl ModuleToggles {
    /// Every module switched on.
    #[must_use]
    pub fn all() -> Self {
        Self { chatbot: true, crm: true, seo: true }
    }

    #[must_use]
    pub fn is_active(&self, module: Module) -> bool {
        match module {
            Module::Chatbot => self.chatbot,
            Module::Crm => self.crm,
            Module::Seo => self.seo,
        }
    }

    pub fn set(&mut self, module: Module, active: bool) {
        match module {
            Module::Chatbot => self.chatbot = active,
            Module::Crm => self.crm = active,
            Module::Seo => self.seo = active,
        }
    }

    /// Flip one module and return its new state.
    pub fn toggle(&mut self, module: Module) -> bool {
        let active = !self.is_active(module);
        self.set(module, active);
        active
    }

    /// Active modules in canonical order.
    pub fn active(&self) -> impl Iterator<Item = Module> + '_ {
        Module::ALL.into_iter().filter(|m| self.is_active(*m))
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Human-readable list of active modules, or `None Selected`.
    #[must_use]
    pub fn active_label(&self) -> String {
        let labels: Vec<&str> = self.active().map(Module::label).collect();
        if labels.is_empty() {
            "None Selected".to_owned()
        } else {
            labels.join(", ")
        }
    }
}

/// Colour band of the score gauge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTier {
    Critical,
    Warning,
    Healthy,
}

/// Share of modules switched on, as a 0-100 score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthScore(pub u8);

impl GrowthScore {
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn from_toggles(toggles: &ModuleToggles) -> Self {
        let ratio = toggles.active_count() as f64 / Module::ALL.len() as f64;
        Self((ratio * 100.0).round() as u8)
    }

    #[must_use]
    pub fn tier(self) -> ScoreTier {
        match self.0 {
            0..40 => ScoreTier::Critical,
            40..70 => ScoreTier::Warning,
            _ => ScoreTier::Healthy,
        }
    }
}
