use super::*;

#[test]
fn toggles_default_all_off() {
    let t = ModuleToggles::default();
    assert!(!t.chatbot && !t.crm && !t.seo);
    assert_eq!(t.active_count(), 0);
}

#[test]
fn toggle_flips_only_the_named_module() {
    let mut t = ModuleToggles::default();
    assert!(t.toggle(Module::Crm));
    assert_eq!(t, ModuleToggles { chatbot: false, crm: true, seo: false });
    assert!(!t.toggle(Module::Crm));
    assert_eq!(t, ModuleToggles::default());
}

#[test]
fn active_label_none_selected_when_empty() {
    assert_eq!(ModuleToggles::default().active_label(), "None Selected");
}

#[test]
fn active_label_lists_in_canonical_order() {
    let mut t = ModuleToggles::default();
    t.toggle(Module::Seo);
    t.toggle(Module::Chatbot);
    assert_eq!(t.active_label(), "AI Agent, SEO Engine");
    assert_eq!(ModuleToggles::all().active_label(), "AI Agent, Smart CRM, SEO Engine");
}

#[test]
fn deactivation_message_uses_uppercase_key() {
    assert_eq!(Module::Chatbot.deactivation_message(), "Disabling CHATBOT module...");
    assert_eq!(Module::Crm.deactivation_message(), "Disabling CRM module...");
    assert_eq!(Module::Seo.deactivation_message(), "Disabling SEO module...");
}

#[test]
fn activation_messages_are_module_specific() {
    assert_eq!(Module::Chatbot.activation_message(), "Deploying AI Conversationalist agent...");
    assert_eq!(Module::Crm.activation_message(), "Syncing CRM automation workflows...");
    assert_eq!(Module::Seo.activation_message(), "Indexing content engine parameters...");
}

#[test]
fn growth_score_steps_with_active_count() {
    let mut t = ModuleToggles::default();
    assert_eq!(GrowthScore::from_toggles(&t), GrowthScore(0));
    t.toggle(Module::Chatbot);
    assert_eq!(GrowthScore::from_toggles(&t), GrowthScore(33));
    t.toggle(Module::Crm);
    assert_eq!(GrowthScore::from_toggles(&t), GrowthScore(67));
    t.toggle(Module::Seo);
    assert_eq!(GrowthScore::from_toggles(&t), GrowthScore(100));
}

#[test]
fn growth_score_tiers() {
    assert_eq!(GrowthScore(0).tier(), ScoreTier::Critical);
    assert_eq!(GrowthScore(33).tier(), ScoreTier::Critical);
    assert_eq!(GrowthScore(40).tier(), ScoreTier::Warning);
    assert_eq!(GrowthScore(67).tier(), ScoreTier::Warning);
    assert_eq!(GrowthScore(70).tier(), ScoreTier::Healthy);
    assert_eq!(GrowthScore(100).tier(), ScoreTier::Healthy);
}

#[test]
fn module_serde_uses_lowercase_keys() {
    let json = serde_json::to_string(&Module::Crm).unwrap();
    assert_eq!(json, "\"crm\"");
}
