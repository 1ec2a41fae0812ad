// Display names used by the tier tables, keyed by the provider's property codes.

pub const CRIT_DMG: &str = "Crit DMG";
pub const CRIT_RATE: &str = "Crit RATE";

const FIGHT_PROPS: &[(&str, &str)] = &[
    ("FIGHT_PROP_BASE_ATTACK", "Base ATK"),
    ("FIGHT_PROP_HP", "Flat HP"),
    ("FIGHT_PROP_ATTACK", "Flat ATK"),
    ("FIGHT_PROP_DEFENSE", "Flat DEF"),
    ("FIGHT_PROP_HP_PERCENT", "HP%"),
    ("FIGHT_PROP_ATTACK_PERCENT", "ATK%"),
    ("FIGHT_PROP_DEFENSE_PERCENT", "DEF%"),
    ("FIGHT_PROP_CRITICAL", CRIT_RATE),
    ("FIGHT_PROP_CRITICAL_HURT", CRIT_DMG),
    ("FIGHT_PROP_CHARGE_EFFICIENCY", "Energy Recharge"),
    ("FIGHT_PROP_HEAL_ADD", "Healing Bonus"),
    ("FIGHT_PROP_ELEMENT_MASTERY", "Elemental Mastery"),
    ("FIGHT_PROP_PHYSICAL_ADD_HURT", "Physical DMG Bonus"),
    ("FIGHT_PROP_FIRE_ADD_HURT", "Pyro DMG Bonus"),
    ("FIGHT_PROP_ELEC_ADD_HURT", "Electro DMG Bonus"),
    ("FIGHT_PROP_WATER_ADD_HURT", "Hydro DMG Bonus"),
    ("FIGHT_PROP_WIND_ADD_HURT", "Anemo DMG Bonus"),
    ("FIGHT_PROP_ICE_ADD_HURT", "Cryo DMG Bonus"),
    ("FIGHT_PROP_ROCK_ADD_HURT", "Geo DMG Bonus"),
    ("FIGHT_PROP_GRASS_ADD_HURT", "Dendro DMG Bonus"),
];

/// Translates a `FIGHT_PROP_*` code to its display name. Anything else is
/// assumed to already be a display name and is returned unchanged.
pub fn display_name(raw: &str) -> &str {
    FIGHT_PROPS
        .iter()
        .find(|(code, _)| *code == raw)
        .map(|(_, name)| *name)
        .unwrap_or(raw)
}
