//! Health Modifiers
//!
//! When the host adjusts an entity's health it attaches a modifier saying
//! what kind of adjustment it was and what caused it. Plugins read these off
//! events; the grouping type lets them tell an armor reduction from a potion
//! effect without string-matching on the cause.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::command::parameter::NamedVariants;

/// Groupings for health-affecting modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HealthModifierType {
    Absorption,
    Armor,
    DefensivePotionEffect,
    Difficulty,
    HardHat,
    Magic,
    Shield,
}

impl NamedVariants for HealthModifierType {
    const VARIANTS: &'static [HealthModifierType] = &[
        HealthModifierType::Absorption,
        HealthModifierType::Armor,
        HealthModifierType::DefensivePotionEffect,
        HealthModifierType::Difficulty,
        HealthModifierType::HardHat,
        HealthModifierType::Magic,
        HealthModifierType::Shield,
    ];

    fn name(&self) -> &'static str {
        match self {
            HealthModifierType::Absorption => "absorption",
            HealthModifierType::Armor => "armor",
            HealthModifierType::DefensivePotionEffect => "defensive_potion_effect",
            HealthModifierType::Difficulty => "difficulty",
            HealthModifierType::HardHat => "hard_hat",
            HealthModifierType::Magic => "magic",
            HealthModifierType::Shield => "shield",
        }
    }
}

/// Groupings for damage modifiers, the sibling surface to
/// [`HealthModifierType`] on the damage side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DamageModifierType {
    Absorption,
    Armor,
    ArmorEnchantment,
    AttackCooldown,
    CriticalHit,
    DefensivePotionEffect,
    Difficulty,
    HardHat,
    Magic,
    NegativePotionEffect,
    OffensivePotionEffect,
    Shield,
    Sweeping,
    WeaponEnchantment,
}

impl NamedVariants for DamageModifierType {
    const VARIANTS: &'static [DamageModifierType] = &[
        DamageModifierType::Absorption,
        DamageModifierType::Armor,
        DamageModifierType::ArmorEnchantment,
        DamageModifierType::AttackCooldown,
        DamageModifierType::CriticalHit,
        DamageModifierType::DefensivePotionEffect,
        DamageModifierType::Difficulty,
        DamageModifierType::HardHat,
        DamageModifierType::Magic,
        DamageModifierType::NegativePotionEffect,
        DamageModifierType::OffensivePotionEffect,
        DamageModifierType::Shield,
        DamageModifierType::Sweeping,
        DamageModifierType::WeaponEnchantment,
    ];

    fn name(&self) -> &'static str {
        match self {
            DamageModifierType::Absorption => "absorption",
            DamageModifierType::Armor => "armor",
            DamageModifierType::ArmorEnchantment => "armor_enchantment",
            DamageModifierType::AttackCooldown => "attack_cooldown",
            DamageModifierType::CriticalHit => "critical_hit",
            DamageModifierType::DefensivePotionEffect => "defensive_potion_effect",
            DamageModifierType::Difficulty => "difficulty",
            DamageModifierType::HardHat => "hard_hat",
            DamageModifierType::Magic => "magic",
            DamageModifierType::NegativePotionEffect => "negative_potion_effect",
            DamageModifierType::OffensivePotionEffect => "offensive_potion_effect",
            DamageModifierType::Shield => "shield",
            DamageModifierType::Sweeping => "sweeping",
            DamageModifierType::WeaponEnchantment => "weapon_enchantment",
        }
    }
}

/// Configurations rejected by [`HealthModifierBuilder::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HealthModifierError {
    #[error("no modifier type was configured")]
    MissingType,
    #[error("no cause was configured")]
    MissingCause,
}

/// One adjustment applied to an entity's health: what kind, and why.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HealthModifier {
    modifier_type: HealthModifierType,
    cause: String,
}

impl HealthModifier {
    /// Start configuring a modifier.
    pub fn builder() -> HealthModifierBuilder {
        HealthModifierBuilder::default()
    }

    pub fn modifier_type(&self) -> HealthModifierType {
        self.modifier_type
    }

    pub fn cause(&self) -> &str {
        &self.cause
    }
}

/// Builder for [`HealthModifier`]. Both fields are required.
#[derive(Debug, Clone, Default)]
pub struct HealthModifierBuilder {
    modifier_type: Option<HealthModifierType>,
    cause: Option<String>,
}

impl HealthModifierBuilder {
    pub fn modifier_type(mut self, modifier_type: HealthModifierType) -> Self {
        self.modifier_type = Some(modifier_type);
        self
    }

    pub fn cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Return to the freshly-created state.
    pub fn reset(mut self) -> Self {
        self.modifier_type = None;
        self.cause = None;
        self
    }

    /// Finish the modifier.
    ///
    /// # Errors
    /// `MissingType` or `MissingCause` for whichever field was not set.
    pub fn build(&self) -> Result<HealthModifier, HealthModifierError> {
        let Some(modifier_type) = self.modifier_type else {
            return Err(HealthModifierError::MissingType);
        };
        let Some(cause) = &self.cause else {
            return Err(HealthModifierError::MissingCause);
        };
        Ok(HealthModifier {
            modifier_type,
            cause: cause.clone(),
        })
    }
}
