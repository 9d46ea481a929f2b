/// Enchantment vocabulary understood by the host.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Enchantment {
    Protection,
    FireProtection,
    FeatherFalling,
    Sharpness,
    Smite,
    Knockback,
    FireAspect,
    Looting,
    Efficiency,
    SilkTouch,
    Unbreaking,
    Fortune,
    Power,
    Punch,
    Flame,
    /// Bow enchantment; inert on every other item, which makes it the glow carrier.
    Infinity,
    LuckOfTheSea,
    Lure,
    Mending,
}

impl Enchantment {
    /// Lowest level obtainable without bypassing restrictions.
    pub const fn start_level(self) -> u16 {
        1
    }

    /// Highest level obtainable without bypassing restrictions.
    pub const fn max_level(self) -> u16 {
        use Enchantment::*;
        match self {
            Protection | FireProtection | FeatherFalling | Efficiency => 4,
            Sharpness | Smite | Power => 5,
            Knockback | Punch | FireAspect => 2,
            Looting | Fortune | Unbreaking | LuckOfTheSea | Lure => 3,
            SilkTouch | Flame | Infinity | Mending => 1,
        }
    }

    pub fn accepts_level(self, level: u16) -> bool {
        (self.start_level()..=self.max_level()).contains(&level)
    }
}
