use std::collections::BTreeMap;

use super::{ItemPlatform, PlatformError};
use crate::meta::ItemMeta;
use crate::stack::{ItemStack, Material};

/// Physical shape of a material, which decides its metadata variant.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MaterialShape {
    #[default]
    Item,
    /// Player heads and mob skulls. Carries identity metadata.
    Head,
}

/// Host-side description of one material.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialSpec {
    pub key: Material,
    #[cfg_attr(feature = "serde", serde(default = "MaterialSpec::default_max_stack"))]
    pub max_stack: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub shape: MaterialShape,
}

impl MaterialSpec {
    pub const DEFAULT_MAX_STACK: u32 = 64;

    pub fn new(key: impl Into<Material>) -> Self {
        Self {
            key: key.into(),
            max_stack: Self::DEFAULT_MAX_STACK,
            shape: MaterialShape::Item,
        }
    }

    pub fn with_max_stack(mut self, max_stack: u32) -> Self {
        self.max_stack = max_stack;
        self
    }

    pub fn with_shape(mut self, shape: MaterialShape) -> Self {
        self.shape = shape;
        self
    }

    /// Metadata a freshly created stack of this material starts with.
    pub fn default_meta(&self) -> ItemMeta {
        match self.shape {
            MaterialShape::Item => ItemMeta::default(),
            MaterialShape::Head => ItemMeta::new_skull(),
        }
    }

    #[cfg(feature = "serde")]
    fn default_max_stack() -> u32 {
        Self::DEFAULT_MAX_STACK
    }
}

/// The set of materials a host knows about.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MaterialCatalog {
    materials: BTreeMap<Material, MaterialSpec>,
}

impl MaterialCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later specs with the same key replace earlier ones.
    pub fn from_specs(specs: impl IntoIterator<Item = MaterialSpec>) -> Self {
        let mut catalog = Self::new();
        for spec in specs {
            catalog.insert(spec);
        }
        catalog
    }

    /// A small built-in vocabulary covering common GUI items.
    pub fn vanilla() -> Self {
        use MaterialShape::Head;
        Self::from_specs([
            MaterialSpec::new("air"),
            MaterialSpec::new("stone"),
            MaterialSpec::new("cobblestone"),
            MaterialSpec::new("paper"),
            MaterialSpec::new("book"),
            MaterialSpec::new("barrier"),
            MaterialSpec::new("arrow"),
            MaterialSpec::new("emerald"),
            MaterialSpec::new("black_stained_glass_pane"),
            MaterialSpec::new("gray_stained_glass_pane"),
            MaterialSpec::new("ender_pearl").with_max_stack(16),
            MaterialSpec::new("bow").with_max_stack(1),
            MaterialSpec::new("diamond_sword").with_max_stack(1),
            MaterialSpec::new("player_head").with_shape(Head),
            MaterialSpec::new("skeleton_skull").with_shape(Head),
            MaterialSpec::new("zombie_head").with_shape(Head),
            MaterialSpec::new("creeper_head").with_shape(Head),
        ])
    }

    /// A `max_stack` of 0 is raised to 1, since no amount could ever fit it.
    pub fn insert(&mut self, mut spec: MaterialSpec) -> Option<MaterialSpec> {
        if spec.max_stack == 0 {
            tracing::warn!(kind = %spec.key, "max_stack 0 raised to 1");
            spec.max_stack = 1;
        }
        self.materials.insert(spec.key.clone(), spec)
    }

    pub fn get(&self, kind: &Material) -> Option<&MaterialSpec> {
        self.materials.get(kind)
    }

    pub fn contains(&self, kind: &Material) -> bool {
        self.materials.contains_key(kind)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialSpec> {
        self.materials.values()
    }
}

/// In-memory host backed by a [`MaterialCatalog`].
#[derive(Clone, Debug, Default)]
pub struct CatalogPlatform {
    catalog: MaterialCatalog,
}

impl CatalogPlatform {
    pub fn new(catalog: MaterialCatalog) -> Self {
        Self { catalog }
    }

    pub fn vanilla() -> Self {
        Self::new(MaterialCatalog::vanilla())
    }

    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }

    fn spec(&self, kind: &Material) -> Result<&MaterialSpec, PlatformError> {
        self.catalog.get(kind).ok_or_else(|| {
            tracing::warn!(%kind, "rejected unknown item kind");
            PlatformError::InvalidKind(kind.clone())
        })
    }

    fn check_amount(spec: &MaterialSpec, amount: u32) -> Result<(), PlatformError> {
        if amount == 0 || amount > spec.max_stack {
            tracing::warn!(kind = %spec.key, amount, max = spec.max_stack, "rejected stack size");
            return Err(PlatformError::AmountOutOfRange {
                kind: spec.key.clone(),
                amount,
                max: spec.max_stack,
            });
        }
        Ok(())
    }
}

impl ItemPlatform for CatalogPlatform {
    fn create_item(&self, kind: &Material, amount: u32) -> Result<ItemStack, PlatformError> {
        let spec = self.spec(kind)?;
        Self::check_amount(spec, amount)?;
        Ok(ItemStack::new(spec.key.clone(), amount, spec.default_meta()))
    }

    fn commit_meta(&self, stack: &mut ItemStack, meta: ItemMeta) -> Result<(), PlatformError> {
        let spec = self.spec(stack.kind())?;
        if !spec.default_meta().same_variant(&meta) {
            tracing::warn!(kind = %spec.key, "rejected metadata of another variant");
            return Err(PlatformError::MetaMismatch {
                kind: spec.key.clone(),
            });
        }
        stack.store_meta(meta);
        Ok(())
    }

    fn set_amount(&self, stack: &mut ItemStack, amount: u32) -> Result<(), PlatformError> {
        let spec = self.spec(stack.kind())?;
        Self::check_amount(spec, amount)?;
        stack.store_amount(amount);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorSeverity, ItemError};

    #[test]
    fn creates_skull_meta_for_heads() {
        let platform = CatalogPlatform::vanilla();
        let head = platform
            .create_item(&Material::new("player_head"), 1)
            .unwrap();
        assert!(platform.item_meta(&head).supports_identity());

        let stone = platform.create_item(&Material::new("stone"), 1).unwrap();
        assert!(!platform.item_meta(&stone).supports_identity());
    }

    #[test]
    fn rejects_unknown_kind() {
        let platform = CatalogPlatform::vanilla();
        let err = platform
            .create_item(&Material::new("unobtainium"), 1)
            .unwrap_err();
        assert_eq!(err, PlatformError::InvalidKind(Material::new("unobtainium")));
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.error_code(), "INVALID_KIND");
    }

    #[test]
    fn rejects_amounts_outside_stack_range() {
        let platform = CatalogPlatform::vanilla();
        let sword = Material::new("diamond_sword");
        assert!(matches!(
            platform.create_item(&sword, 2),
            Err(PlatformError::AmountOutOfRange { max: 1, .. })
        ));

        let mut stone = platform.create_item(&Material::new("stone"), 1).unwrap();
        assert!(platform.set_amount(&mut stone, 0).is_err());
        assert!(platform.set_amount(&mut stone, 65).is_err());
        platform.set_amount(&mut stone, 64).unwrap();
        assert_eq!(stone.amount(), 64);
    }

    #[test]
    fn rejects_meta_of_another_variant() {
        let platform = CatalogPlatform::vanilla();
        let mut stone = platform.create_item(&Material::new("stone"), 1).unwrap();
        let err = platform
            .commit_meta(&mut stone, ItemMeta::new_skull())
            .unwrap_err();
        assert!(err.severity().is_internal());
        assert!(!platform.item_meta(&stone).supports_identity());
    }

    #[test]
    fn zero_max_stack_is_raised_to_one() {
        let platform = CatalogPlatform::new(MaterialCatalog::from_specs([
            MaterialSpec::new("stone").with_max_stack(0),
        ]));
        assert_eq!(
            platform.catalog().get(&Material::new("stone")).unwrap().max_stack,
            1
        );

        let stack = platform.create_item(&Material::new("stone"), 1).unwrap();
        assert_eq!(stack.amount(), 1);
        assert!(matches!(
            platform.create_item(&Material::new("stone"), 2),
            Err(PlatformError::AmountOutOfRange { max: 1, .. })
        ));
    }

    #[test]
    fn later_specs_replace_earlier_ones() {
        let catalog = MaterialCatalog::from_specs([
            MaterialSpec::new("stone"),
            MaterialSpec::new("stone").with_max_stack(16),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&Material::new("stone")).unwrap().max_stack, 16);
    }
}
