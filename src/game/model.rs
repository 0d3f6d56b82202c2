//! Voxel model registry
//!
//! Model files are parsed elsewhere; the simulation only needs each
//! model's bounding size. Models are registered by name up front and
//! actors resolve their model lists at construction time.

use std::collections::HashMap;
use std::sync::Arc;

use glam::Vec3;

use super::error::GameError;

/// Bounding information for one loaded voxel model.
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelModel {
    name: String,
    /// Extent in voxels along x, y, z
    size: Vec3,
}

impl VoxelModel {
    pub fn new(name: impl Into<String>, size: Vec3) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.size
    }
}

/// Shared, immutable reference to a registered model.
pub type ModelHandle = Arc<VoxelModel>;

/// Name → model lookup table.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: HashMap<String, ModelHandle>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-filled with the stock player, enemy and pickup models.
    pub fn with_default_models() -> Self {
        let mut registry = Self::new();

        let player = Vec3::new(9.0, 14.0, 9.0);
        registry.register("player_0", player);
        registry.register("player_1", player);
        for i in 0..5 {
            registry.register(format!("player_death{i}"), player);
        }

        let enemy = Vec3::new(12.0, 12.0, 12.0);
        registry.register("enemy_0", enemy);
        registry.register("enemy_1", enemy);
        for i in 0..3 {
            registry.register(format!("enemy_death{i}"), enemy);
        }

        registry.register("powerup", Vec3::new(6.0, 6.0, 6.0));
        registry.register("bullet", Vec3::ONE);
        registry
    }

    /// Register (or replace) a model; returns its handle.
    pub fn register(&mut self, name: impl Into<String>, size: Vec3) -> ModelHandle {
        let name = name.into();
        let handle = Arc::new(VoxelModel::new(name.clone(), size));
        self.models.insert(name, Arc::clone(&handle));
        handle
    }

    pub fn get(&self, name: &str) -> Result<ModelHandle, GameError> {
        self.models
            .get(name)
            .cloned()
            .ok_or_else(|| GameError::UnknownModel(name.to_string()))
    }

    /// Resolve a list of names in order, failing on the first unknown one.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<ModelHandle>, GameError> {
        names.iter().map(|name| self.get(name.as_ref())).collect()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut registry = ModelRegistry::new();
        registry.register("crate", Vec3::new(2.0, 3.0, 4.0));

        let model = registry.get("crate").unwrap();
        assert_eq!(model.name(), "crate");
        assert_eq!(model.size(), Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_unknown_model_is_error() {
        let registry = ModelRegistry::new();
        let err = registry.get("missing").unwrap_err();
        assert!(matches!(err, GameError::UnknownModel(ref name) if name == "missing"));
    }

    #[test]
    fn test_resolve_keeps_order() {
        let registry = ModelRegistry::with_default_models();
        let models = registry.resolve(&["player_1", "player_0"]).unwrap();
        assert_eq!(models[0].name(), "player_1");
        assert_eq!(models[1].name(), "player_0");

        assert!(registry.resolve(&["player_0", "nope"]).is_err());
    }

    #[test]
    fn test_default_models_present() {
        let registry = ModelRegistry::with_default_models();
        assert!(registry.get("player_death4").is_ok());
        assert!(registry.get("enemy_death2").is_ok());
        assert!(registry.get("powerup").is_ok());
    }
}
