use nalgebra_glm as glm;

pub type ObjectId = usize;

/// Renderable object description, kept CPU-side. The renderer turns these
/// into vertex buffers whenever the scene generation changes.
#[derive(Debug, Clone)]
pub enum SceneObject {
    Box {
        center: glm::Vec3,
        half_extent: f32,
    },
    Arrow {
        origin: glm::Vec3,
        dir: glm::Vec3,
        length: f32,
    },
}

/// Pool of scene objects with stable ids. Slots are recycled on removal.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<Option<SceneObject>>,
    generation: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: SceneObject) -> ObjectId {
        self.generation += 1;
        if let Some(id) = self.objects.iter().position(Option::is_none) {
            self.objects[id] = Some(object);
            id
        } else {
            self.objects.push(Some(object));
            self.objects.len() - 1
        }
    }

    /// Detach an object. Removing an id that was never attached (or already
    /// removed) means marker reconciliation broke its invariant, which is a
    /// logic defect, so this panics rather than absorbing it.
    pub fn remove(&mut self, id: ObjectId) {
        let slot = self
            .objects
            .get_mut(id)
            .unwrap_or_else(|| panic!("scene object {id} out of range"));
        assert!(
            slot.take().is_some(),
            "scene object {id} removed while not attached"
        );
        self.generation += 1;
    }

    /// Overwrite an attached object in place.
    pub fn update(&mut self, id: ObjectId, object: SceneObject) {
        let slot = self
            .objects
            .get_mut(id)
            .unwrap_or_else(|| panic!("scene object {id} out of range"));
        assert!(slot.is_some(), "scene object {id} updated while not attached");
        *slot = Some(object);
        self.generation += 1;
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        matches!(self.objects.get(id), Some(Some(_)))
    }

    pub fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.objects.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bumped on every mutation; the renderer re-uploads when it changes.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube() -> SceneObject {
        SceneObject::Box {
            center: glm::vec3(0.0, 0.0, 0.0),
            half_extent: 0.5,
        }
    }

    #[test]
    fn add_remove_recycles_slots() {
        let mut scene = Scene::new();
        let a = scene.add(cube());
        let b = scene.add(cube());
        assert_ne!(a, b);
        scene.remove(a);
        assert_eq!(scene.len(), 1);
        let c = scene.add(cube());
        assert_eq!(c, a);
        assert!(scene.contains(b) && scene.contains(c));
    }

    #[test]
    fn mutation_bumps_generation() {
        let mut scene = Scene::new();
        let g0 = scene.generation();
        let id = scene.add(cube());
        let g1 = scene.generation();
        assert!(g1 > g0);
        scene.update(id, cube());
        assert!(scene.generation() > g1);
    }

    #[test]
    #[should_panic(expected = "not attached")]
    fn double_remove_panics() {
        let mut scene = Scene::new();
        let id = scene.add(cube());
        scene.remove(id);
        scene.remove(id);
    }
}
