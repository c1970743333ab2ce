use crate::material::Material;
use crate::shape::{Hit, Shape};
use crate::*;

use std::sync::Arc;

/// A shape paired with its surface material. Materials are shared:
/// many objects may point at one instance.
pub struct Object {
    pub shape: Shape,
    pub material: Arc<Material>,
}

pub struct ObjectHit {
    pub hit: Hit,
    pub material: Arc<Material>,
}

#[derive(Default)]
pub struct ObjectList {
    objects: Vec<Object>,
}

impl ObjectList {
    pub fn new() -> Self {
        ObjectList { objects: vec![] }
    }

    pub fn push(&mut self, object: Object) {
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Nearest intersection in `[tnear, tfar]` across all objects.
    pub fn test_hit(&self, ray: &Ray, tnear: f32, mut tfar: f32) -> Option<ObjectHit> {
        let mut nearest = None::<ObjectHit>;
        for o in self.objects.iter() {
            // every later object has to beat the running nearest hit
            if let Some(hit) = o.shape.test_hit(ray, tnear, tfar) {
                tfar = hit.dist;
                nearest = Some(ObjectHit {
                    hit,
                    material: o.material.clone(),
                });
            }
        }
        nearest
    }
}
